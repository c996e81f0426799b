//! Process-wide lifecycle status indicator

use std::sync::atomic::{AtomicBool, Ordering};

/// Value of the lifecycle status indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStatus {
    Uninitialized,
    Ok,
}

impl LifecycleStatus {
    /// String form written to the host's `lartec.status` entity
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "UNINITIALIZED",
            Self::Ok => "OK",
        }
    }
}

impl std::fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-writer, multiple-reader cell holding the lifecycle status
///
/// Written exactly once by the lifecycle announcer after successful startup,
/// never reverted by the bridge itself.
#[derive(Debug, Default)]
pub struct StatusCell {
    ready: AtomicBool,
}

impl StatusCell {
    /// Create a cell in the UNINITIALIZED state
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition to OK; returns false if already marked
    pub fn mark_ready(&self) -> bool {
        !self.ready.swap(true, Ordering::SeqCst)
    }

    /// Read the current status
    pub fn current(&self) -> LifecycleStatus {
        if self.ready.load(Ordering::SeqCst) {
            LifecycleStatus::Ok
        } else {
            LifecycleStatus::Uninitialized
        }
    }
}
