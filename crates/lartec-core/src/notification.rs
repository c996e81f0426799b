//! State-changed notification delivered by the host platform

use chrono::{DateTime, Utc};

use crate::{EntityId, State};

/// Presence of a state on one side of a change
///
/// An entity that was just created has no old state; one that was just
/// removed has no new state. Resolving this once here keeps existence
/// checks out of the message handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum StateSnapshot {
    Absent,
    Present(State),
}

impl StateSnapshot {
    /// Get the state if present
    pub fn as_present(&self) -> Option<&State> {
        match self {
            Self::Absent => None,
            Self::Present(state) => Some(state),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<Option<State>> for StateSnapshot {
    fn from(state: Option<State>) -> Self {
        match state {
            None => Self::Absent,
            Some(state) => Self::Present(state),
        }
    }
}

/// A state-changed notification from the host platform
///
/// Produced by the host's state machine; read-only to the bridge.
#[derive(Debug, Clone, PartialEq)]
pub struct StateChanged {
    /// The entity whose state changed
    pub entity_id: EntityId,

    /// State before the change, absent if the entity was just created
    pub old_state: StateSnapshot,

    /// State after the change, absent if the entity was just removed
    pub new_state: StateSnapshot,

    /// When the change occurred
    pub occurred_at: DateTime<Utc>,
}

impl StateChanged {
    /// Create a notification with the current timestamp
    pub fn new(
        entity_id: EntityId,
        old_state: impl Into<StateSnapshot>,
        new_state: impl Into<StateSnapshot>,
    ) -> Self {
        Self {
            entity_id,
            old_state: old_state.into(),
            new_state: new_state.into(),
            occurred_at: Utc::now(),
        }
    }
}
