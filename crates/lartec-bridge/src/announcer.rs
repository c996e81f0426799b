//! Announces bridge readiness after startup

use std::sync::Arc;

use tracing::{debug, warn};

use lartec_core::{topics, StatusCell};

use crate::capabilities::Broker;

/// Publishes the readiness ping and marks the lifecycle status OK
///
/// One-shot: a failed init publish is logged but does not block startup,
/// since the status indicator reflects local subsystem wiring, not broker
/// reachability.
pub struct LifecycleAnnouncer {
    broker: Arc<dyn Broker>,
    status: Arc<StatusCell>,
}

impl LifecycleAnnouncer {
    pub fn new(broker: Arc<dyn Broker>, status: Arc<StatusCell>) -> Self {
        Self { broker, status }
    }

    /// Publish the readiness ping, then transition the status cell to OK
    pub async fn announce(&self) {
        if let Err(err) = self.broker.publish(topics::INIT, "").await {
            warn!(error = %err, "readiness announcement failed");
        }

        self.status.mark_ready();
        debug!(status = %self.status.current(), "Bridge ready");
    }
}
