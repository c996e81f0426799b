//! Bidirectional bridge between the host event bus and the broker
//!
//! Local state changes are encoded and published to `lartec/event`; inbound
//! messages on `lartec/setState` are decoded and dispatched as host service
//! calls; readiness is announced on `lartec/init`. The bridge owns all
//! subscriptions and starts and stops them as a unit.
//!
//! Per-message failures inside a running component are contained at the
//! handler boundary and never change the bridge's state; only a failed
//! subscription registration during startup escapes `Bridge::start`.

mod announcer;
mod capabilities;
mod dispatcher;
mod forwarder;

pub use announcer::LifecycleAnnouncer;
pub use capabilities::{
    Broker, BrokerMessage, EventSource, MessageHandler, ServiceInvoker, ServiceTarget,
    StateChangedHandler,
};
pub use dispatcher::CommandDispatcher;
pub use forwarder::EventForwarder;

use std::sync::Arc;

use tracing::{debug, warn};

use lartec_core::{LifecycleStatus, StartupError, StatusCell};

/// Lifecycle state of the whole bridge
///
/// There is no DEGRADED state: per-message failures never leave RUNNING.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    Stopped,
    Starting,
    Running,
}

/// Composition root owning the forwarder, dispatcher, and announcer
pub struct Bridge {
    forwarder: EventForwarder,
    dispatcher: CommandDispatcher,
    announcer: LifecycleAnnouncer,
    status: Arc<StatusCell>,
    state: BridgeState,
}

impl Bridge {
    /// Wire up the bridge against its collaborators
    ///
    /// The broker client is assumed already connected; nothing is
    /// registered until [`Bridge::start`].
    pub fn new(
        events: Arc<dyn EventSource>,
        invoker: Arc<dyn ServiceInvoker>,
        broker: Arc<dyn Broker>,
    ) -> Self {
        let status = Arc::new(StatusCell::new());
        Self {
            forwarder: EventForwarder::new(events, Arc::clone(&broker)),
            dispatcher: CommandDispatcher::new(Arc::clone(&broker), invoker),
            announcer: LifecycleAnnouncer::new(broker, Arc::clone(&status)),
            status,
            state: BridgeState::Stopped,
        }
    }

    /// Register both subscriptions, then announce readiness
    ///
    /// Transitions to RUNNING only after the forwarder's and dispatcher's
    /// subscriptions are both confirmed active. A subscription failure rolls
    /// back anything already registered and leaves the status indicator
    /// UNINITIALIZED; the caller decides whether to retry or abort.
    pub async fn start(&mut self) -> Result<(), StartupError> {
        self.state = BridgeState::Starting;

        if let Err(err) = self.forwarder.start() {
            self.state = BridgeState::Stopped;
            return Err(err);
        }

        if let Err(err) = self.dispatcher.start() {
            self.forwarder.stop();
            self.state = BridgeState::Stopped;
            return Err(err);
        }

        self.announcer.announce().await;
        self.state = BridgeState::Running;
        debug!("Bridge running");
        Ok(())
    }

    /// Release all subscriptions
    ///
    /// In-flight handler invocations complete on their own; no new ones are
    /// dispatched after release. The status indicator is not reverted.
    pub fn stop(&mut self) {
        self.dispatcher.stop();
        self.forwarder.stop();
        self.state = BridgeState::Stopped;
        debug!("Bridge stopped");
    }

    /// Current bridge state
    pub fn state(&self) -> BridgeState {
        self.state
    }

    /// Current lifecycle status
    pub fn status(&self) -> LifecycleStatus {
        self.status.current()
    }

    /// Shared status cell, for mirroring into the host's status entity
    pub fn status_cell(&self) -> Arc<StatusCell> {
        Arc::clone(&self.status)
    }
}

/// Log-and-continue boundary applied around each per-message collaborator
/// call; the affected message is dropped, the subscription stays active.
pub(crate) fn contain<E: std::fmt::Display>(result: Result<(), E>, what: &str) {
    if let Err(err) = result {
        warn!(error = %err, "{} failed; message dropped", what);
    }
}
