//! Capability interfaces for the host platform and the broker client
//!
//! The bridge depends only on these narrow interfaces, never on the host's
//! concrete event type hierarchy or on the broker's wire protocol. Both
//! collaborators drive handlers on a shared cooperative event loop and
//! guarantee in-order, non-overlapping delivery per subscription; ordering
//! across different subscriptions is not guaranteed.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde::Serialize;

use lartec_core::{
    InvocationError, PublishError, StartupError, StateChanged, SubscriptionHandle,
};

/// Handler invoked for each host state-changed notification
pub type StateChangedHandler =
    Arc<dyn Fn(StateChanged) -> BoxFuture<'static, ()> + Send + Sync>;

/// Handler invoked for each message on a subscribed broker topic
pub type MessageHandler = Arc<dyn Fn(BrokerMessage) -> BoxFuture<'static, ()> + Send + Sync>;

/// A raw message delivered by the broker client
///
/// The qos is carried through from the broker callback; the dispatcher
/// only reads the payload.
#[derive(Debug, Clone)]
pub struct BrokerMessage {
    pub topic: String,
    pub payload: String,
    pub qos: u8,
}

/// Target of a service invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceTarget {
    pub entity_id: String,
}

/// The host platform's state-changed notification stream
pub trait EventSource: Send + Sync {
    /// Register a handler for state-changed notifications
    fn subscribe_state_changes(
        &self,
        handler: StateChangedHandler,
    ) -> Result<SubscriptionHandle, StartupError>;
}

/// The host platform's service-call interface
#[async_trait]
pub trait ServiceInvoker: Send + Sync {
    /// Invoke a named service against a target entity
    async fn call_service(
        &self,
        domain: &str,
        service: &str,
        target: ServiceTarget,
        blocking: bool,
    ) -> Result<(), InvocationError>;
}

/// The broker client, assumed already connected when the bridge starts
#[async_trait]
pub trait Broker: Send + Sync {
    /// Publish a payload to a topic
    async fn publish(&self, topic: &str, payload: &str) -> Result<(), PublishError>;

    /// Register a handler for messages on a topic
    fn subscribe(
        &self,
        topic: &str,
        handler: MessageHandler,
    ) -> Result<SubscriptionHandle, StartupError>;
}
