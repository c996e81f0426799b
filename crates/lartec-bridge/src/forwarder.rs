//! Forwards host state changes onto the broker event topic

use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::{debug, warn};

use lartec_core::{topics, StartupError, StateChanged, SubscriptionHandle};

use crate::capabilities::{Broker, EventSource, StateChangedHandler};
use crate::contain;

/// Bridges local state-changed notifications onto `lartec/event`
///
/// Each notification is encoded and published independently. A failed
/// encode or publish drops that one message and is logged; the stream
/// keeps processing subsequent notifications. Delivery outward is
/// at-most-once, no retry.
pub struct EventForwarder {
    events: Arc<dyn EventSource>,
    broker: Arc<dyn Broker>,
    subscription: Option<SubscriptionHandle>,
}

impl EventForwarder {
    pub fn new(events: Arc<dyn EventSource>, broker: Arc<dyn Broker>) -> Self {
        Self {
            events,
            broker,
            subscription: None,
        }
    }

    /// Register the state-changed subscription
    pub fn start(&mut self) -> Result<(), StartupError> {
        let broker = Arc::clone(&self.broker);

        let handler: StateChangedHandler = Arc::new(move |notification: StateChanged| {
            let broker = Arc::clone(&broker);
            Box::pin(async move {
                forward(broker.as_ref(), notification).await;
            }) as BoxFuture<'static, ()>
        });

        self.subscription = Some(self.events.subscribe_state_changes(handler)?);
        debug!(topic = topics::EVENT, "Event forwarder started");
        Ok(())
    }

    /// Release the subscription; in-flight handlers complete on their own
    pub fn stop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.release();
            debug!("Event forwarder stopped");
        }
    }
}

async fn forward(broker: &dyn Broker, notification: StateChanged) {
    let message = lartec_codec::encode(&notification);

    let payload = match serde_json::to_string(&message) {
        Ok(payload) => payload,
        Err(err) => {
            warn!(
                entity_id = %notification.entity_id,
                error = %err,
                "state change could not be encoded; message dropped"
            );
            return;
        }
    };

    contain(
        broker.publish(topics::EVENT, &payload).await,
        "state change publish",
    );
}
