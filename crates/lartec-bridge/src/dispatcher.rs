//! Translates inbound broker messages into host service invocations

use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::{debug, warn};

use lartec_core::{topics, InboundCommandMessage, StartupError, SubscriptionHandle, COMMAND_DOMAIN};

use crate::capabilities::{Broker, BrokerMessage, MessageHandler, ServiceInvoker, ServiceTarget};
use crate::contain;

/// Subscribes to `lartec/setState` and invokes the host service interface
///
/// Every message is dispatched independently and non-blocking; two commands
/// arriving in quick succession are ordered by the host's own invocation
/// queue, not by the dispatcher. Malformed payloads and failed invocations
/// are logged and dropped without touching the subscription. Deliberately
/// not idempotent: the same command twice means two invocations.
pub struct CommandDispatcher {
    broker: Arc<dyn Broker>,
    invoker: Arc<dyn ServiceInvoker>,
    subscription: Option<SubscriptionHandle>,
}

impl CommandDispatcher {
    pub fn new(broker: Arc<dyn Broker>, invoker: Arc<dyn ServiceInvoker>) -> Self {
        Self {
            broker,
            invoker,
            subscription: None,
        }
    }

    /// Register the command topic subscription
    pub fn start(&mut self) -> Result<(), StartupError> {
        let invoker = Arc::clone(&self.invoker);

        let handler: MessageHandler = Arc::new(move |message: BrokerMessage| {
            let invoker = Arc::clone(&invoker);
            Box::pin(async move {
                dispatch(invoker.as_ref(), message).await;
            }) as BoxFuture<'static, ()>
        });

        self.subscription = Some(self.broker.subscribe(topics::SET_STATE, handler)?);
        debug!(topic = topics::SET_STATE, "Command dispatcher started");
        Ok(())
    }

    /// Release the subscription; in-flight handlers complete on their own
    pub fn stop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.release();
            debug!("Command dispatcher stopped");
        }
    }
}

async fn dispatch(invoker: &dyn ServiceInvoker, message: BrokerMessage) {
    let command = match InboundCommandMessage::decode(&message.payload) {
        Ok(command) => command,
        Err(err) => {
            warn!(
                topic = %message.topic,
                error = %err,
                "malformed command; message dropped"
            );
            return;
        }
    };

    debug!(
        service = %command.service,
        entity_id = %command.entity_id,
        "Dispatching command"
    );

    let target = ServiceTarget {
        entity_id: command.entity_id,
    };

    contain(
        invoker
            .call_service(COMMAND_DOMAIN, &command.service, target, false)
            .await,
        "command invocation",
    );
}
