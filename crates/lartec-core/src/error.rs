//! Error taxonomy for the bridge
//!
//! Per-message errors (publish, invocation, malformed command) are contained
//! at the handler boundary and never escape to the event loop. Only
//! `StartupError` propagates out of the bridge's start operation.

use thiserror::Error;

/// The broker rejected or timed out a publish
///
/// The affected message is dropped without retry; the next message is
/// unaffected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("publish to {topic} failed: {reason}")]
pub struct PublishError {
    pub topic: String,
    pub reason: String,
}

impl PublishError {
    pub fn new(topic: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            reason: reason.into(),
        }
    }
}

/// The host's service call failed or raised
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("service call {domain}.{service} failed: {reason}")]
pub struct InvocationError {
    pub domain: String,
    pub service: String,
    pub reason: String,
}

impl InvocationError {
    pub fn new(
        domain: impl Into<String>,
        service: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            service: service.into(),
            reason: reason.into(),
        }
    }
}

/// An inbound payload could not be decoded into a command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("missing or empty field `{0}`")]
    EmptyField(&'static str),
}

/// A subscription could not be registered while the bridge was starting
///
/// This is the only fatal error: the bridge must not transition to RUNNING
/// and surfaces the failure to its caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StartupError {
    #[error("could not subscribe to the host state-changed stream: {0}")]
    EventSubscription(String),

    #[error("could not subscribe to broker topic {topic}: {reason}")]
    BrokerSubscription { topic: String, reason: String },
}

impl StartupError {
    pub fn broker_subscription(topic: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BrokerSubscription {
            topic: topic.into(),
            reason: reason.into(),
        }
    }
}
