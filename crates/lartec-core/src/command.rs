//! Inbound set-state command decoded from the broker

use serde::Deserialize;

use crate::CommandError;

/// A command received on the set-state topic
///
/// `service` names a built-in host action (e.g. "turn_on"); `entity_id`
/// is the target entity. Both fields are required and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InboundCommandMessage {
    pub service: String,
    pub entity_id: String,
}

impl InboundCommandMessage {
    /// Decode a raw broker payload into a command
    ///
    /// Rejects payloads that are not JSON objects with non-empty `service`
    /// and `entity_id` strings.
    pub fn decode(payload: &str) -> Result<Self, CommandError> {
        let message: Self = serde_json::from_str(payload)?;

        if message.service.is_empty() {
            return Err(CommandError::EmptyField("service"));
        }
        if message.entity_id.is_empty() {
            return Err(CommandError::EmptyField("entity_id"));
        }

        Ok(message)
    }
}
