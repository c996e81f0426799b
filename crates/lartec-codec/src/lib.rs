//! State codec for the LarTec bridge
//!
//! Converts a host state-changed notification into a flat, broker
//! transportable payload. Encoding is a total function: a notification with
//! either side absent maps that side to `null`, never to an error, and the
//! output contains no host-internal references.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lartec_core::{State, StateChanged, StateSnapshot};

/// Event payload published to `lartec/event`
///
/// Mirrors the notification with both states expanded to plain attribute
/// maps. Absent states serialize as JSON `null`; a present state with no
/// attributes serializes as an object with an empty attribute map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundEventMessage {
    pub entity_id: String,
    pub old_state: Option<StatePayload>,
    pub new_state: Option<StatePayload>,
    pub occurred_at: DateTime<Utc>,
}

/// One side of an outbound event: a state flattened for transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatePayload {
    pub entity_id: String,
    pub value: String,
    pub attributes: HashMap<String, serde_json::Value>,
    pub last_changed: DateTime<Utc>,
}

/// Encode a state-changed notification into an outbound event message
pub fn encode(notification: &StateChanged) -> OutboundEventMessage {
    OutboundEventMessage {
        entity_id: notification.entity_id.to_string(),
        old_state: flatten(&notification.old_state),
        new_state: flatten(&notification.new_state),
        occurred_at: notification.occurred_at,
    }
}

fn flatten(snapshot: &StateSnapshot) -> Option<StatePayload> {
    snapshot.as_present().map(StatePayload::from)
}

impl From<&State> for StatePayload {
    fn from(state: &State) -> Self {
        Self {
            entity_id: state.entity_id.to_string(),
            value: state.value.clone(),
            attributes: state.attributes.clone(),
            last_changed: state.last_changed,
        }
    }
}
