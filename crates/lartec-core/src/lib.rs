//! Core types for the LarTec bridge
//!
//! This crate provides the types shared between the bridge components:
//! EntityId, State, the state-changed notification, the inbound command
//! message, the lifecycle status cell, and the error taxonomy.

mod command;
mod entity_id;
mod error;
mod notification;
mod state;
mod status;
mod subscription;

pub use command::InboundCommandMessage;
pub use entity_id::{EntityId, EntityIdError};
pub use error::{CommandError, InvocationError, PublishError, StartupError};
pub use notification::{StateChanged, StateSnapshot};
pub use state::State;
pub use status::{LifecycleStatus, StatusCell};
pub use subscription::SubscriptionHandle;

/// Broker topics used by the bridge (bit-exact wire contract)
pub mod topics {
    /// Published once on startup to announce readiness
    pub const INIT: &str = "lartec/init";

    /// Published per state change with the encoded event payload
    pub const EVENT: &str = "lartec/event";

    /// Subscribed for inbound set-state commands
    pub const SET_STATE: &str = "lartec/setState";
}

/// Entity id of the process-wide lifecycle status indicator
pub const STATUS_ENTITY: &str = "lartec.status";

/// Service domain used for all dispatched commands
///
/// Commands only trigger built-in cross-entity actions (turn_on, turn_off,
/// toggle), never domain-specific services.
pub const COMMAND_DOMAIN: &str = "homeassistant";
