//! Error types for the courier board.

use super::CourierAction;
use crate::model::{CourierOrderId, DeliveryStatus};
use thiserror::Error;

/// Errors that can occur during courier board operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CourierError {
    /// No order with this id is on the board.
    #[error("Courier order not found: {0}")]
    NotFound(CourierOrderId),

    /// The action does not apply to the order's current status.
    #[error("Cannot {action} order {id}: status is {from:?}")]
    InvalidTransition {
        id: CourierOrderId,
        from: DeliveryStatus,
        action: CourierAction,
    },

    /// The board actor stopped or dropped the reply.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CourierError {
    fn from(msg: String) -> Self {
        CourierError::ActorCommunicationError(msg)
    }
}
