//! # Courier Board Actor
//!
//! The `CourierBoard` owns every courier order and processes requests one at a time
//! in its own Tokio task. Because it has exclusive ownership of `orders`, there is no
//! `Mutex` anywhere.
//!
//! ## Operations
//!
//! * **List**: clones every order, sorted by id.
//! * **Get**: clones one order, or `None`.
//! * **Action**: checks that the order's status allows the action, moves it to the
//!   target status, and returns the updated order. A rejected action leaves the
//!   order as it was.

use super::{CourierAction, CourierError, CourierRequest};
use crate::clients::CourierClient;
use crate::model::{CourierOrder, CourierOrderId};
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct CourierBoard {
    receiver: mpsc::Receiver<CourierRequest>,
    orders: BTreeMap<CourierOrderId, CourierOrder>,
}

impl CourierBoard {
    /// Creates the board and a client connected to it.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel, at least 1. Clients wait when it is full.
    /// * `orders` - Initial orders. A later order with the same id replaces an earlier one.
    pub fn new(
        buffer_size: usize,
        orders: impl IntoIterator<Item = CourierOrder>,
    ) -> (Self, CourierClient) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let board = Self {
            receiver,
            orders: orders.into_iter().map(|o| (o.id, o)).collect(),
        };
        (board, CourierClient::new(sender))
    }

    /// Runs the request loop until every client has been dropped.
    pub async fn run(mut self) {
        info!(size = self.orders.len(), "Courier board started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CourierRequest::List { respond_to } => {
                    debug!(size = self.orders.len(), "List");
                    let _ = respond_to.send(Ok(self.orders.values().cloned().collect()));
                }
                CourierRequest::Get { id, respond_to } => {
                    let order = self.orders.get(&id).cloned();
                    debug!(%id, found = order.is_some(), "Get");
                    let _ = respond_to.send(Ok(order));
                }
                CourierRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(%id, ?action, "Action");
                    let result = match self.orders.get_mut(&id) {
                        Some(order) => apply_action(order, action),
                        None => Err(CourierError::NotFound(id)),
                    };
                    match &result {
                        Ok(order) => info!(%id, status = ?order.status, "Action ok"),
                        Err(e) => warn!(%id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(size = self.orders.len(), "Courier board shutdown");
    }
}

/// Moves `order` one step along its delivery lifecycle.
pub fn apply_action(
    order: &mut CourierOrder,
    action: CourierAction,
) -> Result<CourierOrder, CourierError> {
    if order.status != action.required_status() {
        return Err(CourierError::InvalidTransition {
            id: order.id,
            from: order.status,
            action,
        });
    }
    order.status = action.target_status();
    Ok(order.clone())
}
