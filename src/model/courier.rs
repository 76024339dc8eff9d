//! Orders shown on the courier panel.
//!
//! # Courier Board
//! These records live inside the [`CourierBoard`](crate::courier_actor::CourierBoard)
//! actor. The only way to change them is a
//! [`CourierAction`](crate::courier_actor::CourierAction).
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for courier orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourierOrderId(pub u32);

impl From<u32> for CourierOrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CourierOrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Pending,
    Delivering,
    Completed,
}

impl DeliveryStatus {
    /// Badge text on the courier panel.
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Ожидает",
            DeliveryStatus::Delivering => "В пути",
            DeliveryStatus::Completed => "Доставлен",
        }
    }
}

impl Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourierOrder {
    pub id: CourierOrderId,
    pub address: String,
    pub items: Vec<String>,
    pub total: u32,
    pub status: DeliveryStatus,
}

impl CourierOrder {
    /// Creates a new CourierOrder.
    ///
    /// # Arguments
    /// * `id` - Order number shown on the panel
    /// * `address` - Delivery address
    /// * `items` - Human-readable item descriptions
    /// * `total` - Order total in whole currency units
    /// * `status` - Current delivery status
    pub fn new<I, S>(
        id: impl Into<CourierOrderId>,
        address: impl Into<String>,
        items: I,
        total: u32,
        status: DeliveryStatus,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            address: address.into(),
            items: items.into_iter().map(Into::into).collect(),
            total,
            status,
        }
    }

    /// Items joined the way the panel lists them.
    pub fn items_line(&self) -> String {
        self.items.join(", ")
    }

    pub fn is_active(&self) -> bool {
        self.status != DeliveryStatus::Completed
    }
}
