//! Custom actions for the courier board.
//!
//! These are the two buttons on a courier order card. They move an order along
//! `Pending -> Delivering -> Completed` and nothing else.

use crate::model::DeliveryStatus;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourierAction {
    /// "Начать доставку": only valid on a pending order.
    StartDelivery,
    /// "Завершить доставку": only valid on an order being delivered.
    FinishDelivery,
}

impl CourierAction {
    /// Status an order must be in for this action to apply.
    pub fn required_status(&self) -> DeliveryStatus {
        match self {
            CourierAction::StartDelivery => DeliveryStatus::Pending,
            CourierAction::FinishDelivery => DeliveryStatus::Delivering,
        }
    }

    /// Status the order is in afterwards.
    pub fn target_status(&self) -> DeliveryStatus {
        match self {
            CourierAction::StartDelivery => DeliveryStatus::Delivering,
            CourierAction::FinishDelivery => DeliveryStatus::Completed,
        }
    }

    /// The action offered for an order in `status`, if any.
    pub fn available_for(status: DeliveryStatus) -> Option<Self> {
        match status {
            DeliveryStatus::Pending => Some(CourierAction::StartDelivery),
            DeliveryStatus::Delivering => Some(CourierAction::FinishDelivery),
            DeliveryStatus::Completed => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CourierAction::StartDelivery => "Начать доставку",
            CourierAction::FinishDelivery => "Завершить доставку",
        }
    }
}

impl Display for CourierAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourierAction::StartDelivery => f.write_str("start delivery"),
            CourierAction::FinishDelivery => f.write_str("finish delivery"),
        }
    }
}
