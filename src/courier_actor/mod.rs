//! # Courier Actor
//!
//! The courier panel's orders, held by a single actor.
//!
//! ## Structure
//!
//! - [`board`] - [`CourierBoard`], the actor that owns the orders
//! - [`actions`] - [`CourierAction`], the two delivery buttons
//! - [`message`] - [`CourierRequest`], what the client sends to the board
//! - [`error`] - [`CourierError`]
//! - [`new()`] - Factory that builds the board seeded with the demo orders
//!
//! ## Usage
//!
//! ```rust
//! use fastfood_storefront::clients::CourierApi;
//! use fastfood_storefront::courier_actor;
//! use fastfood_storefront::model::{CourierOrderId, DeliveryStatus};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (board, client) = courier_actor::new(32);
//!     tokio::spawn(board.run());
//!
//!     let order = client.start_delivery(CourierOrderId(101)).await?;
//!     assert_eq!(order.status, DeliveryStatus::Delivering);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod board;
pub mod error;
pub mod message;

pub use actions::*;
pub use board::*;
pub use error::*;
pub use message::*;

use crate::clients::CourierClient;
use crate::model::{CourierOrder, DeliveryStatus};

/// Orders shown on the courier panel when the storefront starts.
pub fn seed_orders() -> Vec<CourierOrder> {
    vec![
        CourierOrder::new(
            101,
            "ул. Пушкина, 15, кв. 42",
            ["Чизбургер x2", "Кола"],
            820,
            DeliveryStatus::Pending,
        ),
        CourierOrder::new(
            102,
            "пр. Ленина, 88, офис 12",
            ["Пицца Пепперони", "Картофель Фри"],
            830,
            DeliveryStatus::Delivering,
        ),
        CourierOrder::new(
            103,
            "ул. Садовая, 7",
            ["Двойной Биг Бургер", "Наггетсы"],
            800,
            DeliveryStatus::Completed,
        ),
    ]
}

/// Creates a courier board holding [`seed_orders`] and its client.
pub fn new(buffer_size: usize) -> (CourierBoard, CourierClient) {
    CourierBoard::new(buffer_size, seed_orders())
}
