//! # FastFood Storefront
//!
//! > **The state behind a single-page food-ordering storefront.**
//!
//! A fixed menu with category filters, a cart, a checkout form and a courier panel,
//! all over in-memory data. Nothing is persisted and nothing leaves the process.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`], [`catalog`])
//! - **Role**: Plain types for menu items, cart entries, the order form, notifications
//!   and courier orders, plus the read-only [`Catalog`](catalog::Catalog).
//!
//! ### 2. The Session ([`cart`], [`checkout`], [`storefront`])
//! - **Role**: The [`Cart`](cart::Cart) state machine, checkout validation, and the
//!   [`Storefront`](storefront::Storefront) that owns both and applies UI actions.
//! - **Concurrency**: none. The session is mutated through `&mut self` by one handler
//!   at a time.
//!
//! ### 3. The Courier Board ([`courier_actor`], [`clients`])
//! - **Role**: Courier orders held by one Tokio actor; the panel reaches it through a
//!   cloneable [`CourierClient`](clients::CourierClient).
//! - **Lifecycle**: `Pending -> Delivering -> Completed`, one button per step.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! - **Role**: [`StorefrontSystem`](lifecycle::StorefrontSystem) wires the session and the
//!   board together; [`StorefrontConfig`](config::StorefrontConfig) carries the settings.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod courier_actor;
pub mod lifecycle;
pub mod model;
pub mod storefront;
