//! # System Lifecycle
//!
//! Starting, wiring and stopping the storefront.
//!
//! ## Pieces
//!
//! - [`StorefrontSystem`] creates the [`Storefront`](crate::storefront::Storefront)
//!   session and spawns the courier board actor in its own Tokio task.
//! - [`setup_tracing`] installs the `tracing` subscriber once for the whole binary.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the courier client**, closing the sender side of the board's channel
//! 2. **The board notices**: `receiver.recv()` returns `None` once queued requests are served
//! 3. **Await the task** and hand the final session back to the caller
//!
//! The storefront session itself owns no task, so there is nothing to stop on that side.

pub mod storefront_system;
pub mod tracing;

pub use self::tracing::*;
pub use storefront_system::*;
