//! # Observability & Tracing
//!
//! Structured logging for the storefront and the courier board.
//!
//! ## What Gets Traced
//!
//! - **Cart**: every entry added, incremented, updated or dropped, with `item_id`
//! - **Checkout**: accepted and rejected submissions, with the missing fields
//! - **Courier board**: startup, shutdown, and each action with its outcome
//! - **Client calls**: one span per courier client request
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs (default)
//! RUST_LOG=debug cargo run     # Payloads and ignored no-ops
//! RUST_LOG=fastfood_storefront::courier_actor=debug cargo run
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// Reads the filter from `RUST_LOG`, falling back to `info`. The target prefix is
/// hidden to keep lines short. Calling it twice is harmless; the second call is
/// ignored.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
