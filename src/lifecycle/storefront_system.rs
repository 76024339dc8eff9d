use crate::clients::CourierClient;
use crate::config::StorefrontConfig;
use crate::courier_actor::{self, CourierBoard};
use crate::storefront::Storefront;
use tracing::{error, info};

/// Runtime orchestrator for the storefront.
///
/// `StorefrontSystem` is responsible for:
/// - **Session**: the [`Storefront`] that the menu page and cart operate on
/// - **Courier board**: spawning the board actor and handing out its client
/// - **Shutdown**: closing the board and waiting for its task
///
/// # Example
///
/// ```ignore
/// let mut system = StorefrontSystem::new(StorefrontConfig::from_env());
///
/// system.storefront.dispatch(StorefrontAction::AddToCart(MenuItemId(1)))?;
/// system.courier_client.start_delivery(CourierOrderId(101)).await?;
///
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    /// The customer's session.
    pub storefront: Storefront,

    /// Client for the courier board actor.
    pub courier_client: CourierClient,

    /// Task handle of the courier board (used for graceful shutdown).
    handle: tokio::task::JoinHandle<()>,
}

impl StorefrontSystem {
    /// Builds the session and starts the courier board.
    ///
    /// Must be called inside a Tokio runtime. The board is seeded with the demo
    /// orders unless `config.seed_courier_orders` is off.
    pub fn new(config: StorefrontConfig) -> Self {
        let (board, courier_client) = if config.seed_courier_orders {
            courier_actor::new(config.board_buffer)
        } else {
            CourierBoard::new(config.board_buffer, Vec::new())
        };
        let handle = tokio::spawn(board.run());

        info!(
            delivery_window = %config.delivery_window,
            seeded = config.seed_courier_orders,
            "Storefront system started"
        );

        Self {
            storefront: Storefront::new(config),
            courier_client,
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the courier client, which closes the board's channel, then waits for the
    /// board task. Clones of the client held elsewhere keep the board alive until they
    /// are dropped too.
    ///
    /// # Returns
    ///
    /// The final session state, or an error if the board task panicked.
    pub async fn shutdown(self) -> Result<Storefront, String> {
        info!("Shutting down storefront system...");
        drop(self.courier_client);

        if let Err(e) = self.handle.await {
            error!("Courier board task failed: {:?}", e);
            return Err(format!("Courier board task failed: {:?}", e));
        }

        info!("Storefront system shutdown complete.");
        Ok(self.storefront)
    }
}
