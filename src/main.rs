//! # FastFood Storefront demo
//!
//! Walks one customer through the storefront and one courier through the panel:
//! 1.  Browse the burgers.
//! 2.  Fill the cart and adjust it.
//! 3.  Try to check out with a missing phone, then fix it and submit.
//! 4.  Start and finish a delivery on the courier board.

use fastfood_storefront::clients::CourierApi;
use fastfood_storefront::config::StorefrontConfig;
use fastfood_storefront::lifecycle::{setup_tracing, StorefrontSystem};
use fastfood_storefront::model::{Category, CategoryFilter, CourierOrderId, FormField, MenuItemId};
use fastfood_storefront::storefront::{StorefrontAction, StorefrontActionResult};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = StorefrontConfig::from_env();
    let currency = config.currency.clone();
    let mut system = StorefrontSystem::new(config);

    // =====================================================================
    // Menu
    // =====================================================================
    let store = &mut system.storefront;
    store.dispatch(StorefrontAction::SelectCategory(CategoryFilter::Only(
        Category::Burgers,
    )))?;
    for item in store.visible_items() {
        info!(item_id = %item.id, name = %item.name, price = item.price, "On the menu");
    }

    // =====================================================================
    // Cart
    // =====================================================================
    store.dispatch(StorefrontAction::AddToCart(MenuItemId(1)))?;
    store.dispatch(StorefrontAction::AddToCart(MenuItemId(1)))?;
    store.dispatch(StorefrontAction::AddToCart(MenuItemId(6)))?;
    store.dispatch(StorefrontAction::AddToCart(MenuItemId(4)))?;
    store.dispatch(StorefrontAction::UpdateQuantity(MenuItemId(4), -1))?;
    info!(
        total = store.cart().cart_total(),
        badge = ?store.cart().badge(),
        "Cart ready"
    );

    // =====================================================================
    // Checkout
    // =====================================================================
    store.dispatch(StorefrontAction::OpenCheckout)?;
    store.dispatch(StorefrontAction::EditForm(FormField::Name, "Алиса".into()))?;
    store.dispatch(StorefrontAction::EditForm(
        FormField::Address,
        "ул. Пушкина, 15, кв. 42".into(),
    ))?;

    if let Err(e) = store.dispatch(StorefrontAction::SubmitOrder) {
        warn!(error = %e, "Checkout rejected");
    }

    store.dispatch(StorefrontAction::EditForm(
        FormField::Phone,
        "+7 (900) 123-45-67".into(),
    ))?;
    if let StorefrontActionResult::OrderPlaced(confirmation) =
        store.dispatch(StorefrontAction::SubmitOrder)?
    {
        info!(message = %confirmation.message(&currency), "Checkout accepted");
    }

    for toast in store.drain_notifications() {
        info!(kind = ?toast.kind, title = %toast.title, description = %toast.description, "Toast");
    }

    // =====================================================================
    // Courier panel
    // =====================================================================
    let courier = system.courier_client.clone();
    async {
        for order in courier.active().await? {
            info!(
                id = %order.id,
                address = %order.address,
                items = %order.items_line(),
                status = %order.status,
                "Active order"
            );
        }

        let started = courier.start_delivery(CourierOrderId(101)).await?;
        info!(id = %started.id, status = %started.status, "Delivery started");

        let finished = courier.finish_delivery(CourierOrderId(101)).await?;
        info!(id = %finished.id, status = %finished.status, "Delivery finished");

        if let Err(e) = courier.start_delivery(CourierOrderId(103)).await {
            warn!(error = %e, "Courier action rejected");
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(tracing::info_span!("courier_panel"))
    .await?;
    drop(courier);

    system.shutdown().await?;
    info!("Demo completed successfully");
    Ok(())
}
