//! # Storefront Session
//!
//! The state behind one open storefront page: the cart, the checkout form, the
//! selected category, whether the checkout is open, and the toasts raised so far.
//!
//! ## Ownership
//!
//! A `Storefront` is owned by whoever renders the page and is only ever mutated
//! through `&mut self`. Every handler runs to completion before the next one starts,
//! so there is nothing to lock.
//!
//! ## Notifications
//!
//! Toasts queue up until the page takes them with
//! [`drain_notifications`](Storefront::drain_notifications). At most
//! [`MAX_NOTIFICATIONS`] are kept; the oldest are dropped first.
//!
//! ## Usage
//!
//! ```rust
//! use fastfood_storefront::model::{FormField, MenuItemId};
//! use fastfood_storefront::storefront::{Storefront, StorefrontAction, StorefrontActionResult};
//! use fastfood_storefront::config::StorefrontConfig;
//!
//! let mut store = Storefront::new(StorefrontConfig::default());
//! store.dispatch(StorefrontAction::AddToCart(MenuItemId(3))).unwrap();
//! store.dispatch(StorefrontAction::AddToCart(MenuItemId(4))).unwrap();
//! store.dispatch(StorefrontAction::EditForm(FormField::Name, "Иван".into())).unwrap();
//! store.dispatch(StorefrontAction::EditForm(FormField::Phone, "+79001234567".into())).unwrap();
//! store.dispatch(StorefrontAction::EditForm(FormField::Address, "пр. Ленина, 88".into())).unwrap();
//!
//! let placed = store.dispatch(StorefrontAction::SubmitOrder).unwrap();
//! match placed {
//!     StorefrontActionResult::OrderPlaced(confirmation) => assert_eq!(confirmation.total, 830),
//!     other => panic!("unexpected {other:?}"),
//! }
//! assert!(store.cart().is_empty());
//! ```

pub mod actions;

pub use actions::*;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::checkout::{self, CheckoutError};
use crate::config::StorefrontConfig;
use crate::model::{
    CategoryFilter, Confirmation, FormField, MenuItem, MenuItemId, Notification, OrderForm,
};
use tracing::{debug, info, instrument, warn};

/// Pending toasts kept before the oldest are dropped.
pub const MAX_NOTIFICATIONS: usize = 16;

#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    cart: Cart,
    form: OrderForm,
    selected: CategoryFilter,
    checkout_open: bool,
    notifications: Vec<Notification>,
    config: StorefrontConfig,
}

impl Storefront {
    /// Opens a session over the standard catalog.
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_catalog(Catalog::standard(), config)
    }

    pub fn with_catalog(catalog: Catalog, config: StorefrontConfig) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            form: OrderForm::default(),
            selected: CategoryFilter::All,
            checkout_open: false,
            notifications: Vec::new(),
            config,
        }
    }

    /// Applies one UI interaction.
    ///
    /// # Errors
    /// Only `SubmitOrder` can fail, with [`CheckoutError`]. The failure is also
    /// recorded as an error notification.
    pub fn dispatch(
        &mut self,
        action: StorefrontAction,
    ) -> Result<StorefrontActionResult, CheckoutError> {
        debug!(?action, "Dispatch");
        match action {
            StorefrontAction::AddToCart(id) => self.add_to_cart(id),
            StorefrontAction::RemoveFromCart(id) => self.cart.remove_from_cart(id),
            StorefrontAction::UpdateQuantity(id, delta) => self.cart.update_quantity(id, delta),
            StorefrontAction::SelectCategory(filter) => self.select_category(filter),
            StorefrontAction::EditForm(field, value) => self.form.set(field, value),
            StorefrontAction::OpenCheckout => {
                return Ok(StorefrontActionResult::CheckoutOpened(self.open_checkout()))
            }
            StorefrontAction::CloseCheckout => self.close_checkout(),
            StorefrontAction::SubmitOrder => {
                return self.submit_order().map(StorefrontActionResult::OrderPlaced)
            }
        }
        Ok(StorefrontActionResult::Done)
    }

    /// Adds one unit of a catalog item. Ids missing from the catalog are ignored.
    pub fn add_to_cart(&mut self, id: MenuItemId) {
        match self.catalog.get(id) {
            Some(item) => self.cart.add_to_cart(item),
            None => warn!(item_id = %id, "Add ignored, not in catalog"),
        }
    }

    pub fn select_category(&mut self, filter: CategoryFilter) {
        info!(category = filter.label(), "Category selected");
        self.selected = filter;
    }

    /// Opens the checkout if there is something to check out.
    pub fn open_checkout(&mut self) -> bool {
        if self.cart.is_empty() {
            debug!("Checkout not opened, cart is empty");
            return false;
        }
        self.checkout_open = true;
        true
    }

    pub fn close_checkout(&mut self) {
        self.checkout_open = false;
    }

    /// Validates the form and places the order.
    ///
    /// On success the cart and the form are emptied, the checkout is closed and a
    /// success toast carrying the total and delivery window is recorded. On failure
    /// nothing but the notification log changes.
    #[instrument(skip(self), fields(total = self.cart.cart_total()))]
    pub fn submit_order(&mut self) -> Result<Confirmation, CheckoutError> {
        let result = checkout::submit_order(
            &self.form,
            self.cart.cart_total(),
            self.cart.item_count(),
            &self.config.delivery_window,
        );

        match result {
            Ok(confirmation) => {
                self.notify(Notification::success(
                    "Заказ оформлен!",
                    confirmation.message(&self.config.currency),
                ));
                self.cart.clear();
                self.form.clear();
                self.checkout_open = false;
                info!(customer = %confirmation.customer, "Order placed, session reset");
                Ok(confirmation)
            }
            Err(e) => {
                self.notify(Notification::error(
                    "Заполните все обязательные поля",
                    e.user_message(),
                ));
                Err(e)
            }
        }
    }

    fn notify(&mut self, notification: Notification) {
        if self.notifications.len() >= MAX_NOTIFICATIONS {
            let dropped = self.notifications.len() + 1 - MAX_NOTIFICATIONS;
            self.notifications.drain(..dropped);
            debug!(dropped, "Oldest notifications dropped");
        }
        self.notifications.push(notification);
    }

    /// Catalog items under the selected category.
    pub fn visible_items(&self) -> Vec<&MenuItem> {
        self.catalog.filter_by_category(self.selected)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    pub fn form_field(&self, field: FormField) -> &str {
        self.form.get(field)
    }

    pub fn selected_category(&self) -> CategoryFilter {
        self.selected
    }

    pub fn is_checkout_open(&self) -> bool {
        self.checkout_open
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Hands the pending toasts to the caller, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(StorefrontConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, NotificationKind};

    fn fill_required(store: &mut Storefront) {
        store.dispatch(StorefrontAction::EditForm(FormField::Name, "Иван".into())).unwrap();
        store
            .dispatch(StorefrontAction::EditForm(FormField::Phone, "+7 (900) 123-45-67".into()))
            .unwrap();
        store
            .dispatch(StorefrontAction::EditForm(FormField::Address, "пр. Ленина, 88, офис 12".into()))
            .unwrap();
    }

    #[test]
    fn unknown_catalog_id_is_ignored() {
        let mut store = Storefront::default();
        store.dispatch(StorefrontAction::AddToCart(MenuItemId(77))).unwrap();
        assert!(store.cart().is_empty());
    }

    #[test]
    fn selected_category_drives_visible_items() {
        let mut store = Storefront::default();
        assert_eq!(store.visible_items().len(), 6);

        store
            .dispatch(StorefrontAction::SelectCategory(CategoryFilter::Only(Category::Drinks)))
            .unwrap();
        let names: Vec<&str> = store.visible_items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Кола 0.5л"]);
    }

    #[test]
    fn checkout_needs_a_non_empty_cart() {
        let mut store = Storefront::default();
        assert_eq!(
            store.dispatch(StorefrontAction::OpenCheckout).unwrap(),
            StorefrontActionResult::CheckoutOpened(false)
        );

        store.dispatch(StorefrontAction::AddToCart(MenuItemId(6))).unwrap();
        assert_eq!(
            store.dispatch(StorefrontAction::OpenCheckout).unwrap(),
            StorefrontActionResult::CheckoutOpened(true)
        );
        store.dispatch(StorefrontAction::CloseCheckout).unwrap();
        assert!(!store.is_checkout_open());
    }

    #[test]
    fn missing_phone_leaves_cart_and_form_untouched() {
        let mut store = Storefront::default();
        store.dispatch(StorefrontAction::AddToCart(MenuItemId(1))).unwrap();
        store.dispatch(StorefrontAction::OpenCheckout).unwrap();
        fill_required(&mut store);
        store.dispatch(StorefrontAction::EditForm(FormField::Phone, String::new())).unwrap();

        let cart_before = store.cart().clone();
        let form_before = store.form().clone();

        let err = store.dispatch(StorefrontAction::SubmitOrder).unwrap_err();
        assert!(matches!(err, CheckoutError::MissingRequiredFields { .. }));
        assert_eq!(store.cart(), &cart_before);
        assert_eq!(store.form(), &form_before);
        assert!(store.is_checkout_open());

        let toasts = store.drain_notifications();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, NotificationKind::Error);
        assert!(toasts[0].description.contains("Телефон"));
        assert!(!toasts[0].description.contains("Missing"));
    }

    #[test]
    fn undrained_notifications_are_capped_oldest_first() {
        let mut store = Storefront::default();
        store.dispatch(StorefrontAction::AddToCart(MenuItemId(1))).unwrap();
        store.dispatch(StorefrontAction::EditForm(FormField::Name, "Иван".into())).unwrap();
        store.dispatch(StorefrontAction::SubmitOrder).unwrap_err();

        store.dispatch(StorefrontAction::EditForm(FormField::Name, String::new())).unwrap();
        for _ in 0..MAX_NOTIFICATIONS + 4 {
            store.dispatch(StorefrontAction::SubmitOrder).unwrap_err();
        }

        let toasts = store.notifications();
        assert_eq!(toasts.len(), MAX_NOTIFICATIONS);
        assert!(toasts.iter().all(|t| t.description.contains("Имя")));

        assert_eq!(store.drain_notifications().len(), MAX_NOTIFICATIONS);
        store.dispatch(StorefrontAction::SubmitOrder).unwrap_err();
        assert_eq!(store.notifications().len(), 1);
    }

    #[test]
    fn successful_submission_resets_session() {
        let mut store = Storefront::default();
        store.dispatch(StorefrontAction::AddToCart(MenuItemId(3))).unwrap();
        store.dispatch(StorefrontAction::AddToCart(MenuItemId(4))).unwrap();
        store.dispatch(StorefrontAction::OpenCheckout).unwrap();
        fill_required(&mut store);

        let result = store.dispatch(StorefrontAction::SubmitOrder).unwrap();
        let StorefrontActionResult::OrderPlaced(confirmation) = result else {
            panic!("expected OrderPlaced");
        };
        assert_eq!(confirmation.total, 830);
        assert_eq!(confirmation.item_count, 2);
        assert!(store.cart().is_empty());
        assert!(store.form().is_empty());
        assert!(!store.is_checkout_open());

        let toasts = store.drain_notifications();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, NotificationKind::Success);
        assert!(toasts[0].description.contains("830 ₽"));
        assert!(toasts[0].description.contains("30-40 минут"));
        assert!(store.notifications().is_empty());
    }
}
