//! UI interactions handled by the [`Storefront`](super::Storefront) session.
//!
//! Each variant corresponds to one event handler of the storefront page. They are
//! applied with [`Storefront::dispatch`](super::Storefront::dispatch).

use crate::model::{CategoryFilter, Confirmation, FormField, MenuItemId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorefrontAction {
    /// "В корзину" on a menu card.
    AddToCart(MenuItemId),
    /// Trash button on a cart line.
    RemoveFromCart(MenuItemId),
    /// Plus/minus buttons on a cart line.
    UpdateQuantity(MenuItemId, i32),
    /// A button on the category bar.
    SelectCategory(CategoryFilter),
    /// Typing into a checkout field.
    EditForm(FormField, String),
    OpenCheckout,
    CloseCheckout,
    /// "Оформить заказ" inside the checkout.
    SubmitOrder,
}

/// What a dispatched action produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorefrontActionResult {
    /// The action was applied (or was a no-op on an unknown id).
    Done,
    /// Result of `OpenCheckout`: whether the checkout is now open.
    CheckoutOpened(bool),
    /// Result of a successful `SubmitOrder`.
    OrderPlaced(Confirmation),
}
