//! # Checkout
//!
//! Validation of the order form and construction of the confirmation.
//!
//! Submission is purely local: nothing is sent anywhere. This module only decides
//! whether the form is acceptable and what the customer is told. Resetting the cart
//! and the form afterwards is the job of the [`Storefront`](crate::storefront::Storefront)
//! session that owns them.

pub mod error;

pub use error::*;

use crate::model::{Confirmation, OrderForm};
use tracing::{info, warn};

/// Checks the form and, when complete, builds the confirmation for `cart_total`.
///
/// # Errors
/// [`CheckoutError::MissingRequiredFields`] when name, phone or address is blank.
/// The form is only read, never modified.
pub fn submit_order(
    form: &OrderForm,
    cart_total: u64,
    item_count: u64,
    delivery_window: &str,
) -> Result<Confirmation, CheckoutError> {
    let missing = form.missing_required();
    if !missing.is_empty() {
        warn!(?missing, "Order rejected");
        return Err(CheckoutError::MissingRequiredFields { fields: missing });
    }

    info!(total = cart_total, item_count, "Order accepted");
    Ok(Confirmation {
        customer: form.name.trim().to_string(),
        total: cart_total,
        item_count,
        delivery_window: delivery_window.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FormField;

    fn filled_form() -> OrderForm {
        OrderForm {
            name: "Иван".into(),
            phone: "+7 (900) 123-45-67".into(),
            address: "пр. Ленина, 88, офис 12".into(),
            comment: String::new(),
        }
    }

    #[test]
    fn complete_form_is_confirmed_with_total() {
        let confirmation = submit_order(&filled_form(), 830, 2, "30-40 минут").unwrap();
        assert_eq!(confirmation.total, 830);
        assert_eq!(confirmation.customer, "Иван");
        assert_eq!(
            confirmation.message("₽"),
            "Сумма заказа: 830 ₽. Доставка: 30-40 минут"
        );
    }

    #[test]
    fn empty_phone_is_rejected() {
        let mut form = filled_form();
        form.phone.clear();
        let err = submit_order(&form, 830, 2, "30-40 минут").unwrap_err();
        assert_eq!(
            err,
            CheckoutError::MissingRequiredFields {
                fields: vec![FormField::Phone]
            }
        );
        assert_eq!(err.to_string(), "Missing required fields: Телефон");
        assert_eq!(err.user_message(), "Не заполнены поля: Телефон");
    }

    #[test]
    fn comment_is_optional() {
        let mut form = filled_form();
        form.comment = "   ".into();
        assert!(submit_order(&form, 120, 1, "30-40 минут").is_ok());
    }
}
