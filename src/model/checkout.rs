//! Checkout form, notifications and the confirmation returned by a successful submission.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The fields of the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    Name,
    Phone,
    Address,
    Comment,
}

impl FormField {
    /// Fields that must be filled before an order can be submitted.
    pub const REQUIRED: [FormField; 3] = [FormField::Name, FormField::Phone, FormField::Address];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Имя",
            FormField::Phone => "Телефон",
            FormField::Address => "Адрес доставки",
            FormField::Comment => "Комментарий",
        }
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Contact and delivery details typed in by the customer.
///
/// All fields start empty. Only `comment` is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub comment: String,
}

impl OrderForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Address => &self.address,
            FormField::Comment => &self.comment,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Phone => &mut self.phone,
            FormField::Address => &mut self.address,
            FormField::Comment => &mut self.comment,
        };
        *slot = value.into();
    }

    /// Required fields that are empty or contain only whitespace, in form order.
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient toast shown to the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Report of an accepted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub customer: String,
    pub total: u64,
    pub item_count: u64,
    pub delivery_window: String,
}

impl Confirmation {
    /// Text of the success toast, e.g. `Сумма заказа: 830 ₽. Доставка: 30-40 минут`.
    pub fn message(&self, currency: &str) -> String {
        format!(
            "Сумма заказа: {} {}. Доставка: {}",
            self.total, currency, self.delivery_window
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let mut form = OrderForm::default();
        form.set(FormField::Name, "Анна");
        form.set(FormField::Phone, "   ");
        form.set(FormField::Comment, "домофон не работает");

        assert_eq!(
            form.missing_required(),
            vec![FormField::Phone, FormField::Address]
        );
    }

    #[test]
    fn clear_resets_every_field() {
        let mut form = OrderForm {
            name: "Анна".into(),
            phone: "+7 900 000-00-00".into(),
            address: "ул. Садовая, 7".into(),
            comment: "позвонить".into(),
        };
        form.clear();
        assert!(form.is_empty());
    }
}
