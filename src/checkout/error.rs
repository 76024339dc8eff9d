//! Error types for checkout.

use crate::model::FormField;
use thiserror::Error;

/// Errors that can occur while submitting an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    /// One or more required contact fields are empty.
    #[error("Missing required fields: {}", join_labels(.fields))]
    MissingRequiredFields { fields: Vec<FormField> },
}

impl CheckoutError {
    /// Customer-facing description for the error toast.
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::MissingRequiredFields { fields } => {
                format!("Не заполнены поля: {}", join_labels(fields))
            }
        }
    }
}

fn join_labels(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(FormField::label)
        .collect::<Vec<_>>()
        .join(", ")
}
