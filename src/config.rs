//! # Configuration
//!
//! Runtime settings for the storefront. Defaults match the live storefront; each one
//! can be overridden from the environment:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `FASTFOOD_DELIVERY_WINDOW` | `delivery_window` | `30-40 минут` |
//! | `FASTFOOD_CURRENCY` | `currency` | `₽` |
//! | `FASTFOOD_BOARD_BUFFER` | `board_buffer` | `32` |
//! | `FASTFOOD_SEED_COURIER_ORDERS` | `seed_courier_orders` | `true` |
//!
//! Values that fail to parse are logged and the default is kept.

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Delivery promise quoted in the order confirmation.
    pub delivery_window: String,
    /// Currency symbol appended to prices.
    pub currency: String,
    /// Capacity of the courier board's request channel.
    pub board_buffer: usize,
    /// Start the courier board with the demo orders.
    pub seed_courier_orders: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            delivery_window: "30-40 минут".to_string(),
            currency: "₽".to_string(),
            board_buffer: 32,
            seed_courier_orders: true,
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(window) = lookup("FASTFOOD_DELIVERY_WINDOW").filter(|v| !v.trim().is_empty()) {
            config.delivery_window = window;
        }
        if let Some(currency) = lookup("FASTFOOD_CURRENCY").filter(|v| !v.trim().is_empty()) {
            config.currency = currency;
        }
        if let Some(raw) = lookup("FASTFOOD_BOARD_BUFFER") {
            match raw.trim().parse::<usize>() {
                Ok(buffer) if buffer > 0 => config.board_buffer = buffer,
                _ => warn!(value = %raw, "Ignoring invalid FASTFOOD_BOARD_BUFFER"),
            }
        }
        if let Some(raw) = lookup("FASTFOOD_SEED_COURIER_ORDERS") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => config.seed_courier_orders = true,
                "0" | "false" | "no" => config.seed_courier_orders = false,
                _ => warn!(value = %raw, "Ignoring invalid FASTFOOD_SEED_COURIER_ORDERS"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        assert_eq!(StorefrontConfig::from_lookup(|_| None), StorefrontConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("FASTFOOD_DELIVERY_WINDOW", "45-60 минут"),
            ("FASTFOOD_BOARD_BUFFER", "8"),
            ("FASTFOOD_SEED_COURIER_ORDERS", "false"),
        ]));
        assert_eq!(config.delivery_window, "45-60 минут");
        assert_eq!(config.board_buffer, 8);
        assert!(!config.seed_courier_orders);
        assert_eq!(config.currency, "₽");
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("FASTFOOD_BOARD_BUFFER", "zero"),
            ("FASTFOOD_SEED_COURIER_ORDERS", "maybe"),
            ("FASTFOOD_CURRENCY", "  "),
        ]));
        assert_eq!(config, StorefrontConfig::default());
    }
}
