//! # Cart
//!
//! The customer's in-progress selection.
//!
//! ## Invariants
//!
//! - At most one [`CartEntry`] per [`MenuItemId`].
//! - Every entry has `quantity >= 1`. An adjustment that would bring it to zero or
//!   below removes the entry instead.
//! - Entries keep insertion order, which is the order the cart sheet lists them in.
//!
//! Every operation is total: ids that are not in the cart are ignored.

use crate::model::{CartEntry, MenuItem, MenuItemId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item`, creating the entry if needed.
    pub fn add_to_cart(&mut self, item: &MenuItem) {
        match self.position(item.id) {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.quantity = entry.quantity.saturating_add(1);
                info!(item_id = %item.id, quantity = entry.quantity, "Cart entry incremented");
            }
            None => {
                self.entries.push(CartEntry {
                    item: item.clone(),
                    quantity: 1,
                });
                info!(item_id = %item.id, size = self.entries.len(), "Cart entry added");
            }
        }
    }

    /// Removes the entry for `id`, whatever its quantity.
    pub fn remove_from_cart(&mut self, id: MenuItemId) {
        match self.position(id) {
            Some(index) => {
                self.entries.remove(index);
                info!(item_id = %id, size = self.entries.len(), "Cart entry removed");
            }
            None => debug!(item_id = %id, "Remove ignored, not in cart"),
        }
    }

    /// Shifts the quantity of `id` by `delta`, dropping the entry when it reaches zero.
    pub fn update_quantity(&mut self, id: MenuItemId, delta: i32) {
        let Some(index) = self.position(id) else {
            debug!(item_id = %id, delta, "Update ignored, not in cart");
            return;
        };

        let new_quantity = i64::from(self.entries[index].quantity) + i64::from(delta);
        if new_quantity > 0 {
            let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
            self.entries[index].quantity = quantity;
            info!(item_id = %id, quantity, "Cart quantity updated");
        } else {
            self.entries.remove(index);
            info!(item_id = %id, size = self.entries.len(), "Cart entry dropped at zero");
        }
    }

    /// Sum of `price * quantity` over every entry, saturating at `u64::MAX`.
    pub fn cart_total(&self) -> u64 {
        self.entries
            .iter()
            .map(CartEntry::line_total)
            .fold(0u64, u64::saturating_add)
    }

    /// Total number of units, as shown on the cart badge.
    pub fn item_count(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(entry.quantity))
            .fold(0u64, u64::saturating_add)
    }

    /// Badge value, hidden while the cart is empty.
    pub fn badge(&self) -> Option<u64> {
        (!self.is_empty()).then(|| self.item_count())
    }

    pub fn quantity_of(&self, id: MenuItemId) -> Option<u32> {
        self.position(id).map(|index| self.entries[index].quantity)
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn position(&self, id: MenuItemId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn item(catalog: &Catalog, id: u32) -> &MenuItem {
        catalog.get(MenuItemId(id)).unwrap()
    }

    #[test]
    fn repeated_adds_keep_a_single_entry() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add_to_cart(item(&catalog, 1));
        }

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(MenuItemId(1)), Some(5));
    }

    #[test]
    fn entries_keep_insertion_order() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_to_cart(item(&catalog, 6));
        cart.add_to_cart(item(&catalog, 1));
        cart.add_to_cart(item(&catalog, 6));

        let ids: Vec<u32> = cart.entries().iter().map(|e| e.id().0).collect();
        assert_eq!(ids, vec![6, 1]);
    }

    #[test]
    fn total_is_price_times_quantity() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_to_cart(item(&catalog, 1));
        cart.add_to_cart(item(&catalog, 1));
        cart.add_to_cart(item(&catalog, 6));

        assert_eq!(cart.cart_total(), 820);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.badge(), Some(3));
    }

    #[test]
    fn decrement_to_zero_removes_entry_and_further_updates_are_noops() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_to_cart(item(&catalog, 4));
        cart.add_to_cart(item(&catalog, 4));
        cart.add_to_cart(item(&catalog, 5));

        cart.update_quantity(MenuItemId(4), -1);
        assert_eq!(cart.quantity_of(MenuItemId(4)), Some(1));

        cart.update_quantity(MenuItemId(4), -1);
        assert_eq!(cart.quantity_of(MenuItemId(4)), None);

        let before = cart.clone();
        cart.update_quantity(MenuItemId(4), 1);
        cart.update_quantity(MenuItemId(4), -3);
        assert_eq!(cart, before);
    }

    #[test]
    fn large_negative_delta_removes_instead_of_going_negative() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_to_cart(item(&catalog, 2));
        cart.update_quantity(MenuItemId(2), -10);
        assert!(cart.is_empty());
        assert_eq!(cart.badge(), None);
    }

    #[test]
    fn increment_through_update_quantity() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_to_cart(item(&catalog, 3));
        cart.update_quantity(MenuItemId(3), 2);
        assert_eq!(cart.quantity_of(MenuItemId(3)), Some(3));
        assert_eq!(cart.cart_total(), 1950);
    }

    #[test]
    fn quantities_saturate_at_the_cap() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_to_cart(item(&catalog, 1));
        cart.update_quantity(MenuItemId(1), i32::MAX);
        cart.update_quantity(MenuItemId(1), i32::MAX);
        assert_eq!(cart.quantity_of(MenuItemId(1)), Some(u32::MAX));

        cart.add_to_cart(item(&catalog, 1));
        assert_eq!(cart.quantity_of(MenuItemId(1)), Some(u32::MAX));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn counts_and_totals_of_capped_entries_do_not_overflow() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        for id in [1, 2] {
            cart.add_to_cart(item(&catalog, id));
            cart.update_quantity(MenuItemId(id), i32::MAX);
            cart.update_quantity(MenuItemId(id), i32::MAX);
        }

        let expected = 2 * u64::from(u32::MAX);
        assert_eq!(cart.item_count(), expected);
        assert_eq!(cart.badge(), Some(expected));
        assert_eq!(
            cart.cart_total(),
            (350 + 520) * u64::from(u32::MAX)
        );
    }

    #[test]
    fn remove_ignores_unknown_ids() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_to_cart(item(&catalog, 3));
        cart.remove_from_cart(MenuItemId(42));
        assert_eq!(cart.len(), 1);

        cart.remove_from_cart(MenuItemId(3));
        assert!(cart.is_empty());
        assert_eq!(cart.cart_total(), 0);
    }
}
