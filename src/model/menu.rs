//! Menu items, categories and cart entries.
//!
//! Menu items are defined once when the [`Catalog`](crate::catalog::Catalog) is built
//! and never change afterwards. The cart keeps its own snapshot of the item so it can
//! render names and prices without going back to the catalog.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// Menu sections. The declaration order is the order of the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Burgers,
    Pizza,
    Sides,
    Snacks,
    Drinks,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Burgers,
        Category::Pizza,
        Category::Sides,
        Category::Snacks,
        Category::Drinks,
    ];

    /// Label shown on the filter button and on the item badge.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Burgers => "Бургеры",
            Category::Pizza => "Пицца",
            Category::Sides => "Гарниры",
            Category::Snacks => "Снеки",
            Category::Drinks => "Напитки",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Selection made on the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Label of the "show everything" button.
    pub const ALL_LABEL: &'static str = "Все";

    /// Parses a filter label. Both `Все` and `all` select the whole menu.
    ///
    /// Returns `None` for labels that name no known category.
    pub fn from_label(label: &str) -> Option<Self> {
        if label == Self::ALL_LABEL || label.eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        Category::from_label(label).map(CategoryFilter::Only)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

/// Represents a dish on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    /// Whole currency units.
    pub price: u32,
    pub category: Category,
    pub image: String,
    pub description: String,
}

impl MenuItem {
    /// Creates a new MenuItem.
    ///
    /// # Arguments
    /// * `id` - Unique identifier within the catalog
    /// * `name` - Display name
    /// * `price` - Price in whole currency units
    /// * `category` - Menu section
    /// * `image` - Glyph shown on the card
    /// * `description` - One-line description
    pub fn new(
        id: impl Into<MenuItemId>,
        name: impl Into<String>,
        price: u32,
        category: Category,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category,
            image: image.into(),
            description: description.into(),
        }
    }
}

/// One line of the cart: an item snapshot plus how many of it were ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub item: MenuItem,
    /// Always at least 1 while the entry is in the cart.
    pub quantity: u32,
}

impl CartEntry {
    pub fn id(&self) -> MenuItemId {
        self.item.id
    }

    pub fn line_total(&self) -> u64 {
        u64::from(self.item.price) * u64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_labels_parse() {
        assert_eq!(CategoryFilter::from_label("Все"), Some(CategoryFilter::All));
        assert_eq!(CategoryFilter::from_label("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_label("Пицца"),
            Some(CategoryFilter::Only(Category::Pizza))
        );
        assert_eq!(CategoryFilter::from_label("Десерты"), None);
    }

    #[test]
    fn category_labels_round_trip_through_lookup() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
    }
}
