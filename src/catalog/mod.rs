//! # Catalog
//!
//! The fixed menu the storefront sells from.
//!
//! The catalog is built once at startup and is read-only afterwards. Filtering never
//! fails: an unknown category label simply matches nothing.
//!
//! ```rust
//! use fastfood_storefront::catalog::Catalog;
//!
//! let catalog = Catalog::default();
//! assert_eq!(catalog.filter_by_label("Бургеры").len(), 2);
//! assert_eq!(catalog.filter_by_label("all").len(), catalog.len());
//! assert!(catalog.filter_by_label("Десерты").is_empty());
//! ```

use crate::model::{Category, CategoryFilter, MenuItem, MenuItemId};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog from an explicit item list, keeping its order.
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The storefront's standard menu.
    pub fn standard() -> Self {
        Self::new(vec![
            MenuItem::new(
                1,
                "Чизбургер Классик",
                350,
                Category::Burgers,
                "🍔",
                "Сочная говяжья котлета, сыр чеддер",
            ),
            MenuItem::new(
                2,
                "Двойной Биг Бургер",
                520,
                Category::Burgers,
                "🍔",
                "Две котлеты, бекон, специальный соус",
            ),
            MenuItem::new(
                3,
                "Пицца Пепперони",
                650,
                Category::Pizza,
                "🍕",
                "30 см, моцарелла, пепперони",
            ),
            MenuItem::new(
                4,
                "Картофель Фри",
                180,
                Category::Sides,
                "🍟",
                "Хрустящий золотистый картофель",
            ),
            MenuItem::new(
                5,
                "Наггетсы 9 шт",
                280,
                Category::Snacks,
                "🍗",
                "Куриные наггетсы с соусом",
            ),
            MenuItem::new(
                6,
                "Кола 0.5л",
                120,
                Category::Drinks,
                "🥤",
                "Холодная освежающая кола",
            ),
        ])
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items matching `filter`, in catalog order.
    pub fn filter_by_category(&self, filter: CategoryFilter) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| filter.matches(item.category))
            .collect()
    }

    /// Same as [`filter_by_category`](Self::filter_by_category) but keyed by the
    /// button label. Unknown labels yield an empty list.
    pub fn filter_by_label(&self, label: &str) -> Vec<&MenuItem> {
        match CategoryFilter::from_label(label) {
            Some(filter) => self.filter_by_category(filter),
            None => {
                debug!(label, "Unknown category label");
                Vec::new()
            }
        }
    }

    /// Filter bar labels in display order, `Все` first.
    pub fn categories() -> Vec<&'static str> {
        std::iter::once(CategoryFilter::ALL_LABEL)
            .chain(Category::ALL.iter().map(|c| c.label()))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
