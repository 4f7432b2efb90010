use serde::{Deserialize, Serialize};

use crate::domain::item::{Category, Item};

/// Category selection for the visible list. `All` is a sentinel that never
/// appears on a stored item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

/// Criteria deriving the visible subset of the collection. The default
/// value is the identity filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ItemFilters {
    /// Case-insensitive substring match on the item name; empty means no
    /// name constraint.
    pub search: String,
    pub category: CategoryFilter,
}

impl ItemFilters {
    /// Derive the visible subset: the search predicate first, then the
    /// category predicate. Pure; survivors keep their input order.
    pub fn apply(&self, items: &[Item]) -> Vec<Item> {
        let needle = self.search.trim().to_lowercase();
        items
            .iter()
            .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
            .filter(|item| self.category.matches(item.category))
            .cloned()
            .collect()
    }
}
