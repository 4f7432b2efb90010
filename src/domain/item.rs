use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::services::error_handling::WarungError;

/// One inventory record of the shop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    /// Price in the smallest currency unit (whole rupiah, no fraction).
    pub price: u64,
    /// Quantity on hand.
    pub stock: u64,
    pub category: Category,
    /// Refreshed on every create/update of this record, never on read.
    pub updated_at: DateTime<Utc>,
}

/// Fixed classification tags an item can carry. `CategoryFilter::All` is a
/// filter-only sentinel and is never stored on an item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Beverage,
    Snack,
    Seasoning,
    Other,
}

impl Category {
    /// Every storable category, in the order the add form offers them.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Beverage,
        Category::Snack,
        Category::Seasoning,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Beverage => "Beverage",
            Category::Snack => "Snack",
            Category::Seasoning => "Seasoning",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = WarungError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Food" => Ok(Category::Food),
            "Beverage" => Ok(Category::Beverage),
            "Snack" => Ok(Category::Snack),
            "Seasoning" => Ok(Category::Seasoning),
            "Other" => Ok(Category::Other),
            _ => Err(WarungError::MissingField { field: "category" }),
        }
    }
}

/// Raw form payload for creating or editing an item. Numeric fields arrive
/// as the text the user typed; they are parsed during validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub category: Category,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            stock: String::new(),
            category: Category::Food,
        }
    }
}

impl ItemDraft {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        stock: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            stock: stock.into(),
            category,
        }
    }

    /// Pre-fill the edit form from an existing record.
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price.to_string(),
            stock: item.stock.to_string(),
            category: item.category,
        }
    }

    /// Checks the draft for completeness and parses the numeric fields.
    /// An empty name or an empty/unparseable price or stock is rejected
    /// with the field that failed.
    pub fn validate(&self) -> Result<ValidatedDraft, WarungError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(WarungError::MissingField { field: "name" });
        }
        let price: u64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| WarungError::MissingField { field: "price" })?;
        let stock: u64 = self
            .stock
            .trim()
            .parse()
            .map_err(|_| WarungError::MissingField { field: "stock" })?;
        Ok(ValidatedDraft {
            name: name.to_string(),
            price,
            stock,
            category: self.category,
        })
    }
}

/// A draft that passed validation, with numeric fields parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDraft {
    pub name: String,
    pub price: u64,
    pub stock: u64,
    pub category: Category,
}

impl ValidatedDraft {
    /// Build a fresh record from this draft.
    pub fn into_item(self, id: i64, now: DateTime<Utc>) -> Item {
        Item {
            id,
            name: self.name,
            price: self.price,
            stock: self.stock,
            category: self.category,
            updated_at: now,
        }
    }

    /// Write all mutable fields onto an existing record, refreshing its
    /// timestamp. The id is never touched.
    pub fn apply_to(self, item: &mut Item, now: DateTime<Utc>) {
        item.name = self.name;
        item.price = self.price;
        item.stock = self.stock;
        item.category = self.category;
        item.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_complete_draft() {
        let draft = ItemDraft::new("Gula Pasir", "15000", "20", Category::Seasoning);
        let validated = draft.validate().unwrap();
        assert_eq!(validated.name, "Gula Pasir");
        assert_eq!(validated.price, 15000);
        assert_eq!(validated.stock, 20);
        assert_eq!(validated.category, Category::Seasoning);
    }

    #[test]
    fn test_validate_trims_whitespace() {
        let draft = ItemDraft::new("  Beras  ", " 12000 ", " 5 ", Category::Food);
        let validated = draft.validate().unwrap();
        assert_eq!(validated.name, "Beras");
        assert_eq!(validated.price, 12000);
        assert_eq!(validated.stock, 5);
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let draft = ItemDraft::new("   ", "100", "1", Category::Food);
        match draft.validate() {
            Err(WarungError::MissingField { field }) => assert_eq!(field, "name"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_unparseable_price() {
        let draft = ItemDraft::new("Kopi", "abc", "1", Category::Beverage);
        match draft.validate() {
            Err(WarungError::MissingField { field }) => assert_eq!(field, "price"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_stock() {
        // u64 parsing rejects a leading minus, so negative quantities can
        // never enter the collection.
        let draft = ItemDraft::new("Kopi", "5000", "-3", Category::Beverage);
        match draft.validate() {
            Err(WarungError::MissingField { field }) => assert_eq!(field, "stock"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty_stock() {
        let draft = ItemDraft::new("Kopi", "5000", "", Category::Beverage);
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_apply_to_preserves_id() {
        let now = Utc::now();
        let mut item = Item {
            id: 42,
            name: "Old".to_string(),
            price: 1,
            stock: 1,
            category: Category::Other,
            updated_at: now,
        };
        let later = now + chrono::Duration::seconds(5);
        let draft = ItemDraft::new("New", "200", "3", Category::Snack).validate().unwrap();
        draft.apply_to(&mut item, later);

        assert_eq!(item.id, 42);
        assert_eq!(item.name, "New");
        assert_eq!(item.price, 200);
        assert_eq!(item.stock, 3);
        assert_eq!(item.category, Category::Snack);
        assert_eq!(item.updated_at, later);
    }

    #[test]
    fn test_from_item_round_trip() {
        let item = Item {
            id: 1,
            name: "Teh Botol".to_string(),
            price: 4000,
            stock: 12,
            category: Category::Beverage,
            updated_at: Utc::now(),
        };
        let draft = ItemDraft::from_item(&item);
        let validated = draft.validate().unwrap();
        assert_eq!(validated.name, item.name);
        assert_eq!(validated.price, item.price);
        assert_eq!(validated.stock, item.stock);
        assert_eq!(validated.category, item.category);
    }

    #[test]
    fn test_category_parse_and_display() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("Semua".parse::<Category>().is_err());
    }

    #[test]
    fn test_item_serde_round_trip() {
        let item = Item {
            id: 1700000000000,
            name: "Indomie Goreng".to_string(),
            price: 3500,
            stock: 48,
            category: Category::Food,
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
