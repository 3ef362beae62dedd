//! Menu / inventory items offered by the partner.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Unit used when a new item doesn't name one.
pub const DEFAULT_UNIT: &str = "1 unit";

/// Type-safe identifier for inventory items (e.g. `INV-001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub category_id: Option<String>,
    pub price: f64,
    pub unit: String,
    pub in_stock: bool,
    pub brand: Option<String>,
    /// Percentage off the listed price.
    pub discount: Option<f64>,
}

impl InventoryItem {
    /// Case-insensitive name match. A blank query matches every item.
    pub fn name_matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Payload for adding an item to a category.
#[derive(Debug, Clone)]
pub struct InventoryItemCreate {
    pub name: String,
    pub category: String,
    pub category_id: Option<String>,
    pub price: f64,
    pub unit: Option<String>,
    pub brand: Option<String>,
    pub discount: Option<f64>,
    /// New items are in stock unless this says otherwise.
    pub in_stock: Option<bool>,
}

impl From<&InventoryItem> for InventoryItemCreate {
    fn from(item: &InventoryItem) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.clone(),
            category_id: item.category_id.clone(),
            price: item.price,
            unit: Some(item.unit.clone()),
            brand: item.brand.clone(),
            discount: item.discount,
            in_stock: Some(item.in_stock),
        }
    }
}

/// Edits from the item dialog. `None` leaves a field as is.
///
/// The optional fields take a nested option: `Some(None)` clears them.
#[derive(Debug, Clone, Default)]
pub struct InventoryItemUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub brand: Option<Option<String>>,
    pub discount: Option<Option<f64>>,
}
