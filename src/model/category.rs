//! Inventory categories. Items point at their category through `category_id`.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for categories (e.g. `cat-dairy`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct CategoryCreate {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}
