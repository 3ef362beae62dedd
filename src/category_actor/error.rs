//! Error types for the Category actor.

use crate::inventory_actor::InventoryError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CategoryError {
    #[error("Category not found: {0}")]
    NotFound(String),

    #[error("Category title must not be empty")]
    EmptyTitle,

    /// Removing the category's items failed, so the category was kept.
    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CategoryError {
    fn from(msg: String) -> Self {
        CategoryError::ActorCommunicationError(msg)
    }
}
