//! Error types for the Inventory actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Item name must not be empty")]
    EmptyName,

    /// Prices must be finite and not negative.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// Discounts are percentages.
    #[error("Invalid discount: {0}")]
    InvalidDiscount(f64),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for InventoryError {
    fn from(msg: String) -> Self {
        InventoryError::ActorCommunicationError(msg)
    }
}
