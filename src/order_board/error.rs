//! Error types for the order board.

use crate::model::{OrderId, OrderStatus};
use thiserror::Error;

/// Errors that can occur during order board operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested edge is not in the forward chain.
    #[error("Illegal transition: {from} -> {to}")]
    IllegalTransition { from: OrderStatus, to: OrderStatus },

    /// Two seed records share an id.
    #[error("Duplicate order id: {0}")]
    DuplicateOrder(OrderId),

    /// A seed rating outside 1..=5.
    #[error("Invalid rating {rating} for order {id}")]
    InvalidRating { id: OrderId, rating: u8 },

    /// `itemQuantities` doesn't line up with `items`.
    #[error("Order {id} has {items} items but {quantities} quantities")]
    QuantityMismatch {
        id: OrderId,
        items: usize,
        quantities: usize,
    },

    /// The board's task is gone or dropped the reply.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
