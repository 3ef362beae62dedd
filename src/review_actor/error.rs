//! Error types for the Review actor.

use thiserror::Error;

/// Errors that can occur during review operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReviewError {
    /// The requested review was not found.
    #[error("Review not found: {0}")]
    NotFound(String),

    /// Ratings run from 1 to 5.
    #[error("Invalid rating: {0}")]
    InvalidRating(u8),

    /// A reply or note with nothing in it.
    #[error("Empty {0} text")]
    EmptyText(&'static str),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ReviewError {
    fn from(msg: String) -> Self {
        ReviewError::ActorCommunicationError(msg)
    }
}
