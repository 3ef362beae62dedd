//! Review desk: reply threads, internal notes and status for customer reviews.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ReviewClient;
use crate::framework::ResourceActor;
use crate::model::{Review, ReviewId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Review actor seeded with `seed`, and its client.
pub fn new(seed: Vec<Review>, buffer_size: usize) -> (ResourceActor<Review>, ReviewClient) {
    let review_id_counter = Arc::new(AtomicU64::new(1));
    let next_review_id = move || {
        let id = review_id_counter.fetch_add(1, Ordering::SeqCst);
        ReviewId(format!("rev-new-{}", id))
    };

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_review_id);
    let client = ReviewClient::new(generic_client);

    (actor.with_seed(seed), client)
}
