//! Inventory categories. Deleting a category removes its items.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CategoryClient;
use crate::framework::ResourceActor;
use crate::model::{Category, CategoryId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Category actor seeded with `seed`, and its client.
///
/// The actor must be run with the [`InventoryClient`](crate::clients::InventoryClient)
/// that owns the categories' items.
pub fn new(seed: Vec<Category>, buffer_size: usize) -> (ResourceActor<Category>, CategoryClient) {
    let category_id_counter = Arc::new(AtomicU64::new(1));
    let next_category_id = move || {
        let id = category_id_counter.fetch_add(1, Ordering::SeqCst);
        CategoryId(format!("cat-{}", id))
    };

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_category_id);
    let client = CategoryClient::new(generic_client);

    (actor.with_seed(seed), client)
}
