//! Inventory items, grouped into categories by `category_id`.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::InventoryClient;
use crate::framework::ResourceActor;
use crate::model::{InventoryItem, ItemId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Inventory actor seeded with `seed`, and its client.
pub fn new(seed: Vec<InventoryItem>, buffer_size: usize) -> (ResourceActor<InventoryItem>, InventoryClient) {
    let item_id_counter = Arc::new(AtomicU64::new(1));
    let next_item_id = move || {
        let id = item_id_counter.fetch_add(1, Ordering::SeqCst);
        ItemId(format!("PROD-{:04}", id))
    };

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_item_id);
    let client = InventoryClient::new(generic_client);

    (actor.with_seed(seed), client)
}
