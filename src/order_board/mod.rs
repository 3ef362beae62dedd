//! Order lifecycle tracking: the partitioned store, the transition table, the
//! auto-advance timers and the actor that owns them.

pub mod actor;
pub mod error;
pub mod message;
pub mod search;
pub mod store;
pub mod timer;
pub mod transition;

pub use actor::OrderBoard;
pub use error::*;
pub use store::{BoardSnapshot, OrderStore, PartitionCounts};

use crate::clients::OrderBoardClient;
use crate::lifecycle::BoardConfig;
use crate::model::Order;

/// Creates an order board seeded with `seed`, and its client.
pub fn new(
    seed: impl IntoIterator<Item = Order>,
    config: &BoardConfig,
) -> Result<(OrderBoard, OrderBoardClient), OrderError> {
    let store = OrderStore::initialize(seed)?;
    Ok(OrderBoard::new(
        store,
        config.auto_advance(),
        config.channel_buffer,
    ))
}
