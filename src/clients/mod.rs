//! Type-safe wrappers around the actors' request channels.
//!
//! The review, inventory and category clients wrap [`ResourceClient`](crate::framework::ResourceClient)
//! and inherit `get`/`list`/`delete` from [`ActorClient`]. The order board has its own
//! message set and client.

pub mod actor_client;
pub mod category_client;
pub mod inventory_client;
pub mod order_board_client;
pub mod review_client;

pub use actor_client::*;
pub use category_client::*;
pub use inventory_client::*;
pub use order_board_client::*;
pub use review_client::*;
