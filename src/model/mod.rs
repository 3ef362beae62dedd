//! Plain data records: orders, reviews, inventory items and their categories.

pub mod category;
pub mod inventory;
pub mod order;
pub mod review;

pub use category::*;
pub use inventory::*;
pub use order::*;
pub use review::*;
