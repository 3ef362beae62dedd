//! The allowed-transition table.
//!
//! Orders only ever move one step forward:
//!
//! ```text
//! preparing -> ready -> picked_up -> delivered
//! ```
//!
//! Every mutation of the board checks its edge against [`allowed_next`] before touching
//! any partition.

use crate::model::OrderStatus;
use crate::order_board::OrderError;

/// Statuses reachable from `from` in one step.
pub fn allowed_next(from: OrderStatus) -> &'static [OrderStatus] {
    match from {
        OrderStatus::Preparing => &[OrderStatus::Ready],
        OrderStatus::Ready => &[OrderStatus::PickedUp],
        OrderStatus::PickedUp => &[OrderStatus::Delivered],
        OrderStatus::Delivered => &[],
    }
}

/// The single forward successor, or `None` for the terminal status.
pub fn successor(from: OrderStatus) -> Option<OrderStatus> {
    allowed_next(from).first().copied()
}

pub fn check_edge(from: OrderStatus, to: OrderStatus) -> Result<(), OrderError> {
    if allowed_next(from).contains(&to) {
        Ok(())
    } else {
        Err(OrderError::IllegalTransition { from, to })
    }
}
