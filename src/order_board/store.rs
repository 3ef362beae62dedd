//! # Order Record Store
//!
//! The authoritative in-memory set of orders, split into one partition per
//! [`OrderStatus`]. Nothing outside this module can reach the partitions mutably; the
//! only mutator is [`OrderStore::transition`].
//!
//! Invariant: every order is in exactly one partition, and its `status` field names
//! that partition.

use crate::model::{Order, OrderId, OrderStatus};
use crate::order_board::search::matches_search;
use crate::order_board::transition::check_edge;
use crate::order_board::OrderError;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Orders partitioned by status. Within a partition, the front is the most recently
/// moved order; seeded orders keep their seed order.
#[derive(Debug, Clone)]
pub struct OrderStore {
    partitions: HashMap<OrderStatus, Vec<Order>>,
}

/// Partition sizes, for the header stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PartitionCounts {
    pub preparing: usize,
    pub ready: usize,
    pub picked_up: usize,
    pub delivered: usize,
}

impl PartitionCounts {
    pub fn get(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Preparing => self.preparing,
            OrderStatus::Ready => self.ready,
            OrderStatus::PickedUp => self.picked_up,
            OrderStatus::Delivered => self.delivered,
        }
    }

    pub fn total(&self) -> usize {
        self.preparing + self.ready + self.picked_up + self.delivered
    }
}

/// A cloned view of all four partitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoardSnapshot {
    pub preparing: Vec<Order>,
    pub ready: Vec<Order>,
    pub picked_up: Vec<Order>,
    pub delivered: Vec<Order>,
}

impl BoardSnapshot {
    pub fn partition(&self, status: OrderStatus) -> &[Order] {
        match status {
            OrderStatus::Preparing => &self.preparing,
            OrderStatus::Ready => &self.ready,
            OrderStatus::PickedUp => &self.picked_up,
            OrderStatus::Delivered => &self.delivered,
        }
    }

    /// Ids in one partition, front first.
    pub fn ids(&self, status: OrderStatus) -> Vec<OrderId> {
        self.partition(status).iter().map(|o| o.id.clone()).collect()
    }

    pub fn total(&self) -> usize {
        OrderStatus::ALL
            .iter()
            .map(|status| self.partition(*status).len())
            .sum()
    }
}

impl OrderStore {
    /// Builds the four partitions from seed records, filtering on each record's status.
    ///
    /// Rejects duplicate ids, ratings outside 1..=5, and quantity lists that don't line
    /// up with the item list.
    pub fn initialize(seed: impl IntoIterator<Item = Order>) -> Result<Self, OrderError> {
        let mut partitions: HashMap<OrderStatus, Vec<Order>> = OrderStatus::ALL
            .iter()
            .map(|status| (*status, Vec::new()))
            .collect();
        let mut seen = HashSet::new();

        for order in seed {
            validate(&order)?;
            if !seen.insert(order.id.clone()) {
                return Err(OrderError::DuplicateOrder(order.id));
            }
            partitions.entry(order.status).or_default().push(order);
        }

        Ok(Self { partitions })
    }

    /// Orders currently in `status`, front first.
    pub fn query(&self, status: OrderStatus) -> &[Order] {
        self.partitions
            .get(&status)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Orders in `status` whose customer, id or any line item contains `text`.
    pub fn search(&self, status: OrderStatus, text: &str) -> Vec<&Order> {
        self.query(status)
            .iter()
            .filter(|order| matches_search(order, text))
            .collect()
    }

    pub fn find(&self, id: &OrderId) -> Option<&Order> {
        OrderStatus::ALL
            .iter()
            .flat_map(|status| self.query(*status))
            .find(|order| &order.id == id)
    }

    pub fn counts(&self) -> PartitionCounts {
        PartitionCounts {
            preparing: self.query(OrderStatus::Preparing).len(),
            ready: self.query(OrderStatus::Ready).len(),
            picked_up: self.query(OrderStatus::PickedUp).len(),
            delivered: self.query(OrderStatus::Delivered).len(),
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            preparing: self.query(OrderStatus::Preparing).to_vec(),
            ready: self.query(OrderStatus::Ready).to_vec(),
            picked_up: self.query(OrderStatus::PickedUp).to_vec(),
            delivered: self.query(OrderStatus::Delivered).to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.counts().total()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Moves one order from `from` to the front of `to`.
    ///
    /// - `Err(IllegalTransition)` if `to` isn't the successor of `from`; nothing changes.
    /// - `Ok(None)` if the order isn't in `from`; nothing changes.
    /// - `Ok(Some(order))` with the moved order (status already updated) otherwise.
    pub fn transition(
        &mut self,
        id: &OrderId,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<Option<Order>, OrderError> {
        check_edge(from, to)?;

        let source = self.partitions.entry(from).or_default();
        let Some(position) = source.iter().position(|order| &order.id == id) else {
            return Ok(None);
        };
        let mut order = source.remove(position);
        order.status = to;

        self.partitions.entry(to).or_default().insert(0, order.clone());
        Ok(Some(order))
    }
}

fn validate(order: &Order) -> Result<(), OrderError> {
    if let Some(rating) = order.rating {
        if !(1..=5).contains(&rating) {
            return Err(OrderError::InvalidRating {
                id: order.id.clone(),
                rating,
            });
        }
    }
    if !order.item_quantities.is_empty() && order.item_quantities.len() != order.items.len() {
        return Err(OrderError::QuantityMismatch {
            id: order.id.clone(),
            items: order.items.len(),
            quantities: order.item_quantities.len(),
        });
    }
    Ok(())
}
