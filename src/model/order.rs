//! Customer orders on the operations board.
//!
//! Orders are the only records with lifecycle semantics: they move forward through
//! [`OrderStatus`] and are owned by the [`OrderBoard`](crate::order_board::OrderBoard).

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders (e.g. `ORD-1024`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an order is in its lifecycle.
///
/// ```text
/// preparing -> ready -> picked_up -> delivered
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Preparing,
    Ready,
    PickedUp,
    Delivered,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::PickedUp,
        OrderStatus::Delivered,
    ];

    /// Wire name, as used in seed data.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::PickedUp => "picked_up",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Tab label shown to operators.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::PickedUp => "Picked Up",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One order as seeded and displayed. Field names follow the seed shape (camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    pub items: Vec<String>,
    /// Parallel to `items`. Empty means one of each.
    #[serde(default)]
    pub item_quantities: Vec<u32>,
    pub total: f64,
    pub status: OrderStatus,
    /// Estimated or actual time label, e.g. `12:45 PM` or `Ready for pickup`.
    pub eta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complaint: Option<String>,
}

impl Order {
    /// Creates a new order in `preparing` with one of each item.
    pub fn new(
        id: impl Into<OrderId>,
        customer: impl Into<String>,
        items: Vec<String>,
        total: f64,
        eta: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            customer: customer.into(),
            items,
            item_quantities: Vec::new(),
            total,
            status: OrderStatus::Preparing,
            eta: eta.into(),
            rating: None,
            order_time: None,
            created_at: None,
            complaint: None,
        }
    }

    /// Same order in a different starting status. Used when seeding fixtures.
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// `(item, quantity)` pairs. Missing quantities count as 1.
    pub fn line_items(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.items.iter().enumerate().map(|(i, item)| {
            let quantity = self.item_quantities.get(i).copied().unwrap_or(1);
            (item.as_str(), quantity)
        })
    }

    /// Sum of all line quantities.
    pub fn item_count(&self) -> u32 {
        self.line_items().map(|(_, quantity)| quantity).sum()
    }
}
