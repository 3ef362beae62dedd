//! Requests accepted by the [`OrderBoard`](crate::order_board::OrderBoard).

use crate::model::{Order, OrderId, OrderStatus};
use crate::order_board::store::{BoardSnapshot, PartitionCounts};
use crate::order_board::OrderError;
use tokio::sync::oneshot;

#[derive(Debug)]
pub enum BoardRequest {
    /// One partition, front first.
    Orders {
        status: OrderStatus,
        respond_to: oneshot::Sender<Vec<Order>>,
    },
    /// One partition narrowed by free text.
    Search {
        status: OrderStatus,
        text: String,
        respond_to: oneshot::Sender<Vec<Order>>,
    },
    Find {
        id: OrderId,
        respond_to: oneshot::Sender<Option<Order>>,
    },
    Counts {
        respond_to: oneshot::Sender<PartitionCounts>,
    },
    Snapshot {
        respond_to: oneshot::Sender<BoardSnapshot>,
    },
    /// Orders with a pending auto-advance timer.
    PendingDeliveries {
        respond_to: oneshot::Sender<Vec<OrderId>>,
    },
    Transition {
        id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
        respond_to: oneshot::Sender<Result<Option<Order>, OrderError>>,
    },
}
