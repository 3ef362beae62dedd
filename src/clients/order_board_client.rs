//! # Order Board Client
//!
//! The operator-facing API over the [`OrderBoard`](crate::order_board::OrderBoard) actor.
//! Views read partitions through it, and the two operator buttons call
//! [`mark_ready`](OrderBoardClient::mark_ready) and
//! [`mark_picked_up`](OrderBoardClient::mark_picked_up). Delivery is left to the
//! board's auto-advance timers.

use crate::framework::FrameworkError;
use crate::model::{Order, OrderId, OrderStatus};
use crate::order_board::message::BoardRequest;
use crate::order_board::{BoardSnapshot, OrderError, PartitionCounts};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the order board. Cheap to clone.
#[derive(Clone)]
pub struct OrderBoardClient {
    sender: mpsc::Sender<BoardRequest>,
}

impl OrderBoardClient {
    pub fn new(sender: mpsc::Sender<BoardRequest>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<R>) -> BoardRequest,
    ) -> Result<R, OrderError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| Self::map_error(FrameworkError::ActorClosed))?;
        response
            .await
            .map_err(|_| Self::map_error(FrameworkError::ActorDropped))
    }

    fn map_error(e: FrameworkError) -> OrderError {
        OrderError::ActorCommunicationError(e.to_string())
    }

    /// Orders in one partition, most recently moved first.
    #[instrument(skip(self))]
    pub async fn orders(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        self.request(|respond_to| BoardRequest::Orders { status, respond_to })
            .await
    }

    /// Orders in one partition whose customer, id or line items contain `text`
    /// (case-insensitive). Blank text returns the whole partition.
    #[instrument(skip(self))]
    pub async fn search(&self, status: OrderStatus, text: &str) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let text = text.to_string();
        self.request(|respond_to| BoardRequest::Search {
            status,
            text,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn find(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        debug!("Sending request");
        self.request(|respond_to| BoardRequest::Find { id, respond_to })
            .await
    }

    pub async fn counts(&self) -> Result<PartitionCounts, OrderError> {
        self.request(|respond_to| BoardRequest::Counts { respond_to })
            .await
    }

    pub async fn snapshot(&self) -> Result<BoardSnapshot, OrderError> {
        self.request(|respond_to| BoardRequest::Snapshot { respond_to })
            .await
    }

    /// Orders in `picked_up` that still have a delivery timer running.
    pub async fn pending_deliveries(&self) -> Result<Vec<OrderId>, OrderError> {
        self.request(|respond_to| BoardRequest::PendingDeliveries { respond_to })
            .await
    }

    /// Moves `id` from `from` to `to`.
    ///
    /// Returns `Ok(None)` when the order isn't in `from` (nothing moves) and
    /// `Err(IllegalTransition)` when `to` isn't the next status after `from`.
    #[instrument(skip(self))]
    pub async fn transition(
        &self,
        id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<Option<Order>, OrderError> {
        debug!("Sending request");
        self.request(|respond_to| BoardRequest::Transition {
            id,
            from,
            to,
            respond_to,
        })
        .await?
    }

    /// Operator action: the kitchen finished an order.
    pub async fn mark_ready(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.transition(id, OrderStatus::Preparing, OrderStatus::Ready)
            .await
    }

    /// Operator action: a courier collected an order. Starts its delivery timer.
    pub async fn mark_picked_up(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.transition(id, OrderStatus::Ready, OrderStatus::PickedUp)
            .await
    }
}
