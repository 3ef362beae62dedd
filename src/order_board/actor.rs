//! # Order Board Actor
//!
//! `OrderBoard` owns one [`OrderStore`] and its [`AutoAdvance`] timers inside a single
//! Tokio task. Operator commands arrive on the request channel, timer firings on the
//! timer channel; both are handled one at a time by the same loop, so the store has
//! exactly one writer and needs no lock.
//!
//! When every client is dropped the loop ends, all pending timers are aborted, and
//! `run()` hands the final store back to whoever awaits the task.

use crate::clients::OrderBoardClient;
use crate::model::{Order, OrderId, OrderStatus};
use crate::order_board::message::BoardRequest;
use crate::order_board::store::OrderStore;
use crate::order_board::timer::{AutoAdvance, TimerFired};
use crate::order_board::OrderError;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct OrderBoard {
    receiver: mpsc::Receiver<BoardRequest>,
    fired_rx: mpsc::UnboundedReceiver<TimerFired>,
    store: OrderStore,
    timers: AutoAdvance,
}

impl OrderBoard {
    /// Creates the board around an initialized store, plus its client.
    ///
    /// * `auto_advance` - how long an order stays in `picked_up` before it is delivered.
    /// * `buffer_size` - capacity of the request channel.
    pub fn new(store: OrderStore, auto_advance: Duration, buffer_size: usize) -> (Self, OrderBoardClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (timers, fired_rx) = AutoAdvance::new(auto_advance);
        let board = Self {
            receiver,
            fired_rx,
            store,
            timers,
        };
        (board, OrderBoardClient::new(sender))
    }

    /// Runs the board until its request channel closes, then returns the final store.
    ///
    /// Orders already in `picked_up` when the board starts get their timers here.
    pub async fn run(mut self) -> OrderStore {
        let seeded: Vec<OrderId> = self
            .store
            .query(OrderStatus::PickedUp)
            .iter()
            .map(|order| order.id.clone())
            .collect();
        for id in seeded {
            self.timers.schedule(id);
        }

        let counts = self.store.counts();
        info!(
            preparing = counts.preparing,
            ready = counts.ready,
            picked_up = counts.picked_up,
            delivered = counts.delivered,
            delay_ms = self.timers.delay().as_millis() as u64,
            "Order board started"
        );

        loop {
            tokio::select! {
                msg = self.receiver.recv() => match msg {
                    Some(msg) => self.handle(msg),
                    None => break,
                },
                Some(fired) = self.fired_rx.recv() => self.on_timer(fired),
            }
        }

        let cancelled = self.timers.cancel_all();
        info!(size = self.store.len(), cancelled, "Order board shutdown");
        self.store
    }

    fn handle(&mut self, msg: BoardRequest) {
        match msg {
            BoardRequest::Orders { status, respond_to } => {
                let orders = self.store.query(status).to_vec();
                debug!(%status, size = orders.len(), "Orders");
                let _ = respond_to.send(orders);
            }
            BoardRequest::Search {
                status,
                text,
                respond_to,
            } => {
                let hits: Vec<Order> = self
                    .store
                    .search(status, &text)
                    .into_iter()
                    .cloned()
                    .collect();
                debug!(%status, text = %text, hits = hits.len(), "Search");
                let _ = respond_to.send(hits);
            }
            BoardRequest::Find { id, respond_to } => {
                let order = self.store.find(&id).cloned();
                debug!(%id, found = order.is_some(), "Find");
                let _ = respond_to.send(order);
            }
            BoardRequest::Counts { respond_to } => {
                let _ = respond_to.send(self.store.counts());
            }
            BoardRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(self.store.snapshot());
            }
            BoardRequest::PendingDeliveries { respond_to } => {
                let pending = self
                    .store
                    .query(OrderStatus::PickedUp)
                    .iter()
                    .filter(|order| self.timers.is_pending(&order.id))
                    .map(|order| order.id.clone())
                    .collect();
                let _ = respond_to.send(pending);
            }
            BoardRequest::Transition {
                id,
                from,
                to,
                respond_to,
            } => {
                let result = self.apply(&id, from, to);
                let _ = respond_to.send(result);
            }
        }
    }

    fn on_timer(&mut self, fired: TimerFired) {
        if !self.timers.take(&fired) {
            debug!(id = %fired.id, generation = fired.generation, "Stale auto-advance ignored");
            return;
        }
        match self.apply(&fired.id, OrderStatus::PickedUp, OrderStatus::Delivered) {
            Ok(Some(_)) => info!(id = %fired.id, "Auto-advanced to delivered"),
            Ok(None) => debug!(id = %fired.id, "Auto-advance found nothing to move"),
            Err(e) => warn!(id = %fired.id, error = %e, "Auto-advance failed"),
        }
    }

    /// The only path that mutates the store. Keeps the timers in step with the
    /// `picked_up` partition.
    fn apply(&mut self, id: &OrderId, from: OrderStatus, to: OrderStatus) -> Result<Option<Order>, OrderError> {
        let moved = match self.store.transition(id, from, to) {
            Ok(moved) => moved,
            Err(e) => {
                warn!(%id, %from, %to, error = %e, "Transition rejected");
                return Err(e);
            }
        };

        match &moved {
            Some(order) => {
                if from == OrderStatus::PickedUp {
                    self.timers.cancel(&order.id);
                }
                if to == OrderStatus::PickedUp {
                    self.timers.schedule(order.id.clone());
                }
                info!(%id, %from, %to, "Transitioned");
            }
            None => debug!(%id, %from, %to, "Not in source partition, nothing moved"),
        }
        Ok(moved)
    }
}
