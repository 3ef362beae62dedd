//! # Auto-Advance Timer
//!
//! Simulates courier delivery: each order that lands in `picked_up` gets a one-shot
//! timer, and when it fires the board moves the order to `delivered`.
//!
//! Timers are plain sleeping Tokio tasks. They never touch the store; a firing is only
//! a [`TimerFired`] message posted back to the board that owns the store, so the board
//! stays the single writer.
//!
//! Every timer carries a generation number. Rescheduling or cancelling an order's timer
//! aborts the old task, and a firing whose generation isn't the current one for that
//! order is ignored by [`AutoAdvance::take`].

use crate::model::OrderId;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::debug;

/// Posted by a timer task when its delay elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerFired {
    pub id: OrderId,
    pub generation: u64,
}

struct Pending {
    generation: u64,
    handle: AbortHandle,
}

/// Per-order cancellable timers. Dropping it aborts every pending timer.
pub struct AutoAdvance {
    delay: Duration,
    pending: HashMap<OrderId, Pending>,
    next_generation: u64,
    fired_tx: mpsc::UnboundedSender<TimerFired>,
}

impl AutoAdvance {
    /// Returns the scheduler and the receiving end for its firings.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<TimerFired>) {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        let timers = Self {
            delay,
            pending: HashMap::new(),
            next_generation: 1,
            fired_tx,
        };
        (timers, fired_rx)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Starts a timer for `id`, replacing (and aborting) any timer it already had.
    /// Must be called inside a Tokio runtime.
    pub fn schedule(&mut self, id: OrderId) -> u64 {
        self.cancel(&id);

        let generation = self.next_generation;
        self.next_generation += 1;

        let delay = self.delay;
        let fired_tx = self.fired_tx.clone();
        let fired = TimerFired {
            id: id.clone(),
            generation,
        };
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The board may already be gone.
            let _ = fired_tx.send(fired);
        });

        debug!(%id, generation, delay_ms = delay.as_millis() as u64, "Auto-advance scheduled");
        self.pending.insert(
            id,
            Pending {
                generation,
                handle: task.abort_handle(),
            },
        );
        generation
    }

    /// Aborts the pending timer for `id`. Returns whether one was pending.
    pub fn cancel(&mut self, id: &OrderId) -> bool {
        match self.pending.remove(id) {
            Some(pending) => {
                pending.handle.abort();
                debug!(%id, generation = pending.generation, "Auto-advance cancelled");
                true
            }
            None => false,
        }
    }

    /// Claims a firing. Returns `true` only if it is the current timer for its order,
    /// in which case the order no longer has a pending timer.
    pub fn take(&mut self, fired: &TimerFired) -> bool {
        match self.pending.get(&fired.id) {
            Some(pending) if pending.generation == fired.generation => {
                self.pending.remove(&fired.id);
                true
            }
            _ => false,
        }
    }

    /// Aborts every pending timer. Returns how many were pending.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        for (_, pending) in self.pending.drain() {
            pending.handle.abort();
        }
        count
    }

    pub fn is_pending(&self, id: &OrderId) -> bool {
        self.pending.contains_key(id)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::error::TryRecvError;

    const DELAY: Duration = Duration::from_secs(5);

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_after_delay() {
        let (mut timers, mut fired) = AutoAdvance::new(DELAY);
        let generation = timers.schedule(OrderId::from("A"));

        tokio::time::sleep(Duration::from_millis(4_900)).await;
        assert_eq!(fired.try_recv(), Err(TryRecvError::Empty));

        let event = fired.recv().await.unwrap();
        assert_eq!(event, TimerFired { id: OrderId::from("A"), generation });
        assert!(timers.take(&event));
        assert!(!timers.is_pending(&OrderId::from("A")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let (mut timers, mut fired) = AutoAdvance::new(DELAY);
        timers.schedule(OrderId::from("A"));
        timers.schedule(OrderId::from("B"));

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(timers.cancel(&OrderId::from("A")));
        assert!(!timers.cancel(&OrderId::from("A")));

        tokio::time::sleep(Duration::from_secs(10)).await;
        let event = fired.try_recv().unwrap();
        assert_eq!(event.id, OrderId::from("B"));
        assert_eq!(fired.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_generation_is_ignored() {
        let (mut timers, _fired) = AutoAdvance::new(DELAY);
        let first = timers.schedule(OrderId::from("A"));
        let second = timers.schedule(OrderId::from("A"));
        assert_ne!(first, second);
        assert_eq!(timers.pending(), 1);

        let stale = TimerFired { id: OrderId::from("A"), generation: first };
        assert!(!timers.take(&stale));
        assert!(timers.is_pending(&OrderId::from("A")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending_timers() {
        let (mut timers, mut fired) = AutoAdvance::new(DELAY);
        timers.schedule(OrderId::from("A"));
        timers.schedule(OrderId::from("B"));
        drop(timers);

        tokio::time::sleep(Duration::from_secs(10)).await;
        // Every sender is gone once the aborted tasks are dropped.
        assert_eq!(fired.recv().await, None);
    }
}
