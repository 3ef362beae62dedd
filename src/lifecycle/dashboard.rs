use crate::clients::{CategoryClient, InventoryClient, OrderBoardClient, ReviewClient};
use crate::lifecycle::{ConfigError, DashboardConfig};
use crate::order_board::{OrderError, OrderStore};
use crate::seed::Seeds;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum StartError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Orders(#[from] OrderError),
}

/// Runs the order board, the review desk, the inventory and its categories for one session.
///
/// Every actor owns its own store. The clients are the only way in; clone them freely.
pub struct DashboardSystem {
    pub orders: OrderBoardClient,
    pub reviews: ReviewClient,
    pub inventory: InventoryClient,
    pub categories: CategoryClient,

    board_handle: JoinHandle<OrderStore>,
    resource_handles: Vec<(&'static str, JoinHandle<()>)>,
}

impl DashboardSystem {
    /// Spawns every actor with its seed. Fails if the config has a zero channel size or
    /// delay, or if the order seed is invalid.
    pub fn start(config: &DashboardConfig, seeds: Seeds) -> Result<Self, StartError> {
        config.validate()?;

        let buffer = config.resources.channel_buffer;
        let (board, orders) = crate::order_board::new(seeds.orders, &config.board)?;
        let (review_actor, reviews) = crate::review_actor::new(seeds.reviews, buffer);
        let (inventory_actor, inventory) = crate::inventory_actor::new(seeds.inventory, buffer);
        let (category_actor, categories) = crate::category_actor::new(seeds.categories, buffer);

        let board_handle = tokio::spawn(board.run());
        let review_handle = tokio::spawn(review_actor.run(()));
        let inventory_handle = tokio::spawn(inventory_actor.run(()));
        // Holds an inventory client, so the inventory actor outlives it.
        let category_handle = tokio::spawn(category_actor.run(inventory.clone()));

        info!("Dashboard system started");
        Ok(Self {
            orders,
            reviews,
            inventory,
            categories,
            board_handle,
            resource_handles: vec![
                ("review", review_handle),
                ("category", category_handle),
                ("inventory", inventory_handle),
            ],
        })
    }

    /// Drops the clients, waits for every actor to stop and returns the board's final store.
    ///
    /// Clones of the clients held elsewhere keep their actors alive, so drop those first.
    /// Pending auto-advance timers are cancelled; orders in `picked_up` stay there.
    /// Every task is awaited even if one of them failed; the first failure is returned.
    pub async fn shutdown(self) -> Result<OrderStore, String> {
        info!("Shutting down system...");

        drop(self.orders);
        drop(self.reviews);
        drop(self.categories);
        drop(self.inventory);

        let store = self.board_handle.await.map_err(|e| {
            error!("Order board task failed: {:?}", e);
            format!("Order board task failed: {:?}", e)
        });
        let resources = join_all(self.resource_handles).await;

        let store = store?;
        resources?;
        info!(orders = store.len(), "System shutdown complete.");
        Ok(store)
    }
}

/// Awaits every handle, logging each failure, and reports the first one.
async fn join_all(handles: Vec<(&'static str, JoinHandle<()>)>) -> Result<(), String> {
    let mut first_error = None;
    for (actor, handle) in handles {
        if let Err(e) = handle.await {
            error!(actor, "Actor task failed: {:?}", e);
            if first_error.is_none() {
                first_error = Some(format!("{} actor task failed: {:?}", actor, e));
            }
        }
    }
    first_error.map_or(Ok(()), Err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_join_all_waits_for_every_task_after_a_failure() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();

        let failing: JoinHandle<()> = tokio::spawn(async { panic!("store corrupted") });
        let slow = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(10)).await;
            flag.store(true, Ordering::SeqCst);
        });

        let err = join_all(vec![("review", failing), ("inventory", slow)]).await.unwrap_err();
        assert!(err.starts_with("review actor task failed"), "{}", err);
        assert!(finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_zero_channel_buffer_is_rejected_at_start() {
        let mut config = DashboardConfig::default();
        config.resources.channel_buffer = 0;

        let err = DashboardSystem::start(&config, Seeds::fixtures()).err().unwrap();
        assert!(matches!(err, StartError::Config(ConfigError::Invalid("resources.channel_buffer"))));

        let mut config = DashboardConfig::default();
        config.board.channel_buffer = 0;
        assert!(DashboardSystem::start(&config, Seeds::fixtures()).is_err());
    }
}
