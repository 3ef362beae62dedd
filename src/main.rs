use partner_ops::clients::ActorClient;
use partner_ops::lifecycle::{load_config, setup_tracing, DashboardSystem};
use partner_ops::model::{CategoryId, ItemId, OrderId, OrderStatus, ReviewId};
use partner_ops::seed::Seeds;
use std::time::Duration;
use tracing::{info, warn, Instrument};

async fn log_board(system: &DashboardSystem, step: &str) -> Result<(), String> {
    let counts = system.orders.counts().await.map_err(|e| e.to_string())?;
    info!(
        step,
        preparing = counts.preparing,
        ready = counts.ready,
        picked_up = counts.picked_up,
        delivered = counts.delivered,
        "Board"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = load_config().map_err(|e| e.to_string())?;
    let seeds = Seeds::from_config(&config.seed).map_err(|e| e.to_string())?;
    let system = DashboardSystem::start(&config, seeds).map_err(|e| e.to_string())?;
    log_board(&system, "seeded").await?;

    let span = tracing::info_span!("operator_session");
    async {
        let preparing = system
            .orders
            .orders(OrderStatus::Preparing)
            .await
            .map_err(|e| e.to_string())?;
        if let Some(first) = preparing.first() {
            info!(id = %first.id, customer = %first.customer, "Marking ready");
            system
                .orders
                .mark_ready(first.id.clone())
                .await
                .map_err(|e| e.to_string())?;
        }
        log_board(&system, "mark_ready").await?;

        let picked = system
            .orders
            .mark_picked_up(OrderId::from("ORD-1026"))
            .await
            .map_err(|e| e.to_string())?;
        if picked.is_none() {
            warn!("ORD-1026 was not ready; nothing picked up");
        }
        log_board(&system, "mark_picked_up").await?;

        let meera = system
            .orders
            .search(OrderStatus::Ready, "meera")
            .await
            .map_err(|e| e.to_string())?;
        info!(hits = meera.len(), "Searched ready orders for \"meera\"");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let wait = config.board.auto_advance() + Duration::from_millis(500);
    info!(wait_ms = wait.as_millis() as u64, "Waiting for auto-advance");
    tokio::time::sleep(wait).await;

    let delivered = system
        .orders
        .orders(OrderStatus::Delivered)
        .await
        .map_err(|e| e.to_string())?;
    for order in &delivered {
        info!(id = %order.id, customer = %order.customer, total = order.total, "Delivered");
    }
    log_board(&system, "after_auto_advance").await?;

    let span = tracing::info_span!("review_desk");
    async {
        let before = system.reviews.new_count().await.map_err(|e| e.to_string())?;
        system
            .reviews
            .reply(
                ReviewId::from("rev-102"),
                "Sorry about the delays, Surya. We've added a second packer at lunch.",
            )
            .await
            .map_err(|e| e.to_string())?;
        let after = system.reviews.new_count().await.map_err(|e| e.to_string())?;
        info!(before, after, "New reviews");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let in_stock = system
        .inventory
        .toggle_stock(ItemId::from("INV-005"))
        .await
        .map_err(|e| e.to_string())?;
    let items = system.inventory.list().await.map_err(|e| e.to_string())?;
    info!(item = "INV-005", in_stock, total_items = items.len(), "Stock toggled");

    system
        .categories
        .delete(CategoryId::from("cat-produce"))
        .await
        .map_err(|e| e.to_string())?;
    let categories = system.categories.list().await.map_err(|e| e.to_string())?;
    let items = system.inventory.list().await.map_err(|e| e.to_string())?;
    info!(
        categories = categories.len(),
        total_items = items.len(),
        "Category removed with its items"
    );

    let store = system.shutdown().await?;
    info!(orders = store.len(), "Application completed successfully");
    Ok(())
}
