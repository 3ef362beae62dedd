use partner_ops::lifecycle::BoardConfig;
use partner_ops::model::{Order, OrderId, OrderStatus};
use partner_ops::order_board::{self, OrderError};
use std::time::Duration;

fn order(id: &str, customer: &str, status: OrderStatus) -> Order {
    Order::new(id, customer, vec!["A2 Milk".into()], 120.0, "12:45 PM").with_status(status)
}

fn config() -> BoardConfig {
    BoardConfig {
        auto_advance_secs: 5,
        channel_buffer: 8,
    }
}

fn ids(orders: &[Order]) -> Vec<&str> {
    orders.iter().map(|o| o.id.0.as_str()).collect()
}

/// 2 preparing, 1 ready, 1 picked up. Moving p1 to ready puts it first in `ready`.
#[tokio::test(start_paused = true)]
async fn test_mark_ready_end_to_end() {
    let seed = vec![
        order("p1", "Aarav R.", OrderStatus::Preparing),
        order("p2", "Meera S.", OrderStatus::Preparing),
        order("r1", "Nikhil D.", OrderStatus::Ready),
        order("u1", "Karthik V.", OrderStatus::PickedUp),
    ];
    let (board, client) = order_board::new(seed, &config()).unwrap();
    let handle = tokio::spawn(board.run());

    let moved = client.mark_ready(OrderId::from("p1")).await.unwrap();
    assert_eq!(moved.unwrap().status, OrderStatus::Ready);

    let snapshot = client.snapshot().await.unwrap();
    assert_eq!(ids(&snapshot.preparing), vec!["p2"]);
    assert_eq!(
        snapshot.ids(OrderStatus::Ready),
        vec![OrderId::from("p1"), OrderId::from("r1")]
    );
    assert_eq!(ids(&snapshot.picked_up), vec!["u1"]);
    assert!(snapshot.delivered.is_empty());
    assert_eq!(snapshot.total(), 4);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_picked_up_order_is_delivered_after_delay() {
    let seed = vec![order("B", "Meera S.", OrderStatus::Ready)];
    let (board, client) = order_board::new(seed, &config()).unwrap();
    let handle = tokio::spawn(board.run());

    client.mark_picked_up(OrderId::from("B")).await.unwrap();
    assert_eq!(client.pending_deliveries().await.unwrap(), vec![OrderId::from("B")]);

    tokio::time::sleep(Duration::from_secs(4)).await;
    assert_eq!(ids(&client.orders(OrderStatus::PickedUp).await.unwrap()), vec!["B"]);

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(client.orders(OrderStatus::PickedUp).await.unwrap().is_empty());
    let delivered = client.orders(OrderStatus::Delivered).await.unwrap();
    assert_eq!(ids(&delivered), vec!["B"]);
    assert_eq!(delivered[0].status, OrderStatus::Delivered);
    assert!(client.pending_deliveries().await.unwrap().is_empty());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_leaving_picked_up_cancels_the_timer() {
    let seed = vec![order("B", "Meera S.", OrderStatus::Ready)];
    let (board, client) = order_board::new(seed, &config()).unwrap();
    let handle = tokio::spawn(board.run());

    client.mark_picked_up(OrderId::from("B")).await.unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;

    let moved = client
        .transition(OrderId::from("B"), OrderStatus::PickedUp, OrderStatus::Delivered)
        .await
        .unwrap();
    assert_eq!(moved.unwrap().status, OrderStatus::Delivered);
    assert!(client.pending_deliveries().await.unwrap().is_empty());

    // Well past the original deadline: the cancelled timer must not move anything again.
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(ids(&client.orders(OrderStatus::Delivered).await.unwrap()), vec!["B"]);
    let counts = client.counts().await.unwrap();
    assert_eq!(counts.delivered, 1);
    assert_eq!(counts.total(), 1);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_each_pickup_gets_its_own_deadline() {
    let seed = vec![
        order("A", "Aarav R.", OrderStatus::Ready),
        order("B", "Meera S.", OrderStatus::Ready),
    ];
    let (board, client) = order_board::new(seed, &config()).unwrap();
    let handle = tokio::spawn(board.run());

    client.mark_picked_up(OrderId::from("A")).await.unwrap();
    tokio::time::sleep(Duration::from_secs(3)).await;
    client.mark_picked_up(OrderId::from("B")).await.unwrap();

    // T+5.5: A is due, B (picked up at T+3) is not.
    tokio::time::sleep(Duration::from_millis(2500)).await;
    assert_eq!(ids(&client.orders(OrderStatus::Delivered).await.unwrap()), vec!["A"]);
    assert_eq!(ids(&client.orders(OrderStatus::PickedUp).await.unwrap()), vec!["B"]);
    assert_eq!(client.pending_deliveries().await.unwrap(), vec![OrderId::from("B")]);

    // T+8.5: B is due too, and lands in front of A.
    tokio::time::sleep(Duration::from_secs(3)).await;
    assert!(client.orders(OrderStatus::PickedUp).await.unwrap().is_empty());
    assert_eq!(ids(&client.orders(OrderStatus::Delivered).await.unwrap()), vec!["B", "A"]);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_seeded_picked_up_orders_get_timers() {
    let seed = vec![order("ORD-1028", "Karthik V.", OrderStatus::PickedUp)];
    let (board, client) = order_board::new(seed, &config()).unwrap();
    let handle = tokio::spawn(board.run());

    tokio::time::sleep(Duration::from_secs(6)).await;
    let counts = client.counts().await.unwrap();
    assert_eq!(counts.picked_up, 0);
    assert_eq!(counts.delivered, 1);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_teardown_cancels_pending_delivery() {
    let seed = vec![order("B", "Meera S.", OrderStatus::Ready)];
    let (board, client) = order_board::new(seed, &config()).unwrap();
    let handle = tokio::spawn(board.run());

    client.mark_picked_up(OrderId::from("B")).await.unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;

    drop(client);
    let store = handle.await.unwrap();

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(ids(store.query(OrderStatus::PickedUp)), vec!["B"]);
    assert!(store.query(OrderStatus::Delivered).is_empty());
}

#[tokio::test]
async fn test_search_is_scoped_and_case_insensitive() {
    let seed = vec![
        order("A", "Meera S.", OrderStatus::Preparing),
        order("B", "Aarav R.", OrderStatus::Preparing),
        order("C", "Meera K.", OrderStatus::Ready),
    ];
    let (board, client) = order_board::new(seed, &config()).unwrap();
    let handle = tokio::spawn(board.run());

    let hits = client.search(OrderStatus::Preparing, "meera").await.unwrap();
    assert_eq!(ids(&hits), vec!["A"]);

    let all = client.search(OrderStatus::Preparing, "   ").await.unwrap();
    assert_eq!(all.len(), 2);

    assert!(client.search(OrderStatus::Delivered, "meera").await.unwrap().is_empty());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_mismatched_source_and_illegal_edges_change_nothing() {
    let seed = vec![
        order("p1", "Aarav R.", OrderStatus::Preparing),
        order("r1", "Nikhil D.", OrderStatus::Ready),
    ];
    let (board, client) = order_board::new(seed, &config()).unwrap();
    let handle = tokio::spawn(board.run());
    let before = client.snapshot().await.unwrap();

    // p1 is not in `ready`: silent no-op.
    let moved = client.mark_picked_up(OrderId::from("p1")).await.unwrap();
    assert!(moved.is_none());
    assert!(client.pending_deliveries().await.unwrap().is_empty());

    let err = client
        .transition(OrderId::from("r1"), OrderStatus::Ready, OrderStatus::Delivered)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::IllegalTransition {
            from: OrderStatus::Ready,
            to: OrderStatus::Delivered,
        }
    );

    assert_eq!(client.snapshot().await.unwrap(), before);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_duplicate_seed_is_rejected() {
    let seed = vec![
        order("dup", "Aarav R.", OrderStatus::Preparing),
        order("dup", "Meera S.", OrderStatus::Ready),
    ];
    let err = order_board::new(seed, &config()).err().unwrap();
    assert_eq!(err, OrderError::DuplicateOrder(OrderId::from("dup")));
}

#[tokio::test]
async fn test_client_reports_closed_board() {
    let (board, client) = order_board::new(Vec::new(), &config()).unwrap();
    drop(board);

    let err = client.counts().await.unwrap_err();
    assert!(matches!(err, OrderError::ActorCommunicationError(_)));
}
