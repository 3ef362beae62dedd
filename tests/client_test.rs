use partner_ops::clients::{InventoryClient, ReviewClient};
use partner_ops::framework::mock::MockClient;
use partner_ops::framework::FrameworkError;
use partner_ops::inventory_actor::InventoryError;
use partner_ops::model::{
    InventoryItem, IssueType, ItemId, Review, ReviewChannel, ReviewFilter, ReviewId, ReviewStatus,
};
use partner_ops::review_actor::ReviewError;
use partner_ops::seed::{fixture_inventory, fixture_reviews};

fn item(id: &str) -> InventoryItem {
    fixture_inventory()
        .into_iter()
        .find(|item| item.id.0 == id)
        .unwrap()
}

/// Client-level logic on top of a mocked inventory actor: get, then create a copy.
#[tokio::test]
async fn test_duplicate_item_with_mock() {
    let mut mock = MockClient::<InventoryItem>::new();
    mock.expect_get(ItemId::from("INV-003")).return_ok(Some(item("INV-003")));
    mock.expect_create().return_ok(ItemId::from("PROD-0001"));

    let client = InventoryClient::new(mock.client());
    let copy = client.duplicate_item(ItemId::from("INV-003")).await.unwrap();
    assert_eq!(copy, ItemId::from("PROD-0001"));

    mock.verify();
}

#[tokio::test]
async fn test_duplicate_missing_item_is_not_found() {
    let mut mock = MockClient::<InventoryItem>::new();
    mock.expect_get(ItemId::from("INV-404")).return_ok(None);

    let client = InventoryClient::new(mock.client());
    let err = client.duplicate_item(ItemId::from("INV-404")).await.unwrap_err();
    assert_eq!(err, InventoryError::NotFound("INV-404".into()));

    mock.verify();
}

#[tokio::test]
async fn test_delete_items_in_category_with_mock() {
    let mut mock = MockClient::<InventoryItem>::new();
    mock.expect_list().return_ok(fixture_inventory());
    // cat-pantry holds INV-003, INV-005 and INV-006.
    mock.expect_delete(ItemId::from("INV-003")).return_ok();
    mock.expect_delete(ItemId::from("INV-005")).return_ok();
    mock.expect_delete(ItemId::from("INV-006")).return_ok();

    let client = InventoryClient::new(mock.client());
    assert_eq!(client.delete_items_in_category("cat-pantry").await.unwrap(), 3);

    mock.verify();
}

#[tokio::test]
async fn test_items_in_category_filters_by_name() {
    let mut mock = MockClient::<InventoryItem>::new();
    mock.expect_list().return_ok(fixture_inventory());
    mock.expect_list().return_ok(fixture_inventory());

    let client = InventoryClient::new(mock.client());
    let pantry = client.items_in_category("cat-pantry", "").await.unwrap();
    assert_eq!(pantry.len(), 3);

    let honey = client.items_in_category("cat-pantry", "HONEY").await.unwrap();
    assert_eq!(honey.len(), 1);
    assert_eq!(honey[0].id, ItemId::from("INV-005"));

    mock.verify();
}

#[tokio::test]
async fn test_framework_errors_map_to_inventory_errors() {
    let mut mock = MockClient::<InventoryItem>::new();
    mock.expect_action(ItemId::from("INV-404"))
        .return_err(FrameworkError::NotFound("INV-404".into()));
    mock.expect_update(ItemId::from("INV-001"))
        .return_err(FrameworkError::EntityError(Box::new(InventoryError::EmptyName)));

    let client = InventoryClient::new(mock.client());
    assert_eq!(
        client.toggle_stock(ItemId::from("INV-404")).await.unwrap_err(),
        InventoryError::NotFound("INV-404".into())
    );
    assert_eq!(
        client
            .update_item(ItemId::from("INV-001"), Default::default())
            .await
            .unwrap_err(),
        InventoryError::EmptyName
    );

    mock.verify();
}

#[tokio::test]
async fn test_review_filters_and_new_count_with_mock() {
    let mut mock = MockClient::<Review>::new();
    mock.expect_list().return_ok(fixture_reviews());
    mock.expect_list().return_ok(fixture_reviews());

    let client = ReviewClient::new(mock.client());
    assert_eq!(client.new_count().await.unwrap(), 4);

    let filter = ReviewFilter {
        issue_type: Some(IssueType::MissingItems),
        channel: Some(ReviewChannel::App),
        ..Default::default()
    };
    let hits = client.list_filtered(filter).await.unwrap();
    let ids: Vec<ReviewId> = hits.into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![ReviewId::from("rev-101"), ReviewId::from("rev-103")]);

    mock.verify();
}

#[tokio::test]
async fn test_review_reply_error_is_recovered() {
    let mut mock = MockClient::<Review>::new();
    mock.expect_action(ReviewId::from("rev-102"))
        .return_err(FrameworkError::EntityError(Box::new(ReviewError::EmptyText("reply"))));
    mock.expect_update(ReviewId::from("rev-102"))
        .return_err(FrameworkError::ActorClosed);

    let client = ReviewClient::new(mock.client());
    assert_eq!(
        client.reply(ReviewId::from("rev-102"), " ").await.unwrap_err(),
        ReviewError::EmptyText("reply")
    );
    assert!(matches!(
        client
            .set_status(ReviewId::from("rev-102"), ReviewStatus::Resolved)
            .await
            .unwrap_err(),
        ReviewError::ActorCommunicationError(_)
    ));

    mock.verify();
}
