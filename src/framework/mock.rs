//! # Mock Framework
//!
//! Utilities for testing domain clients without spawning a real `ResourceActor`.
//!
//! [`MockClient`] answers requests from a queue of expectations, in order. Queue the
//! responses with the `expect_*` builders, hand `mock.client()` to the code under test,
//! then call [`MockClient::verify`].
//!
//! A request that doesn't match the next expectation (wrong kind or wrong id) makes the
//! mock drop the reply channel, so the caller sees `FrameworkError::ActorDropped`.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::warn;

enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking.
///
/// ```ignore
/// let mut mock = MockClient::<InventoryItem>::new();
/// mock.expect_get(item_id.clone()).return_ok(Some(item));
/// mock.expect_create().return_ok(ItemId::from("PROD-0001"));
///
/// let client = InventoryClient::new(mock.client());
/// // ... exercise the client ...
/// mock.verify();
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    mismatches: Arc<Mutex<usize>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(Mutex::new(0usize));
        let queue = expectations.clone();
        let misses = mismatches.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = match queue.lock() {
                    Ok(mut exps) => exps.pop_front(),
                    Err(_) => None,
                };

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response }))
                        if id == want =>
                    {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Update { id, respond_to, .. }, Some(Expectation::Update { id: want, response }))
                        if id == want =>
                    {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: want, response }))
                        if id == want =>
                    {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Action { id, respond_to, .. }, Some(Expectation::Action { id: want, response }))
                        if id == want =>
                    {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        warn!("Unexpected request or expectation mismatch");
                        if let Ok(mut count) = misses.lock() {
                            *count += 1;
                        }
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn push(&self, expectation: Expectation<T>) {
        if let Ok(mut exps) = self.expectations.lock() {
            exps.push_back(expectation);
        }
    }

    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<'_, T> {
        GetExpectationBuilder { mock: self, id }
    }

    pub fn expect_create(&mut self) -> CreateExpectationBuilder<'_, T> {
        CreateExpectationBuilder { mock: self }
    }

    pub fn expect_list(&mut self) -> ListExpectationBuilder<'_, T> {
        ListExpectationBuilder { mock: self }
    }

    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<'_, T> {
        UpdateExpectationBuilder { mock: self, id }
    }

    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectationBuilder<'_, T> {
        DeleteExpectationBuilder { mock: self, id }
    }

    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<'_, T> {
        ActionExpectationBuilder { mock: self, id }
    }

    /// Panics if any expectation is still queued or any request went unmatched.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().map(|e| e.len()).unwrap_or(0);
        let mismatched = self.mismatches.lock().map(|c| *c).unwrap_or(0);
        if remaining != 0 || mismatched != 0 {
            panic!(
                "Mock expectations not met: {} remaining, {} unexpected requests",
                remaining, mismatched
            );
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct GetExpectationBuilder<'a, T: ActorEntity> {
    mock: &'a MockClient<T>,
    id: T::Id,
}

impl<T: ActorEntity> GetExpectationBuilder<'_, T> {
    pub fn return_ok(self, value: Option<T>) {
        self.mock.push(Expectation::Get { id: self.id, response: Ok(value) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push(Expectation::Get { id: self.id, response: Err(error) });
    }
}

pub struct CreateExpectationBuilder<'a, T: ActorEntity> {
    mock: &'a MockClient<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<'_, T> {
    pub fn return_ok(self, id: T::Id) {
        self.mock.push(Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push(Expectation::Create { response: Err(error) });
    }
}

pub struct ListExpectationBuilder<'a, T: ActorEntity> {
    mock: &'a MockClient<T>,
}

impl<T: ActorEntity> ListExpectationBuilder<'_, T> {
    pub fn return_ok(self, items: Vec<T>) {
        self.mock.push(Expectation::List { response: Ok(items) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push(Expectation::List { response: Err(error) });
    }
}

pub struct UpdateExpectationBuilder<'a, T: ActorEntity> {
    mock: &'a MockClient<T>,
    id: T::Id,
}

impl<T: ActorEntity> UpdateExpectationBuilder<'_, T> {
    pub fn return_ok(self, item: T) {
        self.mock.push(Expectation::Update { id: self.id, response: Ok(item) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push(Expectation::Update { id: self.id, response: Err(error) });
    }
}

pub struct DeleteExpectationBuilder<'a, T: ActorEntity> {
    mock: &'a MockClient<T>,
    id: T::Id,
}

impl<T: ActorEntity> DeleteExpectationBuilder<'_, T> {
    pub fn return_ok(self) {
        self.mock.push(Expectation::Delete { id: self.id, response: Ok(()) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push(Expectation::Delete { id: self.id, response: Err(error) });
    }
}

pub struct ActionExpectationBuilder<'a, T: ActorEntity> {
    mock: &'a MockClient<T>,
    id: T::Id,
}

impl<T: ActorEntity> ActionExpectationBuilder<'_, T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.mock.push(Expectation::Action { id: self.id, response: Ok(result) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push(Expectation::Action { id: self.id, response: Err(error) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory_actor::InventoryAction;
    use crate::model::{InventoryItem, ItemId};

    fn milk() -> InventoryItem {
        InventoryItem {
            id: ItemId::from("INV-001"),
            name: "A2 Cow Milk".into(),
            category: "Dairy".into(),
            category_id: Some("cat-dairy".into()),
            price: 120.0,
            unit: "liter".into(),
            in_stock: true,
            brand: None,
            discount: None,
        }
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<InventoryItem>::new();
        mock.expect_get(ItemId::from("INV-001")).return_ok(Some(milk()));
        mock.expect_action(ItemId::from("INV-001")).return_ok(false);

        let client = mock.client();
        let fetched = client.get(ItemId::from("INV-001")).await.unwrap();
        assert_eq!(fetched.unwrap().name, "A2 Cow Milk");

        let in_stock = client
            .perform_action(ItemId::from("INV-001"), InventoryAction::ToggleStock)
            .await
            .unwrap();
        assert!(!in_stock);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_rejects_wrong_id() {
        let mut mock = MockClient::<InventoryItem>::new();
        mock.expect_get(ItemId::from("INV-001")).return_ok(Some(milk()));

        let result = mock.client().get(ItemId::from("INV-999")).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
