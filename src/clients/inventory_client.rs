use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::inventory_actor::{InventoryAction, InventoryError};
use crate::model::{InventoryItem, InventoryItemCreate, InventoryItemUpdate, ItemId};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Inventory actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<InventoryItem>,
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<InventoryItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<InventoryItem> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<InventoryItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => InventoryError::NotFound(id),
            other => other
                .entity_error::<InventoryError>()
                .cloned()
                .unwrap_or_else(|| InventoryError::ActorCommunicationError(other.to_string())),
        }
    }
}

impl InventoryClient {
    #[instrument(skip(self))]
    pub async fn create_item(&self, item: InventoryItemCreate) -> Result<ItemId, InventoryError> {
        debug!("Sending request");
        self.inner.create(item).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: ItemId,
        update: InventoryItemUpdate,
    ) -> Result<InventoryItem, InventoryError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Flips the stock flag and returns the new value.
    #[instrument(skip(self))]
    pub async fn toggle_stock(&self, id: ItemId) -> Result<bool, InventoryError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, InventoryAction::ToggleStock)
            .await
            .map_err(Self::map_error)
    }

    /// Creates a copy of an item with " (Copy)" appended to its name.
    #[instrument(skip(self))]
    pub async fn duplicate_item(&self, id: ItemId) -> Result<ItemId, InventoryError> {
        let source = self
            .get(id.clone())
            .await?
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))?;

        let mut params = InventoryItemCreate::from(&source);
        params.name = format!("{} (Copy)", source.name);
        self.create_item(params).await
    }

    /// Items in one category whose name matches `search`. A blank search keeps all of them.
    #[instrument(skip(self))]
    pub async fn items_in_category(
        &self,
        category_id: &str,
        search: &str,
    ) -> Result<Vec<InventoryItem>, InventoryError> {
        let items = self.list().await?;
        Ok(items
            .into_iter()
            .filter(|item| item.category_id.as_deref() == Some(category_id))
            .filter(|item| item.name_matches(search))
            .collect())
    }

    /// Deletes every item in a category. Returns how many were removed.
    #[instrument(skip(self))]
    pub async fn delete_items_in_category(&self, category_id: &str) -> Result<usize, InventoryError> {
        let doomed: Vec<ItemId> = self
            .list()
            .await?
            .into_iter()
            .filter(|item| item.category_id.as_deref() == Some(category_id))
            .map(|item| item.id)
            .collect();

        for id in &doomed {
            self.delete(id.clone()).await?;
        }
        info!(category_id, removed = doomed.len(), "Category items deleted");
        Ok(doomed.len())
    }
}
