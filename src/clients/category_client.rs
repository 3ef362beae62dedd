use crate::category_actor::CategoryError;
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Category, CategoryCreate, CategoryId, CategoryUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Category actor.
///
/// `delete` comes from [`ActorClient`] and removes the category's items as well.
#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<Category>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Category> for CategoryClient {
    type Error = CategoryError;

    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CategoryError::NotFound(id),
            other => other
                .entity_error::<CategoryError>()
                .cloned()
                .unwrap_or_else(|| CategoryError::ActorCommunicationError(other.to_string())),
        }
    }
}

impl CategoryClient {
    #[instrument(skip(self))]
    pub async fn create_category(&self, category: CategoryCreate) -> Result<CategoryId, CategoryError> {
        debug!("Sending request");
        self.inner.create(category).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_category(
        &self,
        id: CategoryId,
        update: CategoryUpdate,
    ) -> Result<Category, CategoryError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}
