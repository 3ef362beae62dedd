use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Review, ReviewCreate, ReviewFilter, ReviewId, ReviewStatus, ReviewUpdate};
use crate::review_actor::{ReviewAction, ReviewError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Review actor.
#[derive(Clone)]
pub struct ReviewClient {
    inner: ResourceClient<Review>,
}

impl ReviewClient {
    pub fn new(inner: ResourceClient<Review>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Review> for ReviewClient {
    type Error = ReviewError;

    fn inner(&self) -> &ResourceClient<Review> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ReviewError::NotFound(id),
            other => other
                .entity_error::<ReviewError>()
                .cloned()
                .unwrap_or_else(|| ReviewError::ActorCommunicationError(other.to_string())),
        }
    }
}

impl ReviewClient {
    #[instrument(skip(self))]
    pub async fn create_review(&self, review: ReviewCreate) -> Result<ReviewId, ReviewError> {
        debug!("Sending request");
        self.inner.create(review).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn set_status(&self, id: ReviewId, status: ReviewStatus) -> Result<Review, ReviewError> {
        debug!("Sending request");
        let update = ReviewUpdate {
            status: Some(status),
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, text))]
    pub async fn reply(&self, id: ReviewId, text: impl Into<String>) -> Result<Review, ReviewError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, ReviewAction::Reply(text.into()))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, text))]
    pub async fn add_note(&self, id: ReviewId, text: impl Into<String>) -> Result<Review, ReviewError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, ReviewAction::AddNote(text.into()))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn resolve(&self, id: ReviewId, note: Option<String>) -> Result<Review, ReviewError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, ReviewAction::Resolve { note })
            .await
            .map_err(Self::map_error)
    }

    /// Reviews matching every set criterion, in list order.
    #[instrument(skip(self))]
    pub async fn list_filtered(&self, filter: ReviewFilter) -> Result<Vec<Review>, ReviewError> {
        let reviews = self.list().await?;
        Ok(reviews.into_iter().filter(|r| filter.matches(r)).collect())
    }

    /// Count behind the "new reviews" badge.
    pub async fn new_count(&self) -> Result<usize, ReviewError> {
        let reviews = self.list().await?;
        Ok(reviews
            .iter()
            .filter(|r| r.status == ReviewStatus::New)
            .count())
    }
}
