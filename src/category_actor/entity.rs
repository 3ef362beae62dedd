//! [`ActorEntity`] implementation for [`Category`].
//!
//! Categories have no custom actions. Deleting one deletes its items first, through the
//! [`InventoryClient`] injected as context.

use super::error::CategoryError;
use crate::clients::InventoryClient;
use crate::framework::ActorEntity;
use crate::model::{Category, CategoryCreate, CategoryId, CategoryUpdate};
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::info;

fn validate_title(title: &str) -> Result<String, CategoryError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        Err(CategoryError::EmptyTitle)
    } else {
        Ok(trimmed.to_string())
    }
}

#[async_trait]
impl ActorEntity for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Context = InventoryClient;
    type Error = CategoryError;

    fn id(&self) -> &CategoryId {
        &self.id
    }

    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, CategoryError> {
        Ok(Self {
            id,
            title: validate_title(&params.title)?,
            description: params.description.trim().to_string(),
        })
    }

    async fn on_update(&mut self, update: CategoryUpdate, _ctx: &InventoryClient) -> Result<(), CategoryError> {
        if let Some(title) = update.title {
            self.title = validate_title(&title)?;
        }
        if let Some(description) = update.description {
            self.description = description.trim().to_string();
        }
        Ok(())
    }

    /// Cascades to the inventory. If that fails the category stays in the store.
    async fn on_delete(&self, inventory: &InventoryClient) -> Result<(), CategoryError> {
        let removed = inventory.delete_items_in_category(&self.id.0).await?;
        info!(category_id = %self.id, removed, "Cascaded to items");
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &InventoryClient) -> Result<(), CategoryError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(title: &str) -> CategoryCreate {
        CategoryCreate {
            title: title.into(),
            description: " Fresh every morning ".into(),
        }
    }

    #[test]
    fn test_create_trims_and_rejects_blank_title() {
        let category = Category::from_create_params(CategoryId::from("cat-1"), create(" Bakery ")).unwrap();
        assert_eq!(category.title, "Bakery");
        assert_eq!(category.description, "Fresh every morning");

        let err = Category::from_create_params(CategoryId::from("cat-2"), create("  ")).unwrap_err();
        assert_eq!(err, CategoryError::EmptyTitle);
    }
}
