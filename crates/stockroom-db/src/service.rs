//! Item use-case service.
//!
//! Delegates every call to the repository it wraps; storage-agnostic.

use stockroom_core::{Item, ItemId, ItemSearchCondition, ItemUpdate};
use tracing::debug;

use crate::error::DbResult;
use crate::repository::ItemRepository;

/// Use-case entry point for item operations.
#[derive(Debug)]
pub struct ItemService<R: ItemRepository> {
    repo: R,
}

impl<R: ItemRepository> ItemService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub async fn save(&self, item: Item) -> DbResult<Item> {
        self.repo.save(item).await
    }

    pub async fn update(&self, id: ItemId, update: &ItemUpdate) -> DbResult<()> {
        self.repo.update(id, update).await
    }

    pub async fn find_by_id(&self, id: ItemId) -> DbResult<Option<Item>> {
        self.repo.find_by_id(id).await
    }

    pub async fn find_items(&self, condition: &ItemSearchCondition) -> DbResult<Vec<Item>> {
        debug!(?condition, "Finding items");
        self.repo.find_all(condition).await
    }
}
