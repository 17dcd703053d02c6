//! # Memory Item Repository
//!
//! In-process item store for development and tests. Nothing is persisted.
//!
//! The whole store sits behind one `RwLock`: writes take it exclusively,
//! reads share it. Ids come from a counter owned by the store instance, so
//! two repositories never share ids or contents.

use std::collections::BTreeMap;

use async_trait::async_trait;
use stockroom_core::{Item, ItemId, ItemSearchCondition, ItemUpdate};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::ItemRepository;

#[derive(Debug, Default)]
struct MemoryStore {
    /// Last id handed out. Never reset, so ids stay unique after a clear.
    sequence: i64,
    /// Keyed by id; ids are monotonic, so key order is insertion order.
    items: BTreeMap<ItemId, Item>,
}

impl MemoryStore {
    fn next_id(&mut self) -> ItemId {
        self.sequence += 1;
        ItemId::new(self.sequence)
    }
}

/// In-memory [`ItemRepository`].
///
/// ## Usage
/// ```rust,ignore
/// let repo = MemoryItemRepository::new();
/// let saved = repo.save(Item::new("itemA", 10000, 10)).await?;
///
/// // Between tests:
/// repo.clear_store().await;
/// ```
#[derive(Debug, Default)]
pub struct MemoryItemRepository {
    store: RwLock<MemoryStore>,
}

impl MemoryItemRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every item. Test isolation hook; not part of [`ItemRepository`].
    pub async fn clear_store(&self) {
        let mut store = self.store.write().await;
        debug!(count = store.items.len(), "Clearing memory store");
        store.items.clear();
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.store.read().await.items.len()
    }

    /// Returns `true` when the store holds no items.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn save(&self, item: Item) -> DbResult<Item> {
        let mut store = self.store.write().await;

        let id = match item.id {
            Some(id) if store.items.contains_key(&id) => id,
            _ => store.next_id(),
        };
        let saved = item.with_id(id);

        debug!(id = %id, name = %saved.name, "Saving item");
        store.items.insert(id, saved.clone());

        Ok(saved)
    }

    async fn find_by_id(&self, id: ItemId) -> DbResult<Option<Item>> {
        let store = self.store.read().await;
        Ok(store.items.get(&id).cloned())
    }

    async fn update(&self, id: ItemId, update: &ItemUpdate) -> DbResult<()> {
        let mut store = self.store.write().await;

        let item = store
            .items
            .get_mut(&id)
            .ok_or_else(|| DbError::not_found("Item", id))?;

        debug!(id = %id, "Updating item");
        item.apply(update);

        Ok(())
    }

    async fn find_all(&self, condition: &ItemSearchCondition) -> DbResult<Vec<Item>> {
        let store = self.store.read().await;

        let items = condition.filter(store.items.values().cloned());

        debug!(count = items.len(), "Search returned items");
        Ok(items)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
