//! Store factory - builds the configured repository variant.
//!
//! The variant is picked once at startup from [`StoreConfig`]; callers only
//! see [`ItemRepository`].

use async_trait::async_trait;
use stockroom_core::{Item, ItemId, ItemSearchCondition, ItemUpdate};
use tracing::info;

use crate::config::{StoreConfig, StoreKind};
use crate::error::DbResult;
use crate::pool::Database;
use crate::repository::memory::MemoryItemRepository;
use crate::repository::sqlite::SqliteItemRepository;
use crate::repository::ItemRepository;

/// Enum wrapper over the store variants for runtime selection.
#[derive(Debug)]
pub enum ItemStore {
    Memory(MemoryItemRepository),
    Sqlite {
        db: Database,
        repo: SqliteItemRepository,
    },
}

impl ItemStore {
    /// Builds the store described by `config`, connecting and migrating
    /// the database for the SQLite variant.
    pub async fn from_config(config: &StoreConfig) -> DbResult<Self> {
        info!(kind = %config.kind, "Building item store");

        match config.kind {
            StoreKind::Memory => Ok(ItemStore::Memory(MemoryItemRepository::new())),
            StoreKind::Sqlite => {
                let db = Database::new(config.database.clone()).await?;
                let repo = db.items();
                Ok(ItemStore::Sqlite { db, repo })
            }
        }
    }

    pub fn kind(&self) -> StoreKind {
        match self {
            ItemStore::Memory(_) => StoreKind::Memory,
            ItemStore::Sqlite { .. } => StoreKind::Sqlite,
        }
    }

    /// The in-memory repository, for test-only hooks such as `clear_store`.
    pub fn as_memory(&self) -> Option<&MemoryItemRepository> {
        match self {
            ItemStore::Memory(repo) => Some(repo),
            ItemStore::Sqlite { .. } => None,
        }
    }

    /// Releases backing resources. A no-op for the memory store.
    pub async fn close(&self) {
        if let ItemStore::Sqlite { db, .. } = self {
            db.close().await;
        }
    }
}

#[async_trait]
impl ItemRepository for ItemStore {
    async fn save(&self, item: Item) -> DbResult<Item> {
        match self {
            ItemStore::Memory(repo) => repo.save(item).await,
            ItemStore::Sqlite { repo, .. } => repo.save(item).await,
        }
    }

    async fn find_by_id(&self, id: ItemId) -> DbResult<Option<Item>> {
        match self {
            ItemStore::Memory(repo) => repo.find_by_id(id).await,
            ItemStore::Sqlite { repo, .. } => repo.find_by_id(id).await,
        }
    }

    async fn update(&self, id: ItemId, update: &ItemUpdate) -> DbResult<()> {
        match self {
            ItemStore::Memory(repo) => repo.update(id, update).await,
            ItemStore::Sqlite { repo, .. } => repo.update(id, update).await,
        }
    }

    async fn find_all(&self, condition: &ItemSearchCondition) -> DbResult<Vec<Item>> {
        match self {
            ItemStore::Memory(repo) => repo.find_all(condition).await,
            ItemStore::Sqlite { repo, .. } => repo.find_all(condition).await,
        }
    }
}
