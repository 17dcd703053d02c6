//! # Repository Module
//!
//! The item repository contract and its store variants.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Item Repository                                      │
//! │                                                                         │
//! │  ItemService                                                           │
//! │       │                                                                 │
//! │       │  repo.find_all(&condition)                                     │
//! │       ▼                                                                 │
//! │  trait ItemRepository                                                  │
//! │  ├── save(&self, item)                                                 │
//! │  ├── find_by_id(&self, id)                                             │
//! │  ├── update(&self, id, update)                                         │
//! │  └── find_all(&self, condition)                                        │
//! │       │                                                                 │
//! │       ├──────────────────────────┐                                      │
//! │       ▼                          ▼                                      │
//! │  MemoryItemRepository      SqliteItemRepository                        │
//! │  BTreeMap + counter        items table, filters pushed to SQL          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`memory::MemoryItemRepository`] - in-process store, resettable for tests
//! - [`sqlite::SqliteItemRepository`] - SQLite-backed store

use async_trait::async_trait;
use stockroom_core::{Item, ItemId, ItemSearchCondition, ItemUpdate};

use crate::error::DbResult;

pub mod memory;
pub mod sqlite;

/// Storage contract for items.
///
/// Every variant must agree on [`find_all`](ItemRepository::find_all):
/// the rules of [`ItemSearchCondition::matches`], in insertion order.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persists an item and returns the stored record.
    ///
    /// An item without an id, or with an id the store does not know, gets a
    /// fresh id. An item whose id exists overwrites that record in place.
    async fn save(&self, item: Item) -> DbResult<Item>;

    /// Looks up an item. `Ok(None)` when absent.
    async fn find_by_id(&self, id: ItemId) -> DbResult<Option<Item>>;

    /// Replaces name, price and quantity of an existing item.
    ///
    /// Returns `DbError::NotFound` and changes nothing when the id is unknown.
    async fn update(&self, id: ItemId, update: &ItemUpdate) -> DbResult<()>;

    /// Returns the items matching `condition`, in insertion order.
    async fn find_all(&self, condition: &ItemSearchCondition) -> DbResult<Vec<Item>>;
}
