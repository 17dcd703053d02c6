//! # stockroom-db: Storage Layer for Stockroom
//!
//! Item repositories over an in-process store or SQLite (via sqlx), picked
//! at startup from configuration.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  ItemService::find_items(&condition)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   stockroom-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌────────────┐  │   │
//! │  │   │  ItemStore    │    │   Repositories     │  │ Migrations │  │   │
//! │  │   │  (store.rs)   │    │                    │  │ (embedded) │  │   │
//! │  │   │               │───►│ MemoryItemRepo     │  │            │  │   │
//! │  │   │ StoreConfig   │    │ SqliteItemRepo ────┼─►│ 001_items  │  │   │
//! │  │   │ (config.rs)   │    │                    │  │            │  │   │
//! │  │   └───────────────┘    └────────────────────┘  └────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (or nothing, for the memory store)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Store selection from environment variables
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - The `ItemRepository` trait and its variants
//! - [`store`] - Config-selected store wrapper
//! - [`service`] - Thin use-case layer
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_db::{ItemService, ItemStore, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let service = ItemService::new(ItemStore::from_config(&config).await?);
//!
//! let saved = service.save(Item::new("itemA-1", 10000, 10)).await?;
//! let found = service.find_items(&ItemSearchCondition::new().name("itemA")).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod service;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ConfigError, StoreConfig, StoreKind};
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use service::ItemService;
pub use store::ItemStore;

pub use repository::memory::MemoryItemRepository;
pub use repository::sqlite::SqliteItemRepository;
pub use repository::ItemRepository;
