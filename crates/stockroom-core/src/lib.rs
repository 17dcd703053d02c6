//! # stockroom-core: Pure Item Logic for Stockroom
//!
//! This crate holds the item types and the search/filter rules. It has
//! zero I/O dependencies; storage lives in `stockroom-db`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 ItemService (stockroom-db)                      │   │
//! │  │        save, update, find_by_id, find_items                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐            ┌──────────────────────────┐    │   │
//! │  │   │    types      │            │         search           │    │   │
//! │  │   │  Item         │            │  ItemSearchCondition     │    │   │
//! │  │   │  ItemId       │            │  name substring filter   │    │   │
//! │  │   │  ItemUpdate   │            │  max price filter        │    │   │
//! │  │   └───────────────┘            └──────────────────────────┘    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │           Store variants (memory, SQLite) in stockroom-db        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Item, ItemSearchCondition};
//!
//! let item = Item::new("itemA-1", 10000, 10);
//! let condition = ItemSearchCondition::new().name("temA").max_price(10000);
//!
//! assert!(condition.matches(&item));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod search;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use search::ItemSearchCondition;
pub use types::*;
