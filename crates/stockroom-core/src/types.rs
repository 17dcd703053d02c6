//! # Domain Types
//!
//! The item record and the partial used to update it.
//!
//! ## Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Item Lifecycle                                  │
//! │                                                                         │
//! │  Item::new("itemA", 10000, 10)     id = None                            │
//! │       │                                                                 │
//! │       ▼ repository.save(item)                                           │
//! │  Item { id: Some(1), .. }          id assigned by the store             │
//! │       │                                                                 │
//! │       ▼ repository.update(id, ItemUpdate { .. })                        │
//! │  Item { id: Some(1), .. }          name/price/quantity replaced         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is the only source of ids. An item built in memory carries no
//! id until it has been saved.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Item Id
// =============================================================================

/// Store-generated item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// Wraps a raw identifier.
    #[inline]
    pub const fn new(raw: i64) -> Self {
        ItemId(raw)
    }

    /// Returns the raw identifier.
    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ItemId {
    fn from(raw: i64) -> Self {
        ItemId(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A priced, quantified inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier, `None` until the item is saved.
    pub id: Option<ItemId>,

    /// Display name. Searched by substring.
    pub name: String,

    /// Unit price in the smallest currency unit.
    pub price: i64,

    /// Units on hand.
    pub quantity: i64,
}

impl Item {
    /// Creates an unsaved item.
    pub fn new(name: impl Into<String>, price: i64, quantity: i64) -> Self {
        Item {
            id: None,
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Returns a copy of this item carrying the given id.
    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }

    /// Overwrites the mutable fields, leaving the id untouched.
    pub fn apply(&mut self, update: &ItemUpdate) {
        self.name.clone_from(&update.name);
        self.price = update.price;
        self.quantity = update.quantity;
    }
}

// =============================================================================
// Item Update
// =============================================================================

/// New values for an existing item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub name: String,
    pub price: i64,
    pub quantity: i64,
}

impl ItemUpdate {
    pub fn new(name: impl Into<String>, price: i64, quantity: i64) -> Self {
        ItemUpdate {
            name: name.into(),
            price,
            quantity,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
