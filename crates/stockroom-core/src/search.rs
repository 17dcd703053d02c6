//! # Item Search
//!
//! The filter contract shared by every store variant.
//!
//! ## Matching Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ItemSearchCondition                                  │
//! │                                                                         │
//! │  name_pattern: None or ""   → no name filter                           │
//! │  name_pattern: "temA"       → name contains "temA" (case-sensitive)    │
//! │                                "itemA-1" ✓   "itemB-1" ✗               │
//! │                                                                         │
//! │  max_price: None            → no price filter                          │
//! │  max_price: 10000           → price <= 10000 (inclusive)               │
//! │                                                                         │
//! │  Both active                → AND                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Filtering never reorders: results keep the store's insertion order, and
//! SQL-backed stores must push down equivalent predicates.

use serde::{Deserialize, Serialize};

use crate::types::Item;

/// Optional name-substring and max-price filter pair.
///
/// ## Example
/// ```rust
/// use stockroom_core::{Item, ItemSearchCondition};
///
/// let items = vec![
///     Item::new("itemA-1", 10000, 10),
///     Item::new("itemA-2", 20000, 20),
///     Item::new("itemB-1", 30000, 30),
/// ];
///
/// let condition = ItemSearchCondition::new().name("itemA");
/// let names: Vec<_> = condition.filter(items).into_iter().map(|i| i.name).collect();
/// assert_eq!(names, ["itemA-1", "itemA-2"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSearchCondition {
    /// Substring the item name must contain.
    pub name_pattern: Option<String>,

    /// Inclusive upper bound on price.
    pub max_price: Option<i64>,
}

impl ItemSearchCondition {
    /// A condition with no filters; matches every item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name substring filter.
    pub fn name(mut self, pattern: impl Into<String>) -> Self {
        self.name_pattern = Some(pattern.into());
        self
    }

    /// Sets the inclusive max price filter.
    pub fn max_price(mut self, max_price: i64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Returns the active name filter. An empty pattern counts as no filter.
    pub fn name_filter(&self) -> Option<&str> {
        self.name_pattern.as_deref().filter(|p| !p.is_empty())
    }

    /// Returns the active price filter.
    pub fn price_filter(&self) -> Option<i64> {
        self.max_price
    }

    /// Returns `true` when no filter is active.
    pub fn is_unfiltered(&self) -> bool {
        self.name_filter().is_none() && self.price_filter().is_none()
    }

    /// Checks an item against both active filters.
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(pattern) = self.name_filter() {
            if !item.name.contains(pattern) {
                return false;
            }
        }

        if let Some(max_price) = self.price_filter() {
            if item.price > max_price {
                return false;
            }
        }

        true
    }

    /// Keeps the matching items, preserving their order.
    pub fn filter<I>(&self, items: I) -> Vec<Item>
    where
        I: IntoIterator<Item = Item>,
    {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Item> {
        vec![
            Item::new("itemA-1", 10000, 10),
            Item::new("itemA-2", 20000, 20),
            Item::new("itemB-1", 30000, 30),
        ]
    }

    fn names(condition: &ItemSearchCondition) -> Vec<String> {
        condition
            .filter(sample())
            .into_iter()
            .map(|item| item.name)
            .collect()
    }

    #[test]
    fn test_no_filter_returns_everything_in_order() {
        assert_eq!(
            names(&ItemSearchCondition::new()),
            ["itemA-1", "itemA-2", "itemB-1"]
        );
    }

    #[test]
    fn test_empty_pattern_is_no_filter() {
        let condition = ItemSearchCondition::new().name("");
        assert!(condition.is_unfiltered());
        assert_eq!(names(&condition), ["itemA-1", "itemA-2", "itemB-1"]);
    }

    #[test]
    fn test_name_is_substring_match() {
        assert_eq!(
            names(&ItemSearchCondition::new().name("itemA")),
            ["itemA-1", "itemA-2"]
        );
        assert_eq!(
            names(&ItemSearchCondition::new().name("temA")),
            ["itemA-1", "itemA-2"]
        );
        assert_eq!(names(&ItemSearchCondition::new().name("itemB")), ["itemB-1"]);
    }

    #[test]
    fn test_name_is_case_sensitive() {
        assert!(names(&ItemSearchCondition::new().name("ITEMA")).is_empty());
    }

    #[test]
    fn test_max_price_is_inclusive() {
        assert_eq!(
            names(&ItemSearchCondition::new().max_price(10000)),
            ["itemA-1"]
        );
        assert!(names(&ItemSearchCondition::new().max_price(9999)).is_empty());
    }

    #[test]
    fn test_filters_combine_with_and() {
        let condition = ItemSearchCondition::new().name("itemA").max_price(10000);
        assert_eq!(names(&condition), ["itemA-1"]);

        let condition = ItemSearchCondition::new().name("itemB").max_price(10000);
        assert!(names(&condition).is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let items = vec![Item::new("itemA", 100, 1), Item::new("itemA", 100, 1)];
        let result = ItemSearchCondition::new().name("item").filter(items);
        assert_eq!(result.len(), 2);
    }
}
