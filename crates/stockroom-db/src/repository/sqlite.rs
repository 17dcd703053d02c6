//! # SQLite Item Repository
//!
//! Database operations for items.
//!
//! ## Filter Push-Down
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              ItemSearchCondition → SQL                                  │
//! │                                                                         │
//! │  name_filter() = Some("temA")  →  instr(name, ?) > 0                   │
//! │  price_filter() = Some(10000)  →  price <= ?                           │
//! │  both                          →  joined with AND                      │
//! │  always                        →  ORDER BY id                          │
//! │                                                                         │
//! │  LIKE is not used: it is case-insensitive for ASCII in SQLite and      │
//! │  treats '%' and '_' in the pattern as wildcards. instr() is a literal, │
//! │  case-sensitive substring test, same as ItemSearchCondition::matches.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use stockroom_core::{Item, ItemId, ItemSearchCondition, ItemUpdate};
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::ItemRepository;

const ITEM_SELECT_SQL: &str = "SELECT id, name, price, quantity FROM items";

const ITEM_BY_ID_SQL: &str = "SELECT id, name, price, quantity FROM items WHERE id = ?1";

const ITEM_UPDATE_SQL: &str = "UPDATE items SET name = ?1, price = ?2, quantity = ?3 WHERE id = ?4";

#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: i64,
    name: String,
    price: i64,
    quantity: i64,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item::new(row.name, row.price, row.quantity).with_id(ItemId::new(row.id))
    }
}

/// Repository for item database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = SqliteItemRepository::new(pool);
///
/// let saved = repo.save(Item::new("itemA-1", 10000, 10)).await?;
/// let cheap = repo.find_all(&ItemSearchCondition::new().max_price(10000)).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SqliteItemRepository {
    pool: SqlitePool,
}

impl SqliteItemRepository {
    /// Creates a new SqliteItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteItemRepository { pool }
    }

    /// Counts stored items (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    /// Inserts or overwrites an item inside one transaction.
    ///
    /// ## Returns
    /// * `Ok(Item)` - Stored record with its id
    /// * `Err(DbError::TransactionFailed)` - begin/commit failed
    async fn save(&self, item: Item) -> DbResult<Item> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        if let Some(id) = item.id {
            let result = sqlx::query(ITEM_UPDATE_SQL)
                .bind(&item.name)
                .bind(item.price)
                .bind(item.quantity)
                .bind(id.get())
                .execute(&mut *tx)
                .await?;

            if result.rows_affected() > 0 {
                tx.commit()
                    .await
                    .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

                debug!(id = %id, "Overwrote item");
                return Ok(item);
            }
        }

        let result = sqlx::query("INSERT INTO items (name, price, quantity) VALUES (?1, ?2, ?3)")
            .bind(&item.name)
            .bind(item.price)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let id = ItemId::new(result.last_insert_rowid());
        debug!(id = %id, name = %item.name, "Inserted item");

        Ok(item.with_id(id))
    }

    async fn find_by_id(&self, id: ItemId) -> DbResult<Option<Item>> {
        let row: Option<ItemRow> = sqlx::query_as(ITEM_BY_ID_SQL)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Item::from))
    }

    /// Updates an existing item.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - Item doesn't exist, nothing written
    async fn update(&self, id: ItemId, update: &ItemUpdate) -> DbResult<()> {
        debug!(id = %id, "Updating item");

        let result = sqlx::query(ITEM_UPDATE_SQL)
            .bind(&update.name)
            .bind(update.price)
            .bind(update.quantity)
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", id));
        }

        Ok(())
    }

    async fn find_all(&self, condition: &ItemSearchCondition) -> DbResult<Vec<Item>> {
        debug!(
            name = ?condition.name_filter(),
            max_price = ?condition.price_filter(),
            "Searching items"
        );

        let mut query = QueryBuilder::<Sqlite>::new(ITEM_SELECT_SQL);
        let mut clause = " WHERE ";

        if let Some(pattern) = condition.name_filter() {
            query
                .push(clause)
                .push("instr(name, ")
                .push_bind(pattern.to_string())
                .push(") > 0");
            clause = " AND ";
        }

        if let Some(max_price) = condition.price_filter() {
            query.push(clause).push("price <= ").push_bind(max_price);
        }

        query.push(" ORDER BY id");

        let rows: Vec<ItemRow> = query.build_query_as().fetch_all(&self.pool).await?;
        let items: Vec<Item> = rows.into_iter().map(Item::from).collect();

        debug!(count = items.len(), "Search returned items");
        Ok(items)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
