//! Item CRUD operations and queries.

use log::debug;
use rusqlite::params;

use crate::{
    error::{DatabaseResultExt, Result},
    models::Item,
};

const INSERT_ITEM_SQL: &str = "INSERT INTO items (name, quantity, description) VALUES (?1, ?2, ?3)";
const DELETE_ITEM_SQL: &str = "DELETE FROM items WHERE id = ?1";
const DELETE_ALL_ITEMS_SQL: &str = "DELETE FROM items";
const COUNT_ITEMS_SQL: &str = "SELECT COUNT(*) FROM items";

impl super::Database {
    /// Inserts one item. Returns `true` when a row was written.
    pub fn add_item(&mut self, name: &str, quantity: i64, description: &str) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let affected = tx
            .execute(INSERT_ITEM_SQL, params![name, quantity, description])
            .db_context("Failed to insert item")?;

        tx.commit().db_context("Failed to commit transaction")?;

        if affected > 0 {
            debug!("Item added: {name}");
        } else {
            debug!("No row written for item {name}");
        }
        Ok(affected > 0)
    }

    /// Lists every item, most recently created first.
    pub fn list_items(&self) -> Result<Vec<Item>> {
        let query = format!("SELECT {} FROM items ORDER BY id DESC", Item::COLUMNS);
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let items = stmt
            .query_map([], Item::from_row)
            .db_context("Failed to query items")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to decode items")?;

        Ok(items)
    }

    /// Number of stored items.
    pub fn count_items(&self) -> Result<u64> {
        self.connection
            .query_row(COUNT_ITEMS_SQL, [], |row| row.get::<_, i64>(0))
            .map(|count| count as u64)
            .db_context("Failed to count items")
    }

    /// Deletes the item with the given id. Returns `true` iff a row was
    /// removed.
    ///
    /// Ids beyond SQLite's signed 64-bit range can never exist, so they
    /// report `false` without touching the database.
    pub fn delete_item(&mut self, id: u64) -> Result<bool> {
        let Ok(row_id) = i64::try_from(id) else {
            debug!("Delete item {id}: id out of range");
            return Ok(false);
        };

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let affected = tx
            .execute(DELETE_ITEM_SQL, params![row_id])
            .db_context("Failed to delete item")?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Delete item {id}: {affected} row(s) affected");
        Ok(affected > 0)
    }

    /// Deletes every item. Returns `true` iff at least one row was removed.
    pub fn clear_items(&mut self) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let affected = tx
            .execute(DELETE_ALL_ITEMS_SQL, [])
            .db_context("Failed to clear items")?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Cleared {affected} item(s)");
        Ok(affected > 0)
    }
}
