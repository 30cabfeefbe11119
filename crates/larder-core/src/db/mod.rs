//! Database operations and SQLite management for items.
//!
//! This module owns the SQLite connection. It opens the store file, runs the
//! migration engine ([`migrations`]) and exposes the item queries
//! ([`item_queries`]) and version-table reads ([`version_queries`]).

use std::path::Path;

use log::{debug, info};
use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result, StoreError};

pub mod item_queries;
pub mod migrations;
pub mod version_queries;

pub use migrations::{Migration, MigrationSet, TARGET_VERSION};

/// Byte size the store was historically created with. Not applied unless
/// requested through [`Database::open_with_size_limit`].
pub const DEFAULT_SIZE_LIMIT: u64 = 200_000;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens the database and brings it to [`TARGET_VERSION`] with the
    /// built-in migrations.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut db = Self::open(path)?;
        db.migrate(&MigrationSet::builtin(), TARGET_VERSION)?;
        Ok(db)
    }

    /// Opens the connection without touching the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let connection = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Opened database at {}", path.display());

        Ok(Self { connection })
    }

    /// Opens the connection and caps the file at roughly `size_limit` bytes.
    ///
    /// The cap is applied as `max_page_count`, so it is rounded down to whole
    /// pages. Writes that would grow the file past it fail with `SQLITE_FULL`.
    pub fn open_with_size_limit<P: AsRef<Path>>(path: P, size_limit: Option<u64>) -> Result<Self> {
        let db = Self::open(path)?;
        if let Some(limit) = size_limit {
            db.apply_size_limit(limit)?;
        }
        Ok(db)
    }

    fn apply_size_limit(&self, limit: u64) -> Result<()> {
        let page_size: i64 = self
            .connection
            .pragma_query_value(None, "page_size", |row| row.get(0))
            .db_context("Failed to read page size")?;

        let pages = limit / page_size.max(1) as u64;
        if pages == 0 {
            return Err(StoreError::invalid_input(
                "size_limit",
                format!("{limit} bytes is smaller than one {page_size}-byte page"),
            ));
        }

        let applied: i64 = self
            .connection
            .pragma_update_and_check(None, "max_page_count", pages as i64, |row| row.get(0))
            .db_context("Failed to apply size limit")?;
        info!("Database size limited to {applied} pages of {page_size} bytes");

        Ok(())
    }

    /// Releases the connection, reporting any error SQLite raises on close.
    pub fn close(self) -> Result<()> {
        self.connection
            .close()
            .map_err(|(_, e)| StoreError::database("Failed to close database").with_source(e))
    }
}
