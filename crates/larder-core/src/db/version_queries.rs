//! Reads of the `_migrations` version table.

use jiff::{civil::DateTime, tz::TimeZone};
use rusqlite::{types::Type, Connection, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::SchemaVersionRecord,
};

pub(crate) const CREATE_VERSION_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS _migrations (version INTEGER PRIMARY KEY, applied_at DATETIME DEFAULT CURRENT_TIMESTAMP)";
pub(crate) const RECORD_VERSION_SQL: &str = "INSERT INTO _migrations (version) VALUES (?1)";
const SELECT_CURRENT_VERSION_SQL: &str = "SELECT MAX(version) FROM _migrations";
const SELECT_HISTORY_SQL: &str = "SELECT version, applied_at FROM _migrations ORDER BY version";
const VERSION_TABLE_EXISTS_SQL: &str =
    "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = '_migrations'";

/// `CURRENT_TIMESTAMP` renders as UTC in this shape.
const APPLIED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Highest recorded version, or `None` when nothing has been recorded.
pub(crate) fn current_version(conn: &Connection) -> Result<Option<u32>> {
    conn.query_row(SELECT_CURRENT_VERSION_SQL, [], |row| row.get::<_, Option<u32>>(0))
        .db_context("Failed to read schema version")
}

fn version_table_exists(conn: &Connection) -> Result<bool> {
    conn.query_row(VERSION_TABLE_EXISTS_SQL, [], |_| Ok(()))
        .optional()
        .map(|found| found.is_some())
        .db_context("Failed to look up version table")
}

fn build_record_from_row(row: &rusqlite::Row) -> rusqlite::Result<SchemaVersionRecord> {
    let applied_at: String = row.get(1)?;
    let applied_at = DateTime::strptime(APPLIED_AT_FORMAT, &applied_at)
        .and_then(|dt| dt.to_zoned(TimeZone::UTC))
        .map(|zoned| zoned.timestamp())
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;

    Ok(SchemaVersionRecord {
        version: row.get(0)?,
        applied_at,
    })
}

impl super::Database {
    /// Current schema version, `None` for a store that was never initialized.
    pub fn schema_version(&self) -> Result<Option<u32>> {
        if !version_table_exists(&self.connection)? {
            return Ok(None);
        }
        current_version(&self.connection)
    }

    /// Every applied version in ascending order.
    pub fn migration_history(&self) -> Result<Vec<SchemaVersionRecord>> {
        if !version_table_exists(&self.connection)? {
            return Ok(Vec::new());
        }

        let mut stmt = self
            .connection
            .prepare(SELECT_HISTORY_SQL)
            .db_context("Failed to prepare query")?;

        let records = stmt
            .query_map([], build_record_from_row)
            .db_context("Failed to query migration history")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to decode migration history")?;

        Ok(records)
    }
}
