//! Schema version reads for the Store.

use super::Store;
use crate::{error::Result, models::SchemaVersionRecord};

impl Store {
    /// Highest applied schema version.
    pub async fn schema_version(&self) -> Result<Option<u32>> {
        self.with_database(|db| db.schema_version()).await
    }

    /// Every applied version, oldest first.
    pub async fn migration_history(&self) -> Result<Vec<SchemaVersionRecord>> {
        self.with_database(|db| db.migration_history()).await
    }
}
