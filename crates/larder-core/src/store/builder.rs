//! Builder for creating and configuring Store instances.

use std::path::{Path, PathBuf};

use log::info;
use tokio::task;

use super::Store;
use crate::{
    db::{Database, MigrationSet, TARGET_VERSION},
    error::{Result, StoreError},
};

/// Builder for creating and configuring Store instances.
#[derive(Debug, Clone)]
pub struct StoreBuilder {
    database_path: Option<PathBuf>,
    size_limit: Option<u64>,
    target_version: u32,
    migrations: Option<MigrationSet>,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            size_limit: None,
            target_version: TARGET_VERSION,
            migrations: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/larder/larder.db` or `~/.local/share/larder/larder.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Caps the database file at roughly this many bytes.
    pub fn with_size_limit(mut self, size_limit: Option<u64>) -> Self {
        self.size_limit = size_limit;
        self
    }

    /// Overrides the schema version the store is brought to.
    pub fn with_target_version(mut self, target_version: u32) -> Self {
        self.target_version = target_version;
        self
    }

    /// Replaces the built-in bootstrap schema and migration steps.
    pub fn with_migrations(mut self, migrations: MigrationSet) -> Self {
        self.migrations = Some(migrations);
        self
    }

    /// Opens the store and runs migrations to completion.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileSystem` if the parent directory cannot be
    /// created, `StoreError::Open` if the connection fails, and
    /// `StoreError::Bootstrap` or `StoreError::MigrationStep` if a schema
    /// statement fails. A missing migration step is not an error; inspect
    /// [`Store::migration_report`].
    pub async fn build(self) -> Result<Store> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let migrations = self.migrations.unwrap_or_else(MigrationSet::builtin);
        let target_version = self.target_version;
        let size_limit = self.size_limit;
        let db_path_clone = db_path.clone();

        let (db, report) = task::spawn_blocking(move || {
            let mut db = Database::open_with_size_limit(&db_path_clone, size_limit)?;
            let report = db.migrate(&migrations, target_version)?;
            Ok::<_, StoreError>((db, report))
        })
        .await
        .map_err(|e| StoreError::join(&e))??;

        info!(
            "Store ready at {} (schema version {})",
            db_path.display(),
            report.current_version
        );

        Ok(Store::new(db, db_path, report))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("larder")
            .place_data_file("larder.db")
            .map_err(|e| StoreError::XdgDirectory(e.to_string()))
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
