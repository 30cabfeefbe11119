//! High-level async store API.
//!
//! A [`Store`] is the single owner of the SQLite connection. It only comes
//! into existence through [`StoreBuilder::build`], which opens the file and
//! runs the migration engine to completion first, so no item operation can
//! observe a partially migrated schema. Every call locks the connection and
//! runs on a blocking worker, which serializes access:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  StoreBuilder   │    │      Store      │    │    Database     │
//! │ (open+migrate)  │───▶│ (async facade)  │───▶│   (via db/)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: configuration and initialization
//! - [`item_ops`]: add, list, delete and clear items
//! - [`schema_ops`]: version reads
//!
//! # Examples
//!
//! ```rust,no_run
//! use larder_core::{params::AddItem, StoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = StoreBuilder::new()
//!     .with_database_path(Some("/tmp/larder.db"))
//!     .build()
//!     .await?;
//!
//! store.add_item(&AddItem::new("Kiwi", 5)).await?;
//! let items = store.list_items().await?;
//! assert_eq!(items[0].name, "Kiwi");
//!
//! store.close().await?;
//! # Ok(())
//! # }
//! ```

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex, TryLockError},
};

use log::info;
use tokio::task;

use crate::{
    db::Database,
    error::{Result, StoreError},
    models::MigrationReport,
};

pub mod builder;
pub mod item_ops;
pub mod schema_ops;


pub use builder::StoreBuilder;

/// Handle to an initialized store.
///
/// Clones share the same connection; closing any of them closes it for all.
#[derive(Clone)]
pub struct Store {
    db: Arc<Mutex<Option<Database>>>,
    path: PathBuf,
    report: MigrationReport,
}

impl Store {
    pub(crate) fn new(db: Database, path: PathBuf, report: MigrationReport) -> Self {
        Self {
            db: Arc::new(Mutex::new(Some(db))),
            path,
            report,
        }
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Outcome of the migration run performed when the store was opened.
    pub fn migration_report(&self) -> &MigrationReport {
        &self.report
    }

    /// Whether the connection is still held.
    ///
    /// Never blocks. While another call holds the connection the store is
    /// reported open; a poisoned lock reports closed.
    pub fn is_open(&self) -> bool {
        match self.db.try_lock() {
            Ok(guard) => guard.is_some(),
            Err(TryLockError::WouldBlock) => true,
            Err(TryLockError::Poisoned(_)) => false,
        }
    }

    /// Releases the connection.
    ///
    /// Returns `false` when the store was already closed. Waits for an
    /// in-flight call to finish before closing.
    pub async fn close(&self) -> Result<bool> {
        let db = Arc::clone(&self.db);
        let path = self.path.clone();

        task::spawn_blocking(move || {
            let mut guard = db.lock().map_err(|_| poisoned())?;
            match guard.take() {
                Some(database) => {
                    info!("Closing database at {}", path.display());
                    database.close()?;
                    Ok(true)
                }
                None => Ok(false),
            }
        })
        .await
        .map_err(|e| StoreError::join(&e))?
    }

    /// Runs `f` against the open connection on a blocking worker.
    pub(crate) async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || {
            let mut guard = db.lock().map_err(|_| poisoned())?;
            let database = guard.as_mut().ok_or(StoreError::NotOpen)?;
            f(database)
        })
        .await
        .map_err(|e| StoreError::join(&e))?
    }
}

fn poisoned() -> StoreError {
    StoreError::Configuration {
        message: "Store connection lock poisoned".to_string(),
    }
}
