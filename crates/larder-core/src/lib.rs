//! Core library for the Larder item inventory.
//!
//! This crate owns the embedded SQLite store: opening it, bringing its schema
//! up to date through versioned migrations, and the item operations built on
//! top (add, list, delete, clear).
//!
//! # Layers
//!
//! - [`db`]: the synchronous [`Database`] handle, the migration engine and
//!   the item queries
//! - [`store`]: the async [`Store`] facade, created by [`StoreBuilder`]
//! - [`models`] and [`params`]: data carried in and out
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use larder_core::{params::{AddItem, Id}, StoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Opening runs every pending migration before returning
//! let store = StoreBuilder::new()
//!     .with_database_path(Some("larder.db"))
//!     .build()
//!     .await?;
//!
//! store
//!     .add_item(&AddItem::new("Kiwi", 5).with_description("Green"))
//!     .await?;
//!
//! for item in store.list_items().await? {
//!     println!("{}", item);
//! }
//!
//! let removed = store.delete_item(&Id { id: 1 }).await?;
//! println!("removed: {removed}");
//!
//! store.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use db::{Database, Migration, MigrationSet, DEFAULT_SIZE_LIMIT, TARGET_VERSION};
pub use display::{Items, LocalDateTime, OperationStatus, SchemaHistory};
pub use error::{Result, StoreError};
pub use models::{Item, MigrationOutcome, MigrationReport, SchemaVersionRecord};
pub use params::{AddItem, Id};
pub use store::{Store, StoreBuilder};
