//! Display formatting wrappers for items and schema state.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes are formatted through newtype
//! wrappers. All output is markdown, rendered by the CLI's terminal renderer
//! or printed as-is.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Formatted     │
//! │ (Item, Report)  │───▶│ (Items, Status) │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: `Items` and `SchemaHistory`
//! - [`status`]: confirmation messages (`OperationStatus`)
//! - [`datetime`]: timestamp formatting
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use larder_core::display::{Items, OperationStatus};
//!
//! let output = format!("{}", Items(Vec::new()));
//! assert_eq!(output, "No items found.\n");
//!
//! let status = OperationStatus::success("Item 3 deleted".to_string());
//! assert!(format!("{status}").contains("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use collections::{Items, SchemaHistory};
pub use datetime::LocalDateTime;
pub use status::OperationStatus;
