//! Data models for items and schema bookkeeping.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that presentation stays out of the data
//! definitions.
//!
//! # Examples
//!
//! ```rust
//! use larder_core::models::Item;
//!
//! let item = Item {
//!     id: 4,
//!     name: "Kiwi".to_string(),
//!     quantity: 5,
//!     description: String::new(),
//! };
//! println!("{}", item); // Formats as a markdown list entry
//! ```

pub mod item;
pub mod schema;

#[cfg(test)]
mod tests;

pub use item::Item;
pub use schema::{MigrationOutcome, MigrationReport, SchemaVersionRecord};
