//! Item model definition and row decoding.

use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// A single inventory record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Unique identifier, assigned by the store on insert
    pub id: u64,

    /// Short display name (intended to fit in 20 characters)
    pub name: String,

    /// Quantity on hand
    pub quantity: i64,

    /// Free-form description, empty when none was given
    #[serde(default)]
    pub description: String,
}

impl Item {
    /// Decodes an item from a row selected with [`Item::COLUMNS`].
    ///
    /// Columns are looked up by name; a missing column or a value of the wrong
    /// type is a conversion error. Only `description` may be NULL, since rows
    /// written before the column existed carry no value.
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get::<_, i64>("id")? as u64,
            name: row.get("name")?,
            quantity: row.get("quantity")?,
            description: row
                .get::<_, Option<String>>("description")?
                .unwrap_or_default(),
        })
    }

    /// Column list matching [`Item::from_row`].
    pub(crate) const COLUMNS: &'static str = "id, name, quantity, description";
}
