//! Parameter structures for store operations.
//!
//! These structures are shared by every front end and carry no
//! framework-specific derives. Interface layers define their own argument
//! types (clap, for the CLI) and convert into these with `From`:
//!
//! ```text
//! CLI Args (clap) → Core Params → Store
//! ```

use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the item to operate on
    pub id: u64,
}

/// Parameters for adding a new item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddItem {
    /// Name of the item (required)
    pub name: String,
    /// Quantity on hand
    pub quantity: i64,
    /// Optional description, stored as an empty string when absent
    pub description: Option<String>,
}

impl AddItem {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description as it will be stored.
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_description_defaults_to_empty() {
        let params = AddItem::new("Kiwi", 5);
        assert_eq!(params.description_or_default(), "");

        let params = params.with_description("Green");
        assert_eq!(params.description_or_default(), "Green");
    }
}
