//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use super::datetime::LocalDateTime;
use crate::models::{Item, SchemaVersionRecord};

/// Newtype wrapper for displaying a list of items.
///
/// # Examples
///
/// ```rust
/// use larder_core::{display::Items, models::Item};
///
/// let items = Items(vec![Item {
///     id: 1,
///     name: "Pomme".to_string(),
///     quantity: 10,
///     description: "Fruit frais et croquant".to_string(),
/// }]);
/// let output = format!("{}", items);
/// assert!(output.contains("Pomme"));
/// ```
pub struct Items(pub Vec<Item>);

impl Items {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of items in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }
}

impl Index<usize> for Items {
    type Output = Item;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Items {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Items {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No items found.")
        } else {
            for item in &self.0 {
                write!(f, "{}", item)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the applied schema versions.
pub struct SchemaHistory(pub Vec<SchemaVersionRecord>);

impl fmt::Display for SchemaHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No schema versions recorded.");
        }
        for record in &self.0 {
            writeln!(
                f,
                "- v{} applied {}",
                record.version,
                LocalDateTime(&record.applied_at)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    #[test]
    fn test_empty_items() {
        let items = Items(Vec::new());
        assert!(items.is_empty());
        assert_eq!(format!("{items}"), "No items found.\n");
    }

    #[test]
    fn test_history_lists_versions() {
        let history = SchemaHistory(vec![
            SchemaVersionRecord {
                version: 0,
                applied_at: Timestamp::from_second(1640995200).unwrap(),
            },
            SchemaVersionRecord {
                version: 1,
                applied_at: Timestamp::from_second(1640995200).unwrap(),
            },
        ]);

        let output = format!("{history}");
        assert!(output.contains("- v0 applied"));
        assert!(output.contains("- v1 applied"));
        assert!(format!("{}", SchemaHistory(Vec::new())).contains("No schema versions"));
    }
}
