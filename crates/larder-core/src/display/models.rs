//! Display implementations for domain models.

use std::fmt;

use crate::models::{Item, MigrationOutcome, MigrationReport};

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Quantity: {}", self.quantity)?;
        if !self.description.is_empty() {
            writeln!(f, "- Description: {}", self.description)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for MigrationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Schema")?;
        writeln!(f)?;
        writeln!(f, "- Current version: {}", self.current_version)?;
        writeln!(f, "- Target version: {}", self.target_version)?;
        writeln!(f, "- Status: {}", self.outcome)?;

        if let MigrationOutcome::Stalled { missing_from } = self.outcome {
            writeln!(
                f,
                "\nNo migration found to upgrade from version {} to {}.",
                missing_from,
                missing_from + 1
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(outcome: MigrationOutcome) -> MigrationReport {
        MigrationReport {
            starting_version: Some(1),
            current_version: 1,
            target_version: 2,
            applied: vec![],
            statements_executed: 0,
            outcome,
        }
    }

    #[test]
    fn test_item_without_description() {
        let item = Item {
            id: 7,
            name: "Kiwi".to_string(),
            quantity: 5,
            description: String::new(),
        };

        let output = format!("{item}");
        assert!(output.starts_with("## 7. Kiwi"));
        assert!(output.contains("- Quantity: 5"));
        assert!(!output.contains("Description"));
    }

    #[test]
    fn test_stalled_report_names_missing_step() {
        let output = format!("{}", report(MigrationOutcome::Stalled { missing_from: 1 }));
        assert!(output.contains("- Status: stalled"));
        assert!(output.contains("from version 1 to 2"));

        let output = format!("{}", report(MigrationOutcome::UpToDate));
        assert!(output.contains("- Status: up to date"));
    }
}
