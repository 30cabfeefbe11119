//! Schema version bookkeeping models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// One row of the `_migrations` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchemaVersionRecord {
    /// Version reached by the step that wrote this row
    pub version: u32,

    /// When the step was applied (UTC)
    pub applied_at: Timestamp,
}

/// How a migration run ended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MigrationOutcome {
    /// The store was already at (or beyond) the target version
    UpToDate,
    /// At least one version was applied and the target was reached
    Migrated,
    /// No step exists to upgrade from `missing_from`; the store stays there
    Stalled { missing_from: u32 },
}

impl MigrationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpToDate => "up to date",
            Self::Migrated => "migrated",
            Self::Stalled { .. } => "stalled",
        }
    }
}

/// Summary of one pass of the migration engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MigrationReport {
    /// Highest recorded version before the run, `None` for a fresh store
    pub starting_version: Option<u32>,

    /// Highest recorded version after the run
    pub current_version: u32,

    /// Version the engine was asked to reach
    pub target_version: u32,

    /// Versions recorded during this run, in order
    pub applied: Vec<u32>,

    /// Number of bootstrap and migration statements executed
    pub statements_executed: usize,

    pub outcome: MigrationOutcome,
}

impl MigrationReport {
    /// Whether the store ended at the target version or beyond.
    pub fn is_complete(&self) -> bool {
        self.current_version >= self.target_version
    }
}
