//! Database schema initialization and migrations.
//!
//! The engine tracks applied versions in `_migrations`. A store with no
//! recorded version gets the bootstrap schema and is recorded at version 0;
//! from there each [`Migration`] keyed by the current version is applied and
//! recorded as `current + 1` until the target is reached. Everything done in
//! one [`Database::migrate`](super::Database::migrate) call shares a single
//! transaction, so a failing statement leaves the store exactly as it was
//! before the call.

use std::collections::BTreeMap;

use log::{debug, info, warn};
use rusqlite::{params, Transaction};

use super::version_queries::{current_version, CREATE_VERSION_TABLE_SQL, RECORD_VERSION_SQL};
use crate::{
    error::{DatabaseResultExt, Result, StoreError},
    models::{MigrationOutcome, MigrationReport},
};

/// Schema version the built-in migrations bring a store to.
pub const TARGET_VERSION: u32 = 1;

const BOOTSTRAP_STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS items(id INTEGER PRIMARY KEY AUTOINCREMENT, name VARCHAR(20), quantity INTEGER)",
    "INSERT INTO items (name, quantity) VALUES ('Pomme', 10)",
    "INSERT INTO items (name, quantity) VALUES ('Banane', 15)",
    "INSERT INTO items (name, quantity) VALUES ('Orange', 8)",
];

const ADD_ITEM_DESCRIPTION: &[&str] = &[
    "ALTER TABLE items ADD COLUMN description VARCHAR(100) DEFAULT ''",
    "UPDATE items SET description = 'Fruit frais et croquant' WHERE name = 'Pomme'",
    "UPDATE items SET description = 'Source d''énergie' WHERE name = 'Banane'",
    "UPDATE items SET description = 'Riche en vitamine C' WHERE name = 'Orange'",
];

/// One upgrade step, applied to a store at version `from` to reach
/// `from + 1`.
///
/// Empty and whitespace-only statements are dropped on construction, so a
/// step made only of blanks is a valid no-op. Statements that return rows
/// are allowed; their rows are read and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    pub from: u32,
    pub name: String,
    /// Discrete statements, executed in order
    pub statements: Vec<String>,
}

impl Migration {
    pub fn new<I, S>(from: u32, name: impl Into<String>, statements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            from,
            name: name.into(),
            statements: collect_statements(statements),
        }
    }

    /// Version a store reaches once this step is applied.
    pub fn to(&self) -> u32 {
        self.from + 1
    }
}

/// The bootstrap schema plus every known upgrade step, keyed by the version
/// each step upgrades from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationSet {
    bootstrap: Vec<String>,
    steps: BTreeMap<u32, Migration>,
}

impl MigrationSet {
    /// Creates a set with the given bootstrap statements and no steps.
    ///
    /// Blank statements are dropped, as for [`Migration::new`].
    pub fn new<I, S>(bootstrap: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            bootstrap: collect_statements(bootstrap),
            steps: BTreeMap::new(),
        }
    }

    /// The schema shipped with the application.
    ///
    /// The step from version 1 has no statements; it only records version 2.
    pub fn builtin() -> Self {
        Self::new(BOOTSTRAP_STATEMENTS.iter().copied())
            .with_step(Migration::new(
                0,
                "add_item_description",
                ADD_ITEM_DESCRIPTION.iter().copied(),
            ))
            .with_step(Migration::new(1, "noop", Vec::<String>::new()))
    }

    /// Adds a step, replacing any step with the same `from` version.
    pub fn with_step(mut self, migration: Migration) -> Self {
        self.steps.insert(migration.from, migration);
        self
    }

    pub fn bootstrap(&self) -> &[String] {
        &self.bootstrap
    }

    /// The step that upgrades a store from `version`, if one exists.
    pub fn step_from(&self, version: u32) -> Option<&Migration> {
        self.steps.get(&version)
    }
}

impl super::Database {
    /// Brings the store to `target` using `migrations`.
    ///
    /// A missing step is not an error: the store stays at the last version
    /// reached and the report carries [`MigrationOutcome::Stalled`]. A
    /// failing statement rolls back the whole call and returns
    /// [`StoreError::Bootstrap`] or [`StoreError::MigrationStep`].
    pub fn migrate(&mut self, migrations: &MigrationSet, target: u32) -> Result<MigrationReport> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin migration transaction")?;

        tx.execute(CREATE_VERSION_TABLE_SQL, [])
            .db_context("Failed to create version table")?;

        let starting_version = current_version(&tx)?;
        match starting_version {
            Some(version) => info!("Current database version: {version}"),
            None => info!("Database has no recorded version"),
        }
        info!("Target database version: {target}");

        let mut applied = Vec::new();
        let mut statements_executed = 0;

        let mut current = match starting_version {
            Some(version) => version,
            None => {
                info!("Applying bootstrap schema");
                for statement in migrations.bootstrap() {
                    execute_statement(&tx, statement).map_err(|source| StoreError::Bootstrap {
                        statement: statement.clone(),
                        source,
                    })?;
                    statements_executed += 1;
                }
                record_version(&tx, 0)?;
                applied.push(0);
                0
            }
        };

        let mut outcome = None;
        while current < target {
            let Some(step) = migrations.step_from(current) else {
                warn!(
                    "No migration found to upgrade from version {current} to {}; stopping at version {current}",
                    current + 1
                );
                outcome = Some(MigrationOutcome::Stalled {
                    missing_from: current,
                });
                break;
            };

            info!(
                "Migrating database from v{} to v{} ({})",
                step.from,
                step.to(),
                step.name
            );
            for statement in &step.statements {
                execute_statement(&tx, statement).map_err(|source| StoreError::MigrationStep {
                    from: step.from,
                    to: step.to(),
                    statement: statement.clone(),
                    source,
                })?;
                statements_executed += 1;
            }
            record_version(&tx, step.to())?;
            applied.push(step.to());
            current = step.to();
        }

        tx.commit()
            .db_context("Failed to commit migration transaction")?;

        let outcome = outcome.unwrap_or(if applied.is_empty() {
            MigrationOutcome::UpToDate
        } else {
            MigrationOutcome::Migrated
        });
        info!("Migration check completed at version {current} ({})", outcome.as_str());

        Ok(MigrationReport {
            starting_version,
            current_version: current,
            target_version: target,
            applied,
            statements_executed,
            outcome,
        })
    }
}

fn collect_statements<I, S>(statements: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    statements
        .into_iter()
        .map(Into::into)
        .filter(|statement: &String| !statement.trim().is_empty())
        .collect()
}

/// Runs one statement to completion, draining any rows it produces.
fn execute_statement(tx: &Transaction<'_>, statement: &str) -> rusqlite::Result<()> {
    debug!("Executing migration statement: {statement}");
    let mut stmt = tx.prepare(statement)?;
    let mut rows = stmt.query([])?;
    while rows.next()?.is_some() {}
    Ok(())
}

fn record_version(tx: &Transaction<'_>, version: u32) -> Result<()> {
    tx.execute(RECORD_VERSION_SQL, params![version])
        .db_context("Failed to record schema version")?;
    Ok(())
}
