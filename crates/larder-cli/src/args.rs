use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ItemCommands, SchemaCommands};

/// Command-line interface for the Larder item inventory
///
/// Larder keeps a small list of items (name, quantity, description) in a
/// local SQLite file. The schema is brought up to date automatically each
/// time the store is opened.
#[derive(Parser)]
#[command(version, about, name = "larder")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/larder/larder.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Cap the database file at this many bytes
    #[arg(long, global = true)]
    pub size_limit: Option<u64>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Larder CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage items
    #[command(alias = "i")]
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Inspect the database schema
    Schema {
        #[command(subcommand)]
        command: SchemaCommands,
    },
}
