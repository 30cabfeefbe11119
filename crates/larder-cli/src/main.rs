//! Larder CLI Application
//!
//! Command-line front end for the Larder item inventory.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use larder_core::{MigrationOutcome, StoreBuilder};
use log::{info, warn};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        size_limit,
        no_color,
        command,
    } = Args::parse();

    let store = StoreBuilder::new()
        .with_database_path(database_file)
        .with_size_limit(size_limit)
        .build()
        .await
        .context("Failed to initialize database")?;

    if let MigrationOutcome::Stalled { missing_from } = store.migration_report().outcome {
        warn!(
            "Database schema stopped at version {missing_from}; no migration to version {}",
            missing_from + 1
        );
    }

    info!("Larder started");

    let cli = Cli::new(store, TerminalRenderer::new(!no_color));
    match command {
        Some(Item { command }) => cli.handle_item_command(command).await?,
        Some(Schema { command }) => cli.handle_schema_command(command).await?,
        None => cli.list_items(false).await?,
    }

    cli.finish().await
}
