//! Subcommand definitions and their handlers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, keeping clap out of `larder-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Store
//! ```

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use larder_core::{
    params::{AddItem, Id},
    Items, OperationStatus, SchemaHistory, Store,
};
use log::debug;

use crate::renderer::TerminalRenderer;

/// Add a new item
#[derive(Args)]
pub struct AddItemArgs {
    /// Name of the item
    pub name: String,
    /// Quantity on hand
    #[arg(allow_negative_numbers = true)]
    pub quantity: i64,
    /// Optional description of the item
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<AddItemArgs> for AddItem {
    fn from(val: AddItemArgs) -> Self {
        AddItem {
            name: val.name,
            quantity: val.quantity,
            description: val.description,
        }
    }
}

/// List all items
#[derive(Args)]
pub struct ListItemsArgs {
    /// Print items as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Delete an item
#[derive(Args)]
pub struct DeleteItemArgs {
    /// ID of the item to delete
    #[arg(help = "Unique identifier of the item to delete")]
    pub id: u64,
}

impl From<DeleteItemArgs> for Id {
    fn from(val: DeleteItemArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete every item
#[derive(Args)]
pub struct ClearItemsArgs {
    /// Confirm the deletion (required to prevent accidental data loss)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add a new item
    #[command(alias = "a")]
    Add(AddItemArgs),
    /// List all items, newest first
    #[command(aliases = ["l", "ls"])]
    List(ListItemsArgs),
    /// Delete an item by ID
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteItemArgs),
    /// Delete every item
    Clear(ClearItemsArgs),
}

#[derive(Subcommand, Clone, Copy)]
pub enum SchemaCommands {
    /// Show the current schema version and the applied history
    Status,
}

/// Executes commands against an open store.
pub struct Cli {
    store: Store,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: Store, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub async fn handle_item_command(&self, command: ItemCommands) -> Result<()> {
        match command {
            ItemCommands::Add(args) => self.add_item(&args.into()).await,
            ItemCommands::List(args) => self.list_items(args.json).await,
            ItemCommands::Delete(args) => self.delete_item(&args.into()).await,
            ItemCommands::Clear(args) => self.clear_items(args.confirm).await,
        }
    }

    pub async fn handle_schema_command(&self, command: SchemaCommands) -> Result<()> {
        match command {
            SchemaCommands::Status => self.schema_status().await,
        }
    }

    async fn add_item(&self, params: &AddItem) -> Result<()> {
        debug!("add_item: {:?}", params);
        let added = self
            .store
            .add_item(params)
            .await
            .context("Failed to add item")?;

        let status = OperationStatus::from_affected(
            added,
            format!("Added item '{}'", params.name),
            format!("Item '{}' was not added", params.name),
        );
        self.renderer.render(&status.to_string())
    }

    pub async fn list_items(&self, json: bool) -> Result<()> {
        let items = self
            .store
            .list_items()
            .await
            .context("Failed to list items")?;

        if json {
            println!("{}", serde_json::to_string_pretty(&items)?);
            return Ok(());
        }
        self.renderer.render(&Items(items).to_string())
    }

    async fn delete_item(&self, params: &Id) -> Result<()> {
        debug!("delete_item: {:?}", params);
        let deleted = self
            .store
            .delete_item(params)
            .await
            .context("Failed to delete item")?;

        let status = OperationStatus::from_affected(
            deleted,
            format!("Deleted item {}", params.id),
            format!("No item with ID {}", params.id),
        );
        self.renderer.render(&status.to_string())
    }

    async fn clear_items(&self, confirm: bool) -> Result<()> {
        if !confirm {
            bail!("Refusing to delete every item without --confirm");
        }

        let cleared = self
            .store
            .clear_items()
            .await
            .context("Failed to clear items")?;

        let status =
            OperationStatus::from_affected(cleared, "All items deleted", "No items to delete");
        self.renderer.render(&status.to_string())
    }

    async fn schema_status(&self) -> Result<()> {
        let history = self
            .store
            .migration_history()
            .await
            .context("Failed to read migration history")?;

        let mut output = self.store.migration_report().to_string();
        output.push_str("\n## Applied versions\n\n");
        output.push_str(&SchemaHistory(history).to_string());
        self.renderer.render(&output)
    }

    /// Releases the store once the command is done.
    pub async fn finish(self) -> Result<()> {
        self.store.close().await.context("Failed to close database")?;
        Ok(())
    }
}
