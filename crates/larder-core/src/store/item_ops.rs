//! Item operations for the Store.

use super::Store;
use crate::{
    error::Result,
    models::Item,
    params::{AddItem, Id},
};

impl Store {
    /// Adds an item. Resolves to `false`, not an error, when no row was
    /// written.
    pub async fn add_item(&self, params: &AddItem) -> Result<bool> {
        let name = params.name.clone();
        let quantity = params.quantity;
        let description = params.description_or_default().to_string();

        self.with_database(move |db| db.add_item(&name, quantity, &description))
            .await
    }

    /// Lists all items, newest first. Empty when the table is empty.
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        self.with_database(|db| db.list_items()).await
    }

    /// Number of stored items.
    pub async fn count_items(&self) -> Result<u64> {
        self.with_database(|db| db.count_items()).await
    }

    /// Deletes one item. Resolves to `false` when no item had that id.
    pub async fn delete_item(&self, params: &Id) -> Result<bool> {
        let id = params.id;
        self.with_database(move |db| db.delete_item(id)).await
    }

    /// Deletes every item. Resolves to `false` when the table was already
    /// empty.
    pub async fn clear_items(&self) -> Result<bool> {
        self.with_database(|db| db.clear_items()).await
    }
}
