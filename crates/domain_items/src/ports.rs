//! Item Store Port
//!
//! The item collection lives on a durable medium that is read and written
//! as a single blob. Adapters reload the collection for every call and write
//! it back whole after each mutation.

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, ItemId, PortError};

use crate::item::Item;

/// Port for the shopping list collection
#[async_trait]
pub trait ItemPort: DomainPort + HealthCheckable {
    /// Returns all items; an absent or unreadable medium yields an empty list
    async fn list_items(&self) -> Vec<Item>;

    /// Creates an item.
    ///
    /// Fails with [`PortError::Validation`] when the name is missing or blank,
    /// or [`PortError::Storage`] when the collection cannot be written.
    async fn create_item(&self, name: Option<String>) -> Result<Item, PortError>;

    /// Sets the purchased flag of an existing item
    async fn update_item(&self, id: ItemId, purchased: bool) -> Result<Item, PortError>;

    /// Removes an item
    async fn delete_item(&self, id: ItemId) -> Result<(), PortError>;
}
