//! JSON file item store
//!
//! The file holds `{"items": [...]}`. Every call reloads it, and every
//! mutation writes the complete collection to a sibling `.tmp` file that is
//! then renamed over the original. A missing, unreadable, or
//! malformed file reads as an empty list; write failures are returned to the
//! caller.
//!
//! Mutations inside one store instance are serialised by a mutex around the
//! read-modify-write sequence. Other processes writing the same file are not
//! coordinated with, and the last writer wins.

use async_trait::async_trait;
use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, ItemId, PortError,
};
use domain_items::{Item, ItemList, ItemPort};

use crate::error::StoreError;

/// Item store persisted to a single JSON file
#[derive(Debug)]
pub struct JsonFileItemStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileItemStore {
    /// Creates a store over `path`; the file need not exist yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }

    async fn load(&self) -> ItemList {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Item file absent, starting empty");
                return ItemList::default();
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Item file unreadable, treating as empty");
                return ItemList::default();
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return ItemList::default();
        }

        match serde_json::from_slice::<ItemList>(&bytes) {
            Ok(list) => list,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Item file malformed, treating as empty");
                ItemList::default()
            }
        }
    }

    async fn save(&self, list: &ItemList) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        // Readers never take the lock, so the file is replaced in one rename
        // rather than truncated and rewritten in place
        let json = serde_json::to_string_pretty(list)?;
        let staging = self.staging_path();
        tokio::fs::write(&staging, json).await?;
        if let Err(err) = tokio::fs::rename(&staging, &self.path).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(err.into());
        }

        debug!(path = %self.path.display(), count = list.len(), "Item file written");
        Ok(())
    }
}

impl DomainPort for JsonFileItemStore {}

#[async_trait]
impl HealthCheckable for JsonFileItemStore {
    async fn health_check(&self) -> HealthCheckResult {
        let (status, message) = match tokio::fs::metadata(&self.path).await {
            Ok(meta) if meta.is_file() => (AdapterHealth::Healthy, None),
            Ok(_) => (
                AdapterHealth::Unhealthy,
                Some("item path is not a regular file".to_string()),
            ),
            Err(err) if err.kind() == ErrorKind::NotFound => (
                AdapterHealth::Healthy,
                Some("item file not created yet".to_string()),
            ),
            Err(err) => (AdapterHealth::Degraded, Some(err.to_string())),
        };

        HealthCheckResult {
            adapter_id: "json-file-items".to_string(),
            status,
            message,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl ItemPort for JsonFileItemStore {
    async fn list_items(&self) -> Vec<Item> {
        self.load().await.items
    }

    async fn create_item(&self, name: Option<String>) -> Result<Item, PortError> {
        let item = Item::new(name.as_deref())?;

        let _guard = self.write_lock.lock().await;
        let mut list = self.load().await;
        list.push(item.clone());
        self.save(&list).await?;

        info!(item_id = %item.id, name = %item.name, "Item created");
        Ok(item)
    }

    async fn update_item(&self, id: ItemId, purchased: bool) -> Result<Item, PortError> {
        let _guard = self.write_lock.lock().await;
        let mut list = self.load().await;
        let item = list
            .set_purchased(id, purchased)
            .cloned()
            .ok_or_else(|| PortError::not_found("Item", id))?;
        self.save(&list).await?;

        info!(item_id = %id, purchased, "Item updated");
        Ok(item)
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), PortError> {
        let _guard = self.write_lock.lock().await;
        let mut list = self.load().await;
        list.remove(id).ok_or_else(|| PortError::not_found("Item", id))?;
        self.save(&list).await?;

        info!(item_id = %id, "Item deleted");
        Ok(())
    }
}
