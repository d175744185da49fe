//! Item File Test Utilities
//!
//! Each test gets its own temporary directory so file-backed stores never
//! share state.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

use domain_items::{Item, ItemList};

/// A temporary location for an item file, removed on drop
pub struct TempItemFile {
    dir: TempDir,
    path: PathBuf,
}

impl TempItemFile {
    /// Creates a fresh directory; the item file itself does not exist yet
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("items.json");
        Self { dir, path }
    }

    /// Creates the file pre-populated with `items`
    pub fn with_items(items: Vec<Item>) -> Self {
        let file = Self::new();
        let json = serde_json::to_string_pretty(&ItemList::new(items))
            .expect("Failed to encode items");
        file.write_raw(&json);
        file
    }

    /// Path of the item file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the enclosing directory
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Overwrites the file with arbitrary content
    pub fn write_raw(&self, content: &str) {
        fs::write(&self.path, content).expect("Failed to write item file");
    }

    /// Reads the raw JSON document, if the file exists
    pub fn read_json(&self) -> Option<Value> {
        let bytes = fs::read(&self.path).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// Reads the persisted items
    ///
    /// # Panics
    ///
    /// Panics if the file is missing or malformed.
    pub fn read_items(&self) -> Vec<Item> {
        let bytes = fs::read(&self.path).expect("Item file missing");
        let list: ItemList = serde_json::from_slice(&bytes).expect("Item file malformed");
        list.items
    }
}

impl Default for TempItemFile {
    fn default() -> Self {
        Self::new()
    }
}
