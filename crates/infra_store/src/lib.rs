//! Storage Infrastructure Layer
//!
//! Adapters implementing the domain ports:
//!
//! - [`InMemoryRecordStore`]: claims and rules, process-lifetime only
//! - [`JsonFileItemStore`]: shopping list items, persisted to a JSON file
//!   that is read whole and written whole on every mutation
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::{InMemoryRecordStore, JsonFileItemStore};
//!
//! let records: Arc<dyn RecordPort> = Arc::new(InMemoryRecordStore::new());
//! let items: Arc<dyn ItemPort> = Arc::new(JsonFileItemStore::new("data/items.json"));
//! ```

pub mod error;
pub mod memory;
pub mod json_file;

pub use error::StoreError;
pub use memory::InMemoryRecordStore;
pub use json_file::JsonFileItemStore;
