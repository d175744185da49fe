//! Shopping List Domain
//!
//! Items are the only mutable records in the system: the purchased flag can
//! be toggled and an item can be removed. The collection is persisted as a
//! whole by an [`ItemPort`] adapter.

pub mod item;
pub mod ports;
pub mod error;

pub use item::{Item, ItemList, normalize_name};
pub use ports::ItemPort;
pub use error::ItemError;
