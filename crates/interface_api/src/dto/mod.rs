//! Request and response data transfer objects
//!
//! Claims and rules are posted and returned as their domain types; only the
//! item operations need dedicated request bodies.

pub mod items;
