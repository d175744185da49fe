//! Item domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors raised while building or changing items
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("Name is required")]
    NameRequired,
}

impl From<ItemError> for PortError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NameRequired => PortError::validation_field(err.to_string(), "name"),
        }
    }
}
