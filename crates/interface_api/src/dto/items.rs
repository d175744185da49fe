//! Item DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a create request.
///
/// `name` is read loosely: a value that is not a string counts as missing
/// and is rejected by the item store like any other absent name.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub name: Option<Value>,
}

impl CreateItemRequest {
    pub fn into_name(self) -> Option<String> {
        match self.name {
            Some(Value::String(name)) => Some(name),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    pub purchased: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_string_name_is_missing() {
        let request: CreateItemRequest = serde_json::from_value(json!({ "name": 42 })).unwrap();
        assert_eq!(request.into_name(), None);
    }

    #[test]
    fn test_string_name_is_kept() {
        let request: CreateItemRequest =
            serde_json::from_value(json!({ "name": " Milk " })).unwrap();
        assert_eq!(request.into_name().as_deref(), Some(" Milk "));
    }
}
