//! Adjudication rule record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use core_kernel::RuleId;
use crate::fields::{str_field, strip_reserved, FieldMap};

/// Rule field names owned by the server
pub const RESERVED_RULE_FIELDS: [&str; 3] = ["id", "active", "createdAt"];

/// Caller-supplied rule fields, stored exactly as sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleFields(FieldMap);

impl RuleFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(fields: FieldMap) -> Self {
        Self(fields)
    }

    pub fn as_map(&self) -> &FieldMap {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Display name of the criterion
    pub fn name(&self) -> Option<&str> {
        str_field(&self.0, "name")
    }

    pub fn description(&self) -> Option<&str> {
        str_field(&self.0, "description")
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with_field("name", Value::String(name.into()))
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.with_field("description", Value::String(description.into()))
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }
}

/// A named adjudication criterion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: RuleId,
    #[serde(flatten)]
    pub fields: RuleFields,
    /// Whether the rule participates in adjudication
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Rule {
    /// Creates an active rule from caller fields.
    ///
    /// Any caller value for `id`, `active`, or `createdAt` is discarded.
    pub fn new(mut fields: RuleFields) -> Self {
        strip_reserved(&mut fields.0, &RESERVED_RULE_FIELDS);

        Self {
            id: RuleId::new(),
            fields,
            active: true,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_rule_is_active() {
        let rule = Rule::new(RuleFields::new().with_name("Max amount"));
        assert!(rule.active);
        assert_eq!(rule.fields.name(), Some("Max amount"));
    }

    #[test]
    fn test_caller_active_is_ignored() {
        let fields: RuleFields =
            serde_json::from_value(json!({ "name": "R1", "active": false })).unwrap();
        let rule = Rule::new(fields);

        assert!(rule.active);
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["active"], json!(true));
    }

    #[test]
    fn test_non_string_name_is_kept() {
        let fields: RuleFields = serde_json::from_value(json!({ "name": 7 })).unwrap();
        assert_eq!(fields.name(), None);

        let value = serde_json::to_value(Rule::new(fields)).unwrap();
        assert_eq!(value["name"], json!(7));
    }
}
