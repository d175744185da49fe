//! Claim record

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use core_kernel::ClaimId;
use crate::fields::{decimal_field, decimal_value, str_field, strip_reserved, FieldMap};

/// Claim field names owned by the server
pub const RESERVED_CLAIM_FIELDS: [&str; 3] = ["id", "status", "createdAt"];

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    /// Submitted, not yet adjudicated
    #[default]
    Pending,
    /// Approved for payment
    Approved,
    /// Denied
    Denied,
}

impl ClaimStatus {
    /// Returns the wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Denied => "denied",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied claim fields
///
/// Any JSON object is accepted and stored exactly as sent. The conventional
/// fields are read through typed accessors; a value of an unexpected shape
/// is still kept and echoed back, the accessor just returns `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimFields(FieldMap);

impl ClaimFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(fields: FieldMap) -> Self {
        Self(fields)
    }

    pub fn as_map(&self) -> &FieldMap {
        &self.0
    }

    /// Raw value stored under `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Member the claim was filed for
    pub fn member_id(&self) -> Option<&str> {
        str_field(&self.0, "memberId")
    }

    /// Provider that rendered the service
    pub fn provider_id(&self) -> Option<&str> {
        str_field(&self.0, "providerId")
    }

    /// Billed amount, from a JSON number or a numeric string
    pub fn amount(&self) -> Option<Decimal> {
        decimal_field(&self.0, "amount")
    }

    /// Claim form type, e.g. `837P`
    pub fn claim_type(&self) -> Option<&str> {
        str_field(&self.0, "type")
    }

    /// Diagnosis code, e.g. `J06.9`
    pub fn diagnosis(&self) -> Option<&str> {
        str_field(&self.0, "diagnosis")
    }

    pub fn with_member_id(self, member_id: impl Into<String>) -> Self {
        self.with_field("memberId", Value::String(member_id.into()))
    }

    pub fn with_provider_id(self, provider_id: impl Into<String>) -> Self {
        self.with_field("providerId", Value::String(provider_id.into()))
    }

    pub fn with_amount(self, amount: Decimal) -> Self {
        self.with_field("amount", decimal_value(amount))
    }

    pub fn with_claim_type(self, claim_type: impl Into<String>) -> Self {
        self.with_field("type", Value::String(claim_type.into()))
    }

    pub fn with_diagnosis(self, diagnosis: impl Into<String>) -> Self {
        self.with_field("diagnosis", Value::String(diagnosis.into()))
    }

    /// Sets an arbitrary field
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }
}

/// A submitted claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// Unique identifier, assigned once at creation
    pub id: ClaimId,
    /// Caller-supplied fields
    #[serde(flatten)]
    pub fields: ClaimFields,
    /// Lifecycle status
    pub status: ClaimStatus,
    /// Creation timestamp, assigned once at creation
    pub created_at: DateTime<Utc>,
}

impl Claim {
    /// Creates a pending claim from caller fields.
    ///
    /// Any caller value for `id`, `status`, or `createdAt` is discarded.
    pub fn new(mut fields: ClaimFields) -> Self {
        strip_reserved(&mut fields.0, &RESERVED_CLAIM_FIELDS);

        Self {
            id: ClaimId::new(),
            fields,
            status: ClaimStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == ClaimStatus::Pending
    }
}
