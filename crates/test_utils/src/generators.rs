//! Property-Based Test Generators
//!
//! Proptest strategies for caller payloads.

use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use domain_claims::ClaimFields;

/// Strategy for non-blank item names with optional surrounding whitespace.
///
/// Yields `(raw, expected_trimmed)`.
pub fn padded_name_strategy() -> impl Strategy<Value = (String, String)> {
    ("[ \t]{0,3}", "[A-Za-z0-9][A-Za-z0-9 ]{0,15}[A-Za-z0-9]|[A-Za-z0-9]", "[ \t]{0,3}")
        .prop_map(|(left, core, right)| (format!("{left}{core}{right}"), core))
}

/// Strategy for names that are empty after trimming
pub fn blank_name_strategy() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,8}"
}

/// Strategy for claim amounts in cents, rendered as a two-place decimal
pub fn claim_amount_strategy() -> impl Strategy<Value = Decimal> {
    (100i64..500_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for claim payloads with random typed fields
pub fn claim_fields_strategy() -> impl Strategy<Value = ClaimFields> {
    ("[A-Z0-9]{6}", "[A-Z0-9]{6}", claim_amount_strategy())
        .prop_map(|(member, provider, amount)| {
            ClaimFields::new()
                .with_member_id(format!("MEM-{member}"))
                .with_provider_id(format!("PRV-{provider}"))
                .with_amount(amount)
                .with_claim_type("837P")
        })
}

/// Strategy for raw JSON claim bodies that try to set server-owned fields
pub fn reserved_override_strategy() -> impl Strategy<Value = Value> {
    ("[a-z]{1,10}", "[a-z]{1,10}", any::<bool>()).prop_map(|(id, status, active)| {
        json!({
            "id": id,
            "status": status,
            "active": active,
            "createdAt": "2000-01-01T00:00:00Z",
        })
    })
}
