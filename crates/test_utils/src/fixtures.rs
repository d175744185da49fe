//! Pre-built Test Fixtures
//!
//! Ready-to-use caller payloads shaped like the ones the claims dashboard and
//! shopping list front ends send.

use fake::faker::lorem::en::Word;
use fake::Fake;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use domain_claims::{ClaimFields, RuleFields};

/// Fixture for claim payloads
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// A professional claim with every conventional field set
    pub fn professional() -> ClaimFields {
        ClaimFields::new()
            .with_member_id("MEM-4F2K9Q")
            .with_provider_id("PRV-7Z1L0D")
            .with_amount(dec!(2310))
            .with_claim_type("837P")
            .with_diagnosis("J06.9")
    }

    /// A claim with randomised member and provider references
    pub fn random() -> ClaimFields {
        let member: u32 = (100_000..999_999).fake();
        let provider: u32 = (100_000..999_999).fake();
        let amount: i64 = (100..5_100).fake();

        ClaimFields::new()
            .with_member_id(format!("MEM-{member}"))
            .with_provider_id(format!("PRV-{provider}"))
            .with_amount(Decimal::from(amount))
            .with_claim_type("837P")
            .with_diagnosis("J06.9")
    }

    /// Raw JSON body as the dashboard posts it
    pub fn professional_json() -> Value {
        json!({
            "memberId": "MEM-4F2K9Q",
            "providerId": "PRV-7Z1L0D",
            "amount": 2310,
            "type": "837P",
            "diagnosis": "J06.9"
        })
    }
}

/// Fixture for rule payloads
pub struct RuleFixtures;

impl RuleFixtures {
    pub fn duplicate_check() -> RuleFields {
        RuleFields::new()
            .with_name("Duplicate claim check")
            .with_description("Flags claims with the same member, provider, and diagnosis")
    }

    pub fn amount_threshold(threshold: u32) -> RuleFields {
        RuleFields::new()
            .with_name("Amount threshold")
            .with_field("threshold", json!(threshold))
    }
}

/// Fixture for item names
pub struct ItemFixtures;

impl ItemFixtures {
    pub fn milk() -> &'static str {
        "Milk"
    }

    pub fn padded_milk() -> &'static str {
        "  Milk  "
    }

    /// Names the item store must reject
    pub fn blank_names() -> Vec<Option<String>> {
        vec![None, Some(String::new()), Some("   ".to_string()), Some("\t\n".to_string())]
    }

    /// A random single-word grocery name
    pub fn random_name() -> String {
        Word().fake()
    }
}
