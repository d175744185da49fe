//! Test Data Builders
//!
//! The record store never changes a claim's status or a rule's active flag,
//! so tests that need approved, denied, or inactive records build them here.

use domain_claims::{Claim, ClaimFields, ClaimStatus, Rule, RuleFields};
use domain_items::Item;

use crate::fixtures::ClaimFixtures;

/// Builder for claim records
pub struct TestClaimBuilder {
    fields: ClaimFields,
    status: ClaimStatus,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    pub fn new() -> Self {
        Self {
            fields: ClaimFixtures::professional(),
            status: ClaimStatus::Pending,
        }
    }

    pub fn with_fields(mut self, fields: ClaimFields) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn approved(self) -> Self {
        self.with_status(ClaimStatus::Approved)
    }

    pub fn denied(self) -> Self {
        self.with_status(ClaimStatus::Denied)
    }

    pub fn build(self) -> Claim {
        let mut claim = Claim::new(self.fields);
        claim.status = self.status;
        claim
    }
}

/// Builder for rule records
pub struct TestRuleBuilder {
    fields: RuleFields,
    active: bool,
}

impl Default for TestRuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRuleBuilder {
    pub fn new() -> Self {
        Self {
            fields: RuleFields::new().with_name("Test rule"),
            active: true,
        }
    }

    pub fn with_fields(mut self, fields: RuleFields) -> Self {
        self.fields = fields;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn build(self) -> Rule {
        let mut rule = Rule::new(self.fields);
        rule.active = self.active;
        rule
    }
}

/// Builder for item records, for seeding item files directly
pub struct TestItemBuilder {
    name: String,
    purchased: bool,
}

impl TestItemBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            purchased: false,
        }
    }

    pub fn purchased(mut self) -> Self {
        self.purchased = true;
        self
    }

    /// Builds the item.
    ///
    /// # Panics
    ///
    /// Panics if the name is blank.
    pub fn build(self) -> Item {
        let mut item = Item::new(Some(&self.name)).expect("test item name must not be blank");
        item.purchased = self.purchased;
        item
    }
}
