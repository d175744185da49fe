//! Analytics snapshot over the claim and rule collections

use serde::{Deserialize, Serialize};

use crate::claim::{Claim, ClaimStatus};
use crate::rule::Rule;

/// Counts derived from the current record collections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_claims: usize,
    pub pending_claims: usize,
    pub approved_claims: usize,
    pub denied_claims: usize,
    pub active_rules: usize,
}

impl AnalyticsSummary {
    /// Returns the claim count for a single status
    pub fn claims_with_status(&self, status: ClaimStatus) -> usize {
        match status {
            ClaimStatus::Pending => self.pending_claims,
            ClaimStatus::Approved => self.approved_claims,
            ClaimStatus::Denied => self.denied_claims,
        }
    }
}

/// Computes the analytics snapshot from the given collections.
///
/// Nothing is cached; callers pass the live collections on every request.
pub fn compute_analytics(claims: &[Claim], rules: &[Rule]) -> AnalyticsSummary {
    let mut summary = AnalyticsSummary {
        total_claims: claims.len(),
        ..Default::default()
    };

    for claim in claims {
        match claim.status {
            ClaimStatus::Pending => summary.pending_claims += 1,
            ClaimStatus::Approved => summary.approved_claims += 1,
            ClaimStatus::Denied => summary.denied_claims += 1,
        }
    }

    summary.active_rules = rules.iter().filter(|r| r.active).count();
    summary
}
