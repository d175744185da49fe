//! Record Store Port
//!
//! `RecordPort` is everything the HTTP layer needs from the claim and rule
//! collections. The production adapter is `infra_store::InMemoryRecordStore`;
//! handlers receive it as `Arc<dyn RecordPort>` through application state.
//!
//! # Usage
//!
//! ```rust,ignore
//! let store: Arc<dyn RecordPort> = Arc::new(InMemoryRecordStore::new());
//!
//! let claim = store.create_claim(ClaimFields::new().with_member_id("MEM-1")).await;
//! let found = store.get_claim(claim.id).await?;
//! let summary = store.analytics().await;
//! ```

use async_trait::async_trait;

use core_kernel::{ClaimId, DomainPort, HealthCheckable, PortError};

use crate::analytics::{compute_analytics, AnalyticsSummary};
use crate::claim::{Claim, ClaimFields};
use crate::rule::{Rule, RuleFields};

/// Port for the append-only claim and rule collections
///
/// Listing and creation cannot fail; only point lookups can report
/// [`PortError::NotFound`].
#[async_trait]
pub trait RecordPort: DomainPort + HealthCheckable {
    /// Returns all claims in insertion order
    async fn list_claims(&self) -> Vec<Claim>;

    /// Creates a pending claim and appends it to the collection
    async fn create_claim(&self, fields: ClaimFields) -> Claim;

    /// Looks up a claim by id
    async fn get_claim(&self, id: ClaimId) -> Result<Claim, PortError>;

    /// Returns all rules in insertion order
    async fn list_rules(&self) -> Vec<Rule>;

    /// Creates an active rule and appends it to the collection
    async fn create_rule(&self, fields: RuleFields) -> Rule;

    /// Computes analytics over the live collections
    async fn analytics(&self) -> AnalyticsSummary {
        let claims = self.list_claims().await;
        let rules = self.list_rules().await;
        compute_analytics(&claims, &rules)
    }
}
