//! In-memory claim and rule store
//!
//! Both collections live for the lifetime of the process and start empty.
//! Each is guarded by its own `RwLock`, so request tasks on a multi-threaded
//! runtime can share one store behind an `Arc`.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use core_kernel::{
    AdapterHealth, ClaimId, DomainPort, HealthCheckResult, HealthCheckable, PortError,
};
use domain_claims::{
    compute_analytics, AnalyticsSummary, Claim, ClaimFields, RecordPort, Rule, RuleFields,
};

/// Append-only store for claims and rules
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    claims: RwLock<Vec<Claim>>,
    rules: RwLock<Vec<Rule>>,
}

impl InMemoryRecordStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryRecordStore {}

#[async_trait]
impl HealthCheckable for InMemoryRecordStore {
    async fn health_check(&self) -> HealthCheckResult {
        let claims = self.claims.read().await.len();
        let rules = self.rules.read().await.len();

        HealthCheckResult {
            adapter_id: "in-memory-records".to_string(),
            status: AdapterHealth::Healthy,
            message: Some(format!("{claims} claims, {rules} rules")),
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl RecordPort for InMemoryRecordStore {
    async fn list_claims(&self) -> Vec<Claim> {
        self.claims.read().await.clone()
    }

    async fn create_claim(&self, fields: ClaimFields) -> Claim {
        // Stamped under the lock so list order matches createdAt order
        let mut claims = self.claims.write().await;
        let claim = Claim::new(fields);
        claims.push(claim.clone());
        drop(claims);

        info!(claim_id = %claim.id, "Claim created");
        claim
    }

    async fn get_claim(&self, id: ClaimId) -> Result<Claim, PortError> {
        self.claims
            .read()
            .await
            .iter()
            .find(|claim| claim.id == id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Claim", id))
    }

    async fn list_rules(&self) -> Vec<Rule> {
        self.rules.read().await.clone()
    }

    async fn create_rule(&self, fields: RuleFields) -> Rule {
        let mut rules = self.rules.write().await;
        let rule = Rule::new(fields);
        rules.push(rule.clone());
        drop(rules);

        info!(rule_id = %rule.id, "Rule created");
        rule
    }

    async fn analytics(&self) -> AnalyticsSummary {
        let claims = self.claims.read().await;
        let rules = self.rules.read().await;

        let summary = compute_analytics(&claims, &rules);
        debug!(?summary, "Analytics computed");
        summary
    }
}
