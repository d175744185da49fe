//! Tests for the in-memory claim and rule store

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;
use serde_json::{json, Value};

use core_kernel::ClaimId;
use domain_claims::{
    compute_analytics, AnalyticsSummary, ClaimFields, ClaimStatus, RecordPort, RuleFields,
};
use infra_store::InMemoryRecordStore;
use test_utils::{
    assert_analytics_empty, assert_not_found, claim_amount_strategy, claim_fields_strategy,
    reserved_override_strategy, ClaimFixtures, RuleFixtures, TestClaimBuilder, TestRuleBuilder,
};

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

// ============================================================================
// Claim Tests
// ============================================================================

mod claim_store_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let store = InMemoryRecordStore::new();
        assert!(store.list_claims().await.is_empty());
        assert!(store.list_rules().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = InMemoryRecordStore::new();
        let created = store.create_claim(ClaimFixtures::professional()).await;

        let fetched = store.get_claim(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.status, ClaimStatus::Pending);
        assert_eq!(fetched.fields.member_id(), Some("MEM-4F2K9Q"));
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = InMemoryRecordStore::new();
        let mut expected = Vec::new();
        for _ in 0..5 {
            expected.push(store.create_claim(ClaimFixtures::random()).await.id);
        }

        let listed: Vec<ClaimId> = store.list_claims().await.iter().map(|c| c.id).collect();
        assert_eq!(listed, expected);
    }

    #[tokio::test]
    async fn test_ids_unique_and_timestamps_non_decreasing() {
        let store = InMemoryRecordStore::new();
        for _ in 0..50 {
            store.create_claim(ClaimFields::new()).await;
        }

        let claims = store.list_claims().await;
        let ids: HashSet<_> = claims.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 50);
        assert!(claims.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }

    #[tokio::test]
    async fn test_get_unknown_claim_is_not_found() {
        let store = InMemoryRecordStore::new();
        store.create_claim(ClaimFixtures::professional()).await;

        assert_not_found(store.get_claim(ClaimId::new()).await);
    }

    #[tokio::test]
    async fn test_caller_status_is_ignored() {
        let store = InMemoryRecordStore::new();
        let fields: ClaimFields = serde_json::from_value(json!({ "status": "denied" })).unwrap();

        let claim = store.create_claim(fields).await;
        assert_eq!(claim.status, ClaimStatus::Pending);
    }

    #[tokio::test]
    async fn test_mistyped_fields_are_stored_as_sent() {
        let store = InMemoryRecordStore::new();
        let fields: ClaimFields = serde_json::from_value(json!({
            "memberId": 12345,
            "amount": "1250.00",
        }))
        .unwrap();

        let claim = store.create_claim(fields).await;
        let stored = store.get_claim(claim.id).await.unwrap();

        assert_eq!(stored.fields.get("memberId"), Some(&json!(12345)));
        assert_eq!(stored.fields.get("amount"), Some(&json!("1250.00")));
        assert_eq!(stored.fields.member_id(), None);
        assert!(stored.fields.amount().is_some());
    }
}

// ============================================================================
// Rule Tests
// ============================================================================

mod rule_store_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_rule_defaults_active() {
        let store = InMemoryRecordStore::new();
        let rule = store.create_rule(RuleFixtures::duplicate_check()).await;

        assert!(rule.active);
        assert_eq!(store.list_rules().await, vec![rule]);
    }

    #[tokio::test]
    async fn test_caller_active_false_is_ignored() {
        let store = InMemoryRecordStore::new();
        let fields: RuleFields = serde_json::from_value(json!({ "active": false })).unwrap();

        assert!(store.create_rule(fields).await.active);
    }
}

// ============================================================================
// Analytics Tests
// ============================================================================

mod analytics_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_store_all_zero() {
        let store = InMemoryRecordStore::new();
        assert_analytics_empty(&store.analytics().await);
    }

    #[tokio::test]
    async fn test_counts_follow_live_collections() {
        let store = InMemoryRecordStore::new();
        for _ in 0..3 {
            store.create_claim(ClaimFixtures::random()).await;
        }
        store.create_rule(RuleFixtures::amount_threshold(5000)).await;
        store.create_rule(RuleFixtures::duplicate_check()).await;

        let summary = store.analytics().await;
        assert_eq!(summary.total_claims, 3);
        assert_eq!(summary.pending_claims, 3);
        assert_eq!(summary.approved_claims, 0);
        assert_eq!(summary.denied_claims, 0);
        assert_eq!(summary.active_rules, 2);

        store.create_claim(ClaimFields::new()).await;
        assert_eq!(store.analytics().await.total_claims, 4);
    }

    #[test]
    fn test_counts_every_status_and_inactive_rules() {
        let claims = vec![
            TestClaimBuilder::new().build(),
            TestClaimBuilder::new().approved().build(),
            TestClaimBuilder::new().approved().build(),
            TestClaimBuilder::new()
                .with_fields(ClaimFixtures::random())
                .denied()
                .build(),
        ];
        let rules = vec![
            TestRuleBuilder::new().build(),
            TestRuleBuilder::new()
                .with_fields(RuleFixtures::duplicate_check())
                .inactive()
                .build(),
        ];

        assert_eq!(
            compute_analytics(&claims, &rules),
            AnalyticsSummary {
                total_claims: 4,
                pending_claims: 1,
                approved_claims: 2,
                denied_claims: 1,
                active_rules: 1,
            }
        );
    }
}

// ============================================================================
// Concurrency Tests
// ============================================================================

mod concurrency_tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_are_all_kept() {
        let store = Arc::new(InMemoryRecordStore::new());

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.create_claim(ClaimFields::new()).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        let claims = store.list_claims().await;
        assert_eq!(claims.len(), 32);
        assert!(claims.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_caller_fields_survive_creation(fields in claim_fields_strategy()) {
        let store = InMemoryRecordStore::new();
        let claim = block_on(store.create_claim(fields.clone()));
        let stored = block_on(store.get_claim(claim.id)).unwrap();

        prop_assert_eq!(&stored.fields, &fields);
        prop_assert!(stored.fields.amount().is_some());
    }

    #[test]
    fn prop_amount_reads_back(amount in claim_amount_strategy()) {
        let fields = ClaimFields::new().with_amount(amount);
        prop_assert_eq!(fields.amount(), Some(amount));
    }

    #[test]
    fn prop_reserved_overrides_never_stick(body in reserved_override_strategy()) {
        let store = InMemoryRecordStore::new();
        let claim = block_on(store.create_claim(serde_json::from_value(body.clone()).unwrap()));
        let rule = block_on(store.create_rule(serde_json::from_value(body).unwrap()));

        prop_assert_eq!(claim.status, ClaimStatus::Pending);
        prop_assert!(rule.active);
        prop_assert!(!claim.fields.contains_key("id"));
        prop_assert!(!rule.fields.contains_key("createdAt"));

        let value = serde_json::to_value(&claim).unwrap();
        prop_assert_ne!(&value["createdAt"], &Value::from("2000-01-01T00:00:00Z"));
    }
}
