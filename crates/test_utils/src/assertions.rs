//! Custom Test Assertions
//!
//! Assertion helpers for port results that give more meaningful messages
//! than bare `assert!(matches!(...))`.

use std::fmt::Debug;

use core_kernel::{ItemId, PortError};
use domain_claims::AnalyticsSummary;
use domain_items::Item;

/// Asserts that a port call failed with NotFound
pub fn assert_not_found<T: Debug>(result: Result<T, PortError>) {
    match result {
        Err(PortError::NotFound { .. }) => {}
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

/// Asserts that a port call failed with a validation error
pub fn assert_validation_error<T: Debug>(result: Result<T, PortError>) {
    match result {
        Err(PortError::Validation { .. }) => {}
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

/// Asserts that a port call failed with a storage error
pub fn assert_storage_error<T: Debug>(result: Result<T, PortError>) {
    match result {
        Err(PortError::Storage { .. }) => {}
        other => panic!("Expected Storage error, got {:?}", other),
    }
}

/// Finds an item by id, panicking with the list contents if absent
pub fn find_item(items: &[Item], id: ItemId) -> &Item {
    items
        .iter()
        .find(|item| item.id == id)
        .unwrap_or_else(|| panic!("Item {} not in {:?}", id, items))
}

/// Asserts that no item in the list has the given id
pub fn assert_item_absent(items: &[Item], id: ItemId) {
    assert!(
        items.iter().all(|item| item.id != id),
        "Item {} should have been removed, list is {:?}",
        id,
        items
    );
}

/// Asserts that an analytics summary is all zero
pub fn assert_analytics_empty(summary: &AnalyticsSummary) {
    assert_eq!(
        *summary,
        AnalyticsSummary::default(),
        "Expected all-zero analytics, got {:?}",
        summary
    );
}
