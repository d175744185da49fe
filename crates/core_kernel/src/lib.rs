//! Core Kernel - Foundational types shared by the record services
//!
//! This crate provides the building blocks used across all domain modules:
//! - Strongly-typed identifiers for claims, rules, and items
//! - Port infrastructure (errors, marker traits, health checks) for the
//!   hexagonal split between domain crates and storage adapters

pub mod identifiers;
pub mod ports;

pub use identifiers::{ClaimId, RuleId, ItemId};
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
