//! Claims & Rules Domain
//!
//! Append-only records for submitted claims and adjudication rules, the
//! [`RecordPort`] storage boundary, and the analytics snapshot computed
//! over both collections.
//!
//! # Record Shape
//!
//! ```text
//! caller fields (kept verbatim)  ──►  server fields applied last
//!                                          (id, status/active, createdAt)
//! ```
//!
//! Claims start as `pending` and rules start `active`; nothing in this crate
//! changes either afterwards.

pub mod fields;
pub mod claim;
pub mod rule;
pub mod analytics;
pub mod ports;

pub use claim::{Claim, ClaimFields, ClaimStatus};
pub use rule::{Rule, RuleFields};
pub use analytics::{AnalyticsSummary, compute_analytics};
pub use fields::FieldMap;
pub use ports::RecordPort;
