//! Analytics Aggregator Module
//!
//! Rolling history of classification outcomes plus the aggregate views
//! built from it. This is the only stateful component in the crate:
//! everything else is a pure function of its inputs.
//!
//! ## Structure
//! - `record.rs` - HistoryRecord, Feedback (immutable data + one mutable field)
//! - `store.rs` - ComplianceAnalytics (bounded, mutex-guarded, flushable)
//! - `dashboard.rs` - aggregate view computation + placeholder datasets

pub mod record;
pub mod store;
pub mod dashboard;

pub use record::{Feedback, HistoryRecord};
pub use store::ComplianceAnalytics;
pub use dashboard::{DashboardView, DomainStats, LearningInsights, ViolationFrequency};
