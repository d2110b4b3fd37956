//! Severity Grader Module
//!
//! Turns detected violations (plus free-standing evidence hints from an
//! upstream commentary step) into a penalty-weighted letter grade, a
//! percentage score, and a count-based tri-state status.
//!
//! ## Structure
//! - `types.rs` - ComplianceStatus, LetterGrade, ComplianceVerdict
//! - `rules.rs` - penalty weights and the grade ladder (data only)
//! - `grader.rs` - the grading logic

pub mod types;
pub mod rules;
pub mod grader;

pub use types::{ComplianceStatus, ComplianceVerdict, LetterGrade};
pub use rules::GradingWeights;
pub use grader::{grade, grade_with_weights};
