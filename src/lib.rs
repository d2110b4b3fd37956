//! Compliance Core - Deterministic Rule-Based Classification Engine
//!
//! Classifies text against regulatory pattern taxonomies (GDPR, HIPAA, SOX,
//! CCPA) and produces a graded verdict with a step-by-step reasoning chain.
//! No model calls anywhere: same input + same taxonomy = same output.
//!
//! ## Structure
//! - `taxonomy` - domains, severities, per-domain pattern tables
//! - `detector` - normalization + rule matching over input text
//! - `grading` - penalty weights, letter-grade ladder, status derivation
//! - `explain` - 5-stage reasoning chain with per-stage confidence
//! - `conflicts` - cross-regulation obligation conflicts
//! - `analytics` - bounded history, dashboard views, feedback
//! - `engine` - composition root wiring the pipeline together
//!
//! ## Usage
//! ```
//! use compliance_core::{ComplianceEngine, EngineConfig};
//!
//! let engine = ComplianceEngine::new(EngineConfig::default());
//! let report = engine.analyze("store user email without consent check", "gdpr")?;
//! println!("{} ({})", report.verdict.status, report.verdict.letter_grade);
//! # Ok::<(), compliance_core::EngineError>(())
//! ```

pub mod constants;
pub mod error;

pub mod taxonomy;
pub mod detector;
pub mod grading;
pub mod explain;
pub mod conflicts;
pub mod analytics;
pub mod engine;

pub use analytics::{ComplianceAnalytics, DashboardView, Feedback, HistoryRecord, LearningInsights};
pub use conflicts::ConflictRecord;
pub use detector::ViolationMatch;
pub use engine::{AnalysisReport, ComplianceEngine, EngineConfig};
pub use error::{EngineError, EngineResult};
pub use explain::{ReasoningStage, ReasoningStep};
pub use grading::{ComplianceStatus, ComplianceVerdict, GradingWeights, LetterGrade};
pub use taxonomy::{Domain, Severity};
