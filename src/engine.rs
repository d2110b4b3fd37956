//! Compliance Engine
//!
//! Composition root: wires Detector -> Grader -> Explainer -> Conflict
//! Checker and records the combined outcome into analytics. Each analysis
//! is a pure, independently schedulable unit; the analytics store is the
//! only shared mutable state.

use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

use crate::analytics::{ComplianceAnalytics, DashboardView, Feedback, HistoryRecord, LearningInsights};
use crate::conflicts::{self, ConflictRecord};
use crate::constants;
use crate::detector::{self, ViolationMatch};
use crate::error::{EngineError, EngineResult};
use crate::explain::{self, ReasoningStep};
use crate::grading::{self, ComplianceVerdict, GradingWeights};
use crate::taxonomy::{self, Domain};

// ============================================================================
// CONFIG
// ============================================================================

/// Engine configuration (explicit, passed in - no module-level singletons)
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Inputs shorter than this are rejected with `InvalidInput`
    pub min_input_len: usize,
    pub weights: GradingWeights,
    pub history_capacity: usize,
    /// History document path; `None` keeps history in memory only
    pub persist_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_input_len: constants::DEFAULT_MIN_INPUT_LEN,
            weights: GradingWeights::default(),
            history_capacity: constants::DEFAULT_HISTORY_CAPACITY,
            persist_path: None,
        }
    }
}

impl EngineConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        Self {
            min_input_len: constants::get_min_input_len(),
            history_capacity: constants::get_history_capacity(),
            ..Default::default()
        }
    }
}

// ============================================================================
// ANALYSIS REPORT
// ============================================================================

/// Everything one classification produced, shaped for serialization
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub domain: Domain,
    #[serde(flatten)]
    pub verdict: ComplianceVerdict,
    pub reasoning_chain: Vec<ReasoningStep>,
    pub confidence_score: f64,
    pub cross_domain_conflicts: Vec<ConflictRecord>,
    pub latency_ms: u64,
}

// ============================================================================
// ENGINE
// ============================================================================

pub struct ComplianceEngine {
    config: EngineConfig,
    analytics: ComplianceAnalytics,
}

impl ComplianceEngine {
    pub fn new(config: EngineConfig) -> Self {
        let analytics = match &config.persist_path {
            Some(path) => ComplianceAnalytics::with_persistence(path, config.history_capacity),
            None => ComplianceAnalytics::new(config.history_capacity),
        };
        log::info!(
            "{} v{} ready (history capacity {})",
            constants::APP_NAME,
            constants::APP_VERSION,
            config.history_capacity
        );
        Self { config, analytics }
    }

    /// Classify `input_text` against the domain named by `domain_label`
    pub fn analyze(&self, input_text: &str, domain_label: &str) -> EngineResult<AnalysisReport> {
        self.analyze_with_hints(input_text, domain_label, &[])
    }

    /// Classify with additional free-standing evidence hints from an
    /// upstream commentary step (extra penalty only, see the grader)
    pub fn analyze_with_hints(
        &self,
        input_text: &str,
        domain_label: &str,
        hints: &[String],
    ) -> EngineResult<AnalysisReport> {
        let trimmed = input_text.trim();
        if trimmed.len() < self.config.min_input_len {
            return Err(EngineError::InvalidInput {
                length: trimmed.len(),
                min: self.config.min_input_len,
            });
        }

        let start = Instant::now();
        let domain = Domain::parse(domain_label);

        let matches: Vec<ViolationMatch> = detector::detect(input_text, domain);
        let compliant = taxonomy::has_compliant_indicators(&detector::normalize(input_text));
        let verdict = grading::grade_with_weights(&matches, hints, compliant, &self.config.weights);
        let reasoning_chain = explain::explain(input_text, domain, &matches, &verdict);
        let confidence_score = explain::overall_confidence(&reasoning_chain);
        let cross_domain_conflicts = conflicts::find_conflicts(input_text);

        let latency_ms = start.elapsed().as_millis() as u64;

        let record = HistoryRecord::new(
            domain,
            verdict.status,
            verdict.violation_summary.clone(),
            verdict.evidence.clone(),
            latency_ms,
            input_text.len(),
        );
        // Contained: the computed report stands even if the flush fails
        if let Err(e) = self.analytics.record(record) {
            log::error!("History flush failed: {}", e);
        }

        log::debug!(
            "Analyzed {} chars for {}: {} / {}",
            input_text.len(),
            domain,
            verdict.status,
            verdict.letter_grade
        );

        Ok(AnalysisReport {
            domain,
            verdict,
            reasoning_chain,
            confidence_score,
            cross_domain_conflicts,
            latency_ms,
        })
    }

    // ------------------------------------------------------------------
    // ANALYTICS SURFACE
    // ------------------------------------------------------------------

    pub fn analytics(&self) -> &ComplianceAnalytics {
        &self.analytics
    }

    pub fn dashboard(&self) -> DashboardView {
        self.analytics.dashboard()
    }

    pub fn record_feedback(&self, index: usize, feedback: Feedback) -> bool {
        self.analytics.record_feedback(index, feedback)
    }

    pub fn learning_insights(&self) -> LearningInsights {
        self.analytics.learning_insights()
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::ComplianceStatus;

    #[test]
    fn test_red_end_to_end() {
        let engine = ComplianceEngine::default();
        let report = engine
            .analyze(
                "user_email = input(); store_forever(user_email); send_to_third_party(user_email)",
                "gdpr",
            )
            .unwrap();

        assert_eq!(report.verdict.status, ComplianceStatus::Red);
        assert_eq!(report.verdict.total_violations, 3);
        assert_eq!(report.verdict.evidence.len(), 3);
        assert!(matches!(report.verdict.letter_grade.as_str(), "D" | "F"));
        assert!(report.verdict.violation_breakdown.contains_key("missing_consent"));
        assert!(report.verdict.violation_breakdown.contains_key("indefinite_retention"));
        assert!(report.verdict.violation_breakdown.contains_key("third_party_sharing"));
    }

    #[test]
    fn test_green_end_to_end() {
        let engine = ComplianceEngine::default();
        let report = engine
            .analyze("if user_consent_given(): store_with_expiry(encrypt(data), 30)", "gdpr")
            .unwrap();

        assert_eq!(report.verdict.status, ComplianceStatus::Green);
        assert_eq!(report.verdict.letter_grade.as_str(), "A+");
        assert_eq!(report.verdict.total_violations, 0);
        assert_eq!(report.verdict.penalty_points, 0);
    }

    #[test]
    fn test_reasoning_chain_brackets_every_report() {
        let engine = ComplianceEngine::default();
        let report = engine.analyze("store patient records in the database", "hipaa").unwrap();

        let first = report.reasoning_chain.first().unwrap();
        assert_eq!(first.action, "Input Classification");
        let last = report.reasoning_chain.last().unwrap();
        assert_eq!(last.action, "Final Decision");
        assert!(last.finding.contains(report.verdict.status.as_str()));
        assert!(report.confidence_score > 0.0);
    }

    #[test]
    fn test_too_short_input_is_rejected() {
        let engine = ComplianceEngine::default();
        let err = engine.analyze("hi", "gdpr").unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { length: 2, .. }));
        // Rejected input never reaches the history log
        assert!(engine.analytics().is_empty());
    }

    #[test]
    fn test_unknown_domain_proceeds_with_empty_taxonomy() {
        let engine = ComplianceEngine::default();
        let report = engine.analyze("email stored forever with a third party", "pci-dss").unwrap();

        assert_eq!(report.domain, Domain::General);
        assert_eq!(report.verdict.total_violations, 0);
        // No violations and no compliant keywords: needs review
        assert_eq!(report.verdict.status, ComplianceStatus::Yellow);
    }

    #[test]
    fn test_analysis_is_recorded() {
        let engine = ComplianceEngine::default();
        engine.analyze("collect email addresses for marketing", "gdpr").unwrap();

        assert_eq!(engine.analytics().len(), 1);
        let record = &engine.analytics().snapshot()[0];
        assert_eq!(record.domain, Domain::Gdpr);
        assert_eq!(record.status, ComplianceStatus::Yellow);
        assert_eq!(record.input_length, "collect email addresses for marketing".len());
    }

    #[test]
    fn test_hints_flow_into_grade() {
        let engine = ComplianceEngine::default();
        let hints = vec!["GDPR_Art6".to_string()];
        let report = engine
            .analyze_with_hints("if user_consent_given(): encrypt(data)", "gdpr", &hints)
            .unwrap();

        assert_eq!(report.verdict.penalty_points, 25);
        assert_eq!(report.verdict.status, ComplianceStatus::Green);
        assert!(report.verdict.evidence.contains(&"GDPR_Art6".to_string()));
    }

    #[test]
    fn test_conflicts_are_additive() {
        let engine = ComplianceEngine::default();
        let report = engine
            .analyze("if user_consent_given(): store indefinitely after encrypt(data)", "general")
            .unwrap();

        assert_eq!(report.cross_domain_conflicts.len(), 1);
        assert_eq!(report.cross_domain_conflicts[0].conflict, "Data retention conflict");
        // Conflict detection never alters the verdict itself
        assert_eq!(report.verdict.status, ComplianceStatus::Green);
    }

    #[test]
    fn test_history_capacity_enforced_through_engine() {
        let engine = ComplianceEngine::new(EngineConfig {
            history_capacity: 3,
            ..Default::default()
        });
        for i in 0..5 {
            engine.analyze(&format!("analysis number {} of the log", i), "general").unwrap();
        }
        assert_eq!(engine.analytics().len(), 3);
    }

    #[test]
    fn test_feedback_through_engine() {
        let engine = ComplianceEngine::default();
        engine.analyze("collect email addresses for marketing", "gdpr").unwrap();

        assert!(engine.record_feedback(0, Feedback::Correct));
        assert!(!engine.record_feedback(99, Feedback::Incorrect));

        let insights = engine.learning_insights();
        assert_eq!(insights.total_feedback, 1);
        assert_eq!(insights.accuracy_rate, 1.0);
    }
}
