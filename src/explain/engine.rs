//! Reasoning Chain Generator
//!
//! CHỈ chứa logic emit - stage constants live in `types.rs`.
//! Input: raw text + domain + detector output + verdict
//! Output: ordered Vec<ReasoningStep>

use crate::detector::ViolationMatch;
use crate::grading::{ComplianceStatus, ComplianceVerdict};
use crate::taxonomy::Domain;

use super::types::{ReasoningStage, ReasoningStep};

// ============================================================================
// CHAIN GENERATION
// ============================================================================

/// Generate the reasoning chain for one analysis.
///
/// Stages 1, 4 and 5 always emit; 2 and 3 are omitted when nothing matched.
pub fn explain(
    text: &str,
    domain: Domain,
    matches: &[ViolationMatch],
    verdict: &ComplianceVerdict,
) -> Vec<ReasoningStep> {
    let mut chain = Vec::with_capacity(ReasoningStage::ALL.len());

    for stage in ReasoningStage::ALL {
        if let Some(finding) = finding_for(stage, text, domain, matches, verdict) {
            chain.push(ReasoningStep::new(stage, finding));
        }
    }

    chain
}

/// Per-stage emission predicate + finding text. `None` = stage omitted.
fn finding_for(
    stage: ReasoningStage,
    text: &str,
    domain: Domain,
    matches: &[ViolationMatch],
    verdict: &ComplianceVerdict,
) -> Option<String> {
    match stage {
        ReasoningStage::InputClassification => Some(format!(
            "Analyzing {} words for {} compliance",
            text.split_whitespace().count(),
            domain.regulation()
        )),

        ReasoningStage::PatternDetection => {
            if matches.is_empty() {
                None
            } else {
                Some(format!("Detected {} compliance-relevant patterns", matches.len()))
            }
        }

        ReasoningStage::PolicyMapping => {
            // Every taxonomy category carries a citation, so the mapped
            // count equals the matched count
            let mapped = matches.iter().filter(|m| !m.citation.is_empty()).count();
            if mapped == 0 {
                None
            } else {
                Some(format!("Mapped {} patterns to named policy citations", mapped))
            }
        }

        ReasoningStage::RiskAssessment => {
            Some(format!("Calculated risk level: {}", risk_label(verdict.status)))
        }

        ReasoningStage::FinalDecision => Some(format!(
            "Status: {} - {}",
            verdict.status.as_str(),
            verdict.violation_summary
        )),
    }
}

// ============================================================================
// RISK LABELS
// ============================================================================

/// Fixed status -> qualitative risk label table
pub fn risk_label(status: ComplianceStatus) -> &'static str {
    match status {
        ComplianceStatus::Red => "Critical Risk - Immediate Action Required",
        ComplianceStatus::Yellow => "Medium Risk - Review Recommended",
        ComplianceStatus::Green => "Low Risk - Compliant",
    }
}

// ============================================================================
// CONFIDENCE AGGREGATION
// ============================================================================

/// Arithmetic mean of emitted confidences, rounded to 2 decimals.
/// An empty chain yields 0.0.
pub fn overall_confidence(chain: &[ReasoningStep]) -> f64 {
    if chain.is_empty() {
        return 0.0;
    }
    let sum: f64 = chain.iter().map(|s| s.confidence).sum();
    let mean = sum / chain.len() as f64;
    (mean * 100.0).round() / 100.0
}

// ============================================================================
// TESTS
// ============================================================================
