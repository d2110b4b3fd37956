//! Severity Grader
//!
//! CHỈ chứa logic grade - weights và ladder live in `rules.rs`.
//! Input: Vec<ViolationMatch> + evidence hints + compliant-indicator flag
//! Output: ComplianceVerdict

use std::collections::BTreeMap;

use crate::detector::ViolationMatch;
use crate::taxonomy::Severity;

use super::rules::{penalty_to_grade, GradingWeights, RED_VIOLATION_MIN};
use super::types::{ComplianceStatus, ComplianceVerdict};

// ============================================================================
// MAIN GRADING FUNCTION
// ============================================================================

/// Grade with default weights
pub fn grade(matches: &[ViolationMatch], hints: &[String], compliant_signal: bool) -> ComplianceVerdict {
    grade_with_weights(matches, hints, compliant_signal, &GradingWeights::default())
}

/// Grade with custom weights.
///
/// `hints` are free-standing citations from an upstream commentary step that
/// did not go through the detector; each counts as one occurrence of its
/// mapped severity bucket and contributes penalty only - never to the
/// violation count that drives the status.
pub fn grade_with_weights(
    matches: &[ViolationMatch],
    hints: &[String],
    compliant_signal: bool,
    weights: &GradingWeights,
) -> ComplianceVerdict {
    let mut penalty: u32 = 0;
    let mut breakdown: BTreeMap<String, u32> = BTreeMap::new();
    let mut evidence: Vec<String> = Vec::new();
    let mut remediation: Vec<String> = Vec::new();

    for m in matches {
        penalty += m.count * weights.weight(m.severity);
        *breakdown.entry(m.category.to_string()).or_insert(0) += m.count;
        evidence.push(m.citation.to_string());
        remediation.push(format!(
            "Fix {} {} violation(s): {}",
            m.count,
            m.domain.regulation(),
            m.category
        ));
    }

    // Extra penalty from free-standing evidence hints
    for hint in hints {
        let severity = hint_severity(hint);
        penalty += weights.weight(severity);
        *breakdown.entry(hint_bucket(hint).to_string()).or_insert(0) += 1;
        evidence.push(hint.clone());
    }

    if remediation.is_empty() {
        remediation.push("No fixes needed - Document is compliant".to_string());
    }

    let violation_count = matches.len() as u32;
    let status = derive_status(violation_count, compliant_signal);
    let letter_grade = penalty_to_grade(penalty);
    let percentage_score = percentage(penalty);

    ComplianceVerdict {
        status,
        violation_summary: summary_for(status, violation_count),
        letter_grade,
        percentage_score,
        penalty_points: penalty,
        total_violations: violation_count,
        violation_breakdown: breakdown,
        evidence,
        remediation,
        grade_explanation: letter_grade.explanation().to_string(),
    }
}

// ============================================================================
// STATUS DERIVATION (count-based, independent of the weighted grade)
// ============================================================================

fn derive_status(violation_count: u32, compliant_signal: bool) -> ComplianceStatus {
    if violation_count >= RED_VIOLATION_MIN {
        ComplianceStatus::Red
    } else if violation_count > 0 {
        ComplianceStatus::Yellow
    } else if compliant_signal {
        ComplianceStatus::Green
    } else {
        // Zero violations but nothing actively compliant either: needs review
        ComplianceStatus::Yellow
    }
}

fn summary_for(status: ComplianceStatus, violation_count: u32) -> String {
    match status {
        ComplianceStatus::Red => {
            format!("Critical violations detected: {} issues found", violation_count)
        }
        ComplianceStatus::Yellow if violation_count > 0 => {
            format!("Compliance risks identified: {} issues found", violation_count)
        }
        ComplianceStatus::Yellow => {
            "No violations detected - manual review recommended".to_string()
        }
        ComplianceStatus::Green => "No compliance violations detected".to_string(),
    }
}

// ============================================================================
// SCORE & HINT MAPPING
// ============================================================================

/// max(0, 100 - penalty), one decimal
fn percentage(penalty: u32) -> f64 {
    let raw = (100.0 - penalty as f64).max(0.0);
    (raw * 10.0).round() / 10.0
}

/// Map a free-standing citation to a severity by regulation substring
fn hint_severity(hint: &str) -> Severity {
    let upper = hint.to_uppercase();
    if upper.contains("GDPR") || upper.contains("HIPAA") {
        Severity::Critical
    } else if upper.contains("SOX") {
        Severity::High
    } else if upper.contains("CCPA") {
        Severity::Medium
    } else {
        Severity::Low
    }
}

fn hint_bucket(hint: &str) -> &'static str {
    let upper = hint.to_uppercase();
    if upper.contains("GDPR") {
        "gdpr_evidence"
    } else if upper.contains("HIPAA") {
        "hipaa_evidence"
    } else if upper.contains("SOX") {
        "sox_evidence"
    } else if upper.contains("CCPA") {
        "ccpa_evidence"
    } else {
        "other_evidence"
    }
}

// ============================================================================
// TESTS
// ============================================================================
