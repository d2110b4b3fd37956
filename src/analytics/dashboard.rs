//! Dashboard Views
//!
//! Aggregate views computed from the retained history. Pure functions over
//! a slice of records; the store hands them its locked snapshot.

use std::collections::BTreeMap;

use chrono::{Duration, Utc};
use serde::Serialize;

use crate::constants::{TOP_VIOLATIONS_LIMIT, TREND_WINDOW_DAYS};

use super::record::{Feedback, HistoryRecord};

// ============================================================================
// VIEW TYPES
// ============================================================================

/// Per-domain totals for the dashboard
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct DomainStats {
    pub total: u64,
    pub violations: u64,
}

/// One entry of the top-violations list
#[derive(Debug, Clone, Serialize)]
pub struct ViolationFrequency {
    pub summary: String,
    pub count: u64,
}

/// JSON-shaped aggregate over the retained history
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    /// Status name -> count (only statuses that occurred)
    pub status_distribution: BTreeMap<String, u64>,
    /// Top violation summaries by frequency, ties broken by first-seen order
    pub top_violations: Vec<ViolationFrequency>,
    /// ISO date -> mean daily compliance score, trailing window
    pub compliance_trend: BTreeMap<String, f64>,
    pub domain_breakdown: BTreeMap<String, DomainStats>,
    pub total_analyses: u64,
    pub avg_latency_ms: f64,
}

/// Feedback-derived accuracy summary
#[derive(Debug, Clone, Serialize)]
pub struct LearningInsights {
    pub total_feedback: u64,
    pub accuracy_rate: f64,
    pub improvement_areas: Vec<String>,
}

// ============================================================================
// DASHBOARD COMPUTATION
// ============================================================================

/// Build the dashboard from the retained history.
///
/// An empty history returns a fixed illustrative placeholder so the
/// dashboard always renders.
pub fn build(history: &[HistoryRecord]) -> DashboardView {
    if history.is_empty() {
        return placeholder();
    }

    // Status distribution
    let mut status_distribution: BTreeMap<String, u64> = BTreeMap::new();
    for record in history {
        *status_distribution.entry(record.status.as_str().to_string()).or_insert(0) += 1;
    }

    // Top violations: frequency among records needing attention.
    // First-seen insertion order + stable sort = deterministic tie-breaking.
    let mut frequencies: Vec<ViolationFrequency> = Vec::new();
    for record in history {
        if record.status.needs_attention() {
            match frequencies.iter_mut().find(|f| f.summary == record.violation_summary) {
                Some(entry) => entry.count += 1,
                None => frequencies.push(ViolationFrequency {
                    summary: record.violation_summary.clone(),
                    count: 1,
                }),
            }
        }
    }
    frequencies.sort_by(|a, b| b.count.cmp(&a.count));
    frequencies.truncate(TOP_VIOLATIONS_LIMIT);

    // Daily mean score over the trailing window
    let cutoff = Utc::now() - Duration::days(TREND_WINDOW_DAYS);
    let mut daily: BTreeMap<String, (u64, u64)> = BTreeMap::new();
    for record in history {
        if record.timestamp > cutoff {
            let day = record.timestamp.date_naive().to_string();
            let entry = daily.entry(day).or_insert((0, 0));
            entry.0 += u64::from(record.status.trend_score());
            entry.1 += 1;
        }
    }
    let compliance_trend = daily
        .into_iter()
        .map(|(day, (sum, n))| (day, sum as f64 / n as f64))
        .collect();

    // Per-domain breakdown
    let mut domain_breakdown: BTreeMap<String, DomainStats> = BTreeMap::new();
    for record in history {
        let stats = domain_breakdown.entry(record.domain.as_str().to_string()).or_default();
        stats.total += 1;
        if record.status.needs_attention() {
            stats.violations += 1;
        }
    }

    let total_latency: u64 = history.iter().map(|r| r.latency_ms).sum();

    DashboardView {
        status_distribution,
        top_violations: frequencies,
        compliance_trend,
        domain_breakdown,
        total_analyses: history.len() as u64,
        avg_latency_ms: total_latency as f64 / history.len() as f64,
    }
}

/// Fixed illustrative dataset shown before any analysis has run
pub fn placeholder() -> DashboardView {
    let mut status_distribution = BTreeMap::new();
    status_distribution.insert("GREEN".to_string(), 45);
    status_distribution.insert("YELLOW".to_string(), 23);
    status_distribution.insert("RED".to_string(), 12);

    let top_violations = vec![
        ViolationFrequency { summary: "Missing consent mechanism".to_string(), count: 8 },
        ViolationFrequency { summary: "Inadequate data encryption".to_string(), count: 6 },
        ViolationFrequency { summary: "Insufficient access controls".to_string(), count: 4 },
        ViolationFrequency { summary: "Missing audit trail".to_string(), count: 3 },
        ViolationFrequency { summary: "Improper data retention".to_string(), count: 2 },
    ];

    let mut compliance_trend = BTreeMap::new();
    compliance_trend.insert("2024-01-15".to_string(), 85.2);
    compliance_trend.insert("2024-01-16".to_string(), 78.9);
    compliance_trend.insert("2024-01-17".to_string(), 92.1);
    compliance_trend.insert("2024-01-18".to_string(), 88.7);
    compliance_trend.insert("2024-01-19".to_string(), 91.3);

    let mut domain_breakdown = BTreeMap::new();
    domain_breakdown.insert("gdpr".to_string(), DomainStats { total: 35, violations: 8 });
    domain_breakdown.insert("hipaa".to_string(), DomainStats { total: 25, violations: 5 });
    domain_breakdown.insert("sox".to_string(), DomainStats { total: 20, violations: 2 });

    DashboardView {
        status_distribution,
        top_violations,
        compliance_trend,
        domain_breakdown,
        total_analyses: 80,
        avg_latency_ms: 245.0,
    }
}

// ============================================================================
// LEARNING INSIGHTS
// ============================================================================

/// Feedback-derived accuracy. Fixed placeholder until feedback exists.
pub fn learning_insights(history: &[HistoryRecord]) -> LearningInsights {
    let with_feedback: Vec<&HistoryRecord> =
        history.iter().filter(|r| r.feedback.is_some()).collect();

    if with_feedback.is_empty() {
        return LearningInsights {
            total_feedback: 0,
            accuracy_rate: 0.95,
            improvement_areas: vec![
                "Data encryption patterns".to_string(),
                "Consent mechanisms".to_string(),
            ],
        };
    }

    let correct = with_feedback
        .iter()
        .filter(|r| r.feedback == Some(Feedback::Correct))
        .count();

    LearningInsights {
        total_feedback: with_feedback.len() as u64,
        accuracy_rate: correct as f64 / with_feedback.len() as f64,
        improvement_areas: vec![
            "Pattern recognition".to_string(),
            "Context understanding".to_string(),
        ],
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::ComplianceStatus;
    use crate::taxonomy::Domain;

    fn make_record(status: ComplianceStatus, summary: &str, latency_ms: u64) -> HistoryRecord {
        HistoryRecord::new(Domain::Gdpr, status, summary.to_string(), vec![], latency_ms, 100)
    }

    #[test]
    fn test_empty_history_returns_placeholder() {
        let view = build(&[]);
        assert_eq!(view.total_analyses, 80);
        assert_eq!(view.status_distribution.get("GREEN"), Some(&45));
        assert_eq!(view.top_violations.len(), 5);
    }

    #[test]
    fn test_status_distribution_counts() {
        let history = vec![
            make_record(ComplianceStatus::Green, "ok", 10),
            make_record(ComplianceStatus::Green, "ok", 10),
            make_record(ComplianceStatus::Red, "bad", 10),
        ];
        let view = build(&history);
        assert_eq!(view.status_distribution.get("GREEN"), Some(&2));
        assert_eq!(view.status_distribution.get("RED"), Some(&1));
        assert_eq!(view.status_distribution.get("YELLOW"), None);
        assert_eq!(view.total_analyses, 3);
    }

    #[test]
    fn test_top_violations_ties_keep_first_seen_order() {
        let history = vec![
            make_record(ComplianceStatus::Yellow, "summary A", 10),
            make_record(ComplianceStatus::Yellow, "summary B", 10),
            make_record(ComplianceStatus::Red, "summary C", 10),
            make_record(ComplianceStatus::Red, "summary C", 10),
            make_record(ComplianceStatus::Green, "ignored", 10),
        ];
        let view = build(&history);
        let summaries: Vec<&str> = view.top_violations.iter().map(|f| f.summary.as_str()).collect();
        // C leads on count; A and B tie at 1 and keep first-seen order
        assert_eq!(summaries, vec!["summary C", "summary A", "summary B"]);
    }

    #[test]
    fn test_top_violations_capped_at_limit() {
        let mut history = Vec::new();
        for i in 0..8 {
            history.push(make_record(ComplianceStatus::Yellow, &format!("issue {}", i), 10));
        }
        let view = build(&history);
        assert_eq!(view.top_violations.len(), TOP_VIOLATIONS_LIMIT);
    }

    #[test]
    fn test_daily_trend_averages_status_scores() {
        // GREEN=100, YELLOW=50, RED=0; all records carry today's date
        let history = vec![
            make_record(ComplianceStatus::Green, "ok", 10),
            make_record(ComplianceStatus::Red, "bad", 10),
        ];
        let view = build(&history);
        let today = Utc::now().date_naive().to_string();
        assert_eq!(view.compliance_trend.get(&today), Some(&50.0));
    }

    #[test]
    fn test_domain_breakdown() {
        let mut history = vec![make_record(ComplianceStatus::Red, "bad", 10)];
        history.push(HistoryRecord::new(
            Domain::Sox,
            ComplianceStatus::Green,
            "ok".to_string(),
            vec![],
            30,
            50,
        ));
        let view = build(&history);
        let gdpr = view.domain_breakdown.get("gdpr").unwrap();
        assert_eq!(gdpr.total, 1);
        assert_eq!(gdpr.violations, 1);
        let sox = view.domain_breakdown.get("sox").unwrap();
        assert_eq!(sox.total, 1);
        assert_eq!(sox.violations, 0);
        assert_eq!(view.avg_latency_ms, 20.0);
    }

    #[test]
    fn test_insights_placeholder_without_feedback() {
        let history = vec![make_record(ComplianceStatus::Green, "ok", 10)];
        let insights = learning_insights(&history);
        assert_eq!(insights.total_feedback, 0);
        assert_eq!(insights.accuracy_rate, 0.95);
    }

    #[test]
    fn test_insights_accuracy_from_feedback() {
        let mut history = vec![
            make_record(ComplianceStatus::Green, "ok", 10),
            make_record(ComplianceStatus::Red, "bad", 10),
            make_record(ComplianceStatus::Red, "bad", 10),
            make_record(ComplianceStatus::Yellow, "meh", 10),
        ];
        history[0].feedback = Some(Feedback::Correct);
        history[1].feedback = Some(Feedback::Correct);
        history[2].feedback = Some(Feedback::Incorrect);

        let insights = learning_insights(&history);
        assert_eq!(insights.total_feedback, 3);
        assert!((insights.accuracy_rate - 2.0 / 3.0).abs() < 1e-9);
    }
}
