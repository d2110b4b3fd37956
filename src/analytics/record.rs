//! History Record Types
//!
//! One retained classification outcome.
//! KHÔNG chứa logic - chỉ data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::grading::ComplianceStatus;
use crate::taxonomy::Domain;

// ============================================================================
// FEEDBACK
// ============================================================================

/// User feedback on a past classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    Correct,
    Incorrect,
}

impl Feedback {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feedback::Correct => "correct",
            Feedback::Incorrect => "incorrect",
        }
    }
}

// ============================================================================
// HISTORY RECORD
// ============================================================================

/// One retained classification outcome.
///
/// Immutable after creation except for `feedback`, which the aggregator
/// mutates in place by index. Records are only removed by FIFO eviction
/// or a whole-log flush.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub domain: Domain,
    pub status: ComplianceStatus,
    pub violation_summary: String,
    pub evidence: Vec<String>,
    pub latency_ms: u64,
    pub input_length: usize,
    pub feedback: Option<Feedback>,
}

impl HistoryRecord {
    pub fn new(
        domain: Domain,
        status: ComplianceStatus,
        violation_summary: String,
        evidence: Vec<String>,
        latency_ms: u64,
        input_length: usize,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            domain,
            status,
            violation_summary,
            evidence,
            latency_ms,
            input_length,
            feedback: None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_has_id_and_no_feedback() {
        let record = HistoryRecord::new(
            Domain::Gdpr,
            ComplianceStatus::Green,
            "No compliance violations detected".to_string(),
            vec![],
            12,
            64,
        );
        assert!(!record.id.is_empty());
        assert!(record.feedback.is_none());
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = HistoryRecord::new(
            Domain::Hipaa,
            ComplianceStatus::Red,
            "Critical violations detected: 3 issues found".to_string(),
            vec!["HIPAA Security Rule - Encryption Standards".to_string()],
            88,
            240,
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"hipaa\""));
        assert!(json.contains("\"RED\""));

        let back: HistoryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_feedback_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Feedback::Correct).unwrap(), "\"correct\"");
        assert_eq!(Feedback::Incorrect.as_str(), "incorrect");
    }
}
