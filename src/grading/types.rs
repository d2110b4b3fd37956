//! Grading Types
//!
//! Core types cho grading results.
//! KHÔNG chứa logic - chỉ data structures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// COMPLIANCE STATUS
// ============================================================================

/// Tri-state risk flag, derived from the violation count - NOT from the
/// penalty-weighted grade. The two answer different questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplianceStatus {
    Green,
    Yellow,
    Red,
}

impl ComplianceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Green => "GREEN",
            ComplianceStatus::Yellow => "YELLOW",
            ComplianceStatus::Red => "RED",
        }
    }

    /// Fixed score used for the dashboard trend
    pub fn trend_score(&self) -> u32 {
        match self {
            ComplianceStatus::Green => 100,
            ComplianceStatus::Yellow => 50,
            ComplianceStatus::Red => 0,
        }
    }

    /// GREEN is the only fully compliant status; YELLOW means needs review
    pub fn needs_attention(&self) -> bool {
        matches!(self, ComplianceStatus::Yellow | ComplianceStatus::Red)
    }

    pub fn color(&self) -> &'static str {
        match self {
            ComplianceStatus::Green => "#10b981",
            ComplianceStatus::Yellow => "#f59e0b",
            ComplianceStatus::Red => "#ef4444",
        }
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// LETTER GRADE
// ============================================================================

/// Penalty-weighted letter grade (A+ best, F worst)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            LetterGrade::APlus => "Perfect compliance - No violations detected",
            LetterGrade::A => "Excellent compliance - Minor issues only",
            LetterGrade::B => "Good compliance - Some improvements needed",
            LetterGrade::C => "Fair compliance - Multiple issues require attention",
            LetterGrade::D => "Poor compliance - Significant violations present",
            LetterGrade::F => "Failing compliance - Critical violations require immediate action",
        }
    }

    pub fn is_passing(&self) -> bool {
        !matches!(self, LetterGrade::D | LetterGrade::F)
    }
}

impl std::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// COMPLIANCE VERDICT
// ============================================================================

/// Complete grading result for one analysis
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceVerdict {
    pub status: ComplianceStatus,
    pub violation_summary: String,
    pub letter_grade: LetterGrade,
    /// 0.0..=100.0, one decimal
    pub percentage_score: f64,
    pub penalty_points: u32,
    /// Number of matched signal categories (drives the status)
    pub total_violations: u32,
    /// Category name (or hint bucket) -> occurrence count
    pub violation_breakdown: BTreeMap<String, u32>,
    /// Policy citations, taxonomy declaration order, hints appended last
    pub evidence: Vec<String>,
    /// One remediation line per matched category
    pub remediation: Vec<String>,
    pub grade_explanation: String,
}

// ============================================================================
// TESTS
// ============================================================================
