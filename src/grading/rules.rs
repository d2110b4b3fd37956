//! Grading Rules & Thresholds
//!
//! Penalty weights and the grade ladder.
//! KHÔNG chứa logic grade - chỉ constants và config.

use serde::{Deserialize, Serialize};

use crate::taxonomy::Severity;
use super::types::LetterGrade;

// ============================================================================
// PENALTY WEIGHTS (defaults)
// ============================================================================

/// Penalty per CRITICAL occurrence
pub const CRITICAL_WEIGHT: u32 = 25;

/// Penalty per HIGH occurrence
pub const HIGH_WEIGHT: u32 = 15;

/// Penalty per MEDIUM occurrence
pub const MEDIUM_WEIGHT: u32 = 8;

/// Penalty per LOW occurrence
pub const LOW_WEIGHT: u32 = 3;

// ============================================================================
// GRADE LADDER (inclusive upper bounds, ascending)
// ============================================================================

/// Penalty 0 = A+; these bound A through D, anything above is F
pub const GRADE_A_MAX: u32 = 5;
pub const GRADE_B_MAX: u32 = 15;
pub const GRADE_C_MAX: u32 = 30;
pub const GRADE_D_MAX: u32 = 50;

// ============================================================================
// STATUS THRESHOLD
// ============================================================================

/// Matched categories at or above this = RED
pub const RED_VIOLATION_MIN: u32 = 3;

// ============================================================================
// CONFIGURABLE WEIGHTS
// ============================================================================

/// Penalty weights per severity class (configurable).
///
/// Must stay strictly decreasing across CRITICAL > HIGH > MEDIUM > LOW to
/// preserve grade monotonicity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingWeights {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl Default for GradingWeights {
    fn default() -> Self {
        Self {
            critical: CRITICAL_WEIGHT,
            high: HIGH_WEIGHT,
            medium: MEDIUM_WEIGHT,
            low: LOW_WEIGHT,
        }
    }
}

impl GradingWeights {
    /// Lenient profile - softer penalties, same ordering
    pub fn lenient() -> Self {
        Self {
            critical: 15,
            high: 10,
            medium: 5,
            low: 2,
        }
    }

    pub fn weight(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }

    /// Monotonicity check: higher severity always costs strictly more
    pub fn is_strictly_decreasing(&self) -> bool {
        self.critical > self.high && self.high > self.medium && self.medium > self.low
    }
}

// ============================================================================
// GRADE LADDER FUNCTION
// ============================================================================

/// Pure penalty -> grade mapping (monotonic: more penalty never grades better)
pub fn penalty_to_grade(penalty: u32) -> LetterGrade {
    if penalty == 0 {
        LetterGrade::APlus
    } else if penalty <= GRADE_A_MAX {
        LetterGrade::A
    } else if penalty <= GRADE_B_MAX {
        LetterGrade::B
    } else if penalty <= GRADE_C_MAX {
        LetterGrade::C
    } else if penalty <= GRADE_D_MAX {
        LetterGrade::D
    } else {
        LetterGrade::F
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_strictly_decreasing() {
        assert!(GradingWeights::default().is_strictly_decreasing());
        assert!(GradingWeights::lenient().is_strictly_decreasing());
    }

    #[test]
    fn test_ladder_boundaries() {
        assert_eq!(penalty_to_grade(0), LetterGrade::APlus);
        assert_eq!(penalty_to_grade(1), LetterGrade::A);
        assert_eq!(penalty_to_grade(5), LetterGrade::A);
        assert_eq!(penalty_to_grade(6), LetterGrade::B);
        assert_eq!(penalty_to_grade(15), LetterGrade::B);
        assert_eq!(penalty_to_grade(16), LetterGrade::C);
        assert_eq!(penalty_to_grade(30), LetterGrade::C);
        assert_eq!(penalty_to_grade(50), LetterGrade::D);
        assert_eq!(penalty_to_grade(51), LetterGrade::F);
    }

    #[test]
    fn test_ladder_is_monotonic() {
        let mut last = penalty_to_grade(0);
        for penalty in 1..120 {
            let grade = penalty_to_grade(penalty);
            assert!(grade >= last, "grade improved as penalty rose at {}", penalty);
            last = grade;
        }
    }
}
