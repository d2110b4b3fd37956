//! Reasoning Chain Types
//!
//! KHÔNG chứa logic - chỉ data structures và stage constants.

use serde::Serialize;

// ============================================================================
// REASONING STAGES
// ============================================================================

/// The five analysis stages, in fixed pipeline order.
///
/// Base confidences are design constants representing stage reliability,
/// not values computed from data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReasoningStage {
    InputClassification,
    PatternDetection,
    PolicyMapping,
    RiskAssessment,
    FinalDecision,
}

impl ReasoningStage {
    pub const ALL: [ReasoningStage; 5] = [
        ReasoningStage::InputClassification,
        ReasoningStage::PatternDetection,
        ReasoningStage::PolicyMapping,
        ReasoningStage::RiskAssessment,
        ReasoningStage::FinalDecision,
    ];

    /// Fixed stage number (kept even when earlier stages are omitted)
    pub fn number(&self) -> u8 {
        match self {
            ReasoningStage::InputClassification => 1,
            ReasoningStage::PatternDetection => 2,
            ReasoningStage::PolicyMapping => 3,
            ReasoningStage::RiskAssessment => 4,
            ReasoningStage::FinalDecision => 5,
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            ReasoningStage::InputClassification => "Input Classification",
            ReasoningStage::PatternDetection => "Pattern Detection",
            ReasoningStage::PolicyMapping => "Policy Mapping",
            ReasoningStage::RiskAssessment => "Risk Assessment",
            ReasoningStage::FinalDecision => "Final Decision",
        }
    }

    pub fn base_confidence(&self) -> f64 {
        match self {
            ReasoningStage::InputClassification => 0.95,
            ReasoningStage::PatternDetection => 0.88,
            ReasoningStage::PolicyMapping => 0.82,
            ReasoningStage::RiskAssessment => 0.90,
            ReasoningStage::FinalDecision => 0.85,
        }
    }
}

// ============================================================================
// REASONING STEP
// ============================================================================

/// One emitted step of the reasoning chain
#[derive(Debug, Clone, Serialize)]
pub struct ReasoningStep {
    pub step: u8,
    pub action: &'static str,
    pub finding: String,
    pub confidence: f64,
}

impl ReasoningStep {
    pub fn new(stage: ReasoningStage, finding: String) -> Self {
        Self {
            step: stage.number(),
            action: stage.action(),
            finding,
            confidence: stage.base_confidence(),
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
    fn test_stage_numbers_are_pipeline_order() {
        let numbers: Vec<u8> = ReasoningStage::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_stage_confidences() {
        assert_eq!(ReasoningStage::InputClassification.base_confidence(), 0.95);
        assert_eq!(ReasoningStage::PolicyMapping.base_confidence(), 0.82);
        assert_eq!(ReasoningStage::FinalDecision.base_confidence(), 0.85);
    }

    #[test]
    fn test_step_inherits_stage_constants() {
        let step = ReasoningStep::new(ReasoningStage::RiskAssessment, "risk".to_string());
        assert_eq!(step.step, 4);
        assert_eq!(step.action, "Risk Assessment");
        assert_eq!(step.confidence, 0.90);
    }
}
