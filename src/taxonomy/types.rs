//! Taxonomy Types
//!
//! Core types cho pattern taxonomy.
//! KHÔNG chứa logic - chỉ data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// DOMAINS
// ============================================================================

/// Regulatory domains - a fixed, closed set known at compile time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Gdpr,
    Hipaa,
    Sox,
    Ccpa,
    /// Catch-all domain with an empty taxonomy
    General,
}

impl Domain {
    pub const ALL: [Domain; 5] = [
        Domain::Gdpr,
        Domain::Hipaa,
        Domain::Sox,
        Domain::Ccpa,
        Domain::General,
    ];

    /// Parse a domain label from a request.
    ///
    /// Unknown labels fall back to `General` (empty taxonomy) and the
    /// analysis proceeds - permissive by design, never an error.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "gdpr" => Domain::Gdpr,
            "hipaa" => Domain::Hipaa,
            "sox" => Domain::Sox,
            "ccpa" => Domain::Ccpa,
            "general" => Domain::General,
            other => {
                log::debug!("Unknown domain '{}', using empty taxonomy", other);
                Domain::General
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Gdpr => "gdpr",
            Domain::Hipaa => "hipaa",
            Domain::Sox => "sox",
            Domain::Ccpa => "ccpa",
            Domain::General => "general",
        }
    }

    /// Regulation abbreviation used in findings and remediation text
    pub fn regulation(&self) -> &'static str {
        match self {
            Domain::Gdpr => "GDPR",
            Domain::Hipaa => "HIPAA",
            Domain::Sox => "SOX",
            Domain::Ccpa => "CCPA",
            Domain::General => "GENERAL",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SEVERITY
// ============================================================================

/// Severity class of a signal category (fixed total order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Severity::Low => 0,
            Severity::Medium => 1,
            Severity::High => 2,
            Severity::Critical => 3,
        }
    }

    pub fn is_high(&self) -> bool {
        matches!(self, Severity::High | Severity::Critical)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// MATCHING RULES
// ============================================================================

/// How a signal category matches against normalized input text
#[derive(Debug, Clone, Copy)]
pub enum MatchRule {
    /// Any phrase present; count = total occurrences across all phrases
    Keywords(&'static [&'static str]),

    /// Regular expression; count = number of non-overlapping matches
    Pattern(&'static str),

    /// Trigger phrases count only when no safeguard phrase appears anywhere
    /// in the text (e.g. personal data mentioned without any consent language)
    MissingSafeguard {
        triggers: &'static [&'static str],
        safeguards: &'static [&'static str],
    },

    /// All phrases present together; counts as a single occurrence
    CoOccurrence(&'static [&'static str]),
}

// ============================================================================
// SIGNAL CATEGORY
// ============================================================================

/// A named detectable pattern within a domain's taxonomy
#[derive(Debug, Clone, Copy)]
pub struct SignalCategory {
    /// Stable category name (snake_case, used in breakdowns)
    pub name: &'static str,
    pub rule: MatchRule,
    pub severity: Severity,
    /// Policy citation reported as evidence when the category matches
    pub citation: &'static str,
}

// ============================================================================
// TESTS
// ============================================================================
