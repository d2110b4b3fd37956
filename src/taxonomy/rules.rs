//! Taxonomy Tables
//!
//! Per-domain signal category definitions.
//! KHÔNG chứa logic detect - chỉ tables và constants.
//!
//! Declaration order is load-bearing: detector output follows it, so tests
//! stay deterministic no matter where a phrase occurs in the input.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{Domain, MatchRule, Severity, SignalCategory};

// ============================================================================
// GDPR
// ============================================================================

static GDPR: [SignalCategory; 4] = [
    SignalCategory {
        name: "missing_consent",
        rule: MatchRule::MissingSafeguard {
            triggers: &["email", "phone number", "ip address", "user id", "personal data"],
            safeguards: &["consent", "permission", "opt in", "opt-in", "agree"],
        },
        severity: Severity::Critical,
        citation: "GDPR Article 6 - Lawful Basis for Processing",
    },
    SignalCategory {
        name: "indefinite_retention",
        rule: MatchRule::Keywords(&["forever", "permanent", "indefinitely", "never delete"]),
        severity: Severity::High,
        citation: "GDPR Article 5 - Storage Limitation",
    },
    SignalCategory {
        name: "third_party_sharing",
        rule: MatchRule::Keywords(&["third party", "sell data", "share with partners", "data broker"]),
        severity: Severity::High,
        citation: "GDPR Article 13 - Information to be Provided",
    },
    SignalCategory {
        name: "cross_border_transfer",
        rule: MatchRule::CoOccurrence(&["transfer", "non-eu"]),
        severity: Severity::High,
        citation: "GDPR Chapter V - International Transfers",
    },
];

// ============================================================================
// HIPAA
// ============================================================================

static HIPAA: [SignalCategory; 3] = [
    SignalCategory {
        name: "unencrypted_phi",
        rule: MatchRule::MissingSafeguard {
            triggers: &["patient", "medical record", "phi", "diagnosis", "health record"],
            safeguards: &["encrypt", "hashed", "anonymized", "de-identified"],
        },
        severity: Severity::Critical,
        citation: "HIPAA Security Rule - Encryption Standards",
    },
    SignalCategory {
        name: "missing_access_controls",
        rule: MatchRule::MissingSafeguard {
            triggers: &["patient", "medical record", "phi"],
            safeguards: &["access control", "role-based", "authorized", "authentication"],
        },
        severity: Severity::High,
        citation: "HIPAA Security Rule - Access Control",
    },
    SignalCategory {
        name: "unlogged_disclosure",
        rule: MatchRule::MissingSafeguard {
            triggers: &["disclose patient", "share patient"],
            safeguards: &["audit", "accounting of disclosures"],
        },
        severity: Severity::Medium,
        citation: "HIPAA Privacy Rule - Accounting of Disclosures",
    },
];

// ============================================================================
// SOX
// ============================================================================

static SOX: [SignalCategory; 3] = [
    SignalCategory {
        name: "unauthorized_admin_access",
        rule: MatchRule::CoOccurrence(&["admin access", "no approval"]),
        severity: Severity::High,
        citation: "SOX Section 404 - Internal Controls",
    },
    SignalCategory {
        name: "unverified_financials",
        rule: MatchRule::MissingSafeguard {
            triggers: &["revenue", "financial report", "earnings"],
            safeguards: &["verify", "validate", "approve", "audit"],
        },
        severity: Severity::Medium,
        citation: "SOX Section 302 - Financial Disclosure",
    },
    SignalCategory {
        name: "missing_documentation",
        rule: MatchRule::MissingSafeguard {
            triggers: &["accounting", "journal entry"],
            safeguards: &["document", "record", "trail"],
        },
        severity: Severity::Medium,
        citation: "SOX Section 409 - Real-Time Disclosure",
    },
];

// ============================================================================
// CCPA
// ============================================================================

static CCPA: [SignalCategory; 2] = [
    SignalCategory {
        name: "sale_without_opt_out",
        rule: MatchRule::MissingSafeguard {
            triggers: &["sell data", "sale of personal information", "sell personal information"],
            safeguards: &["opt out", "opt-out", "do not sell"],
        },
        severity: Severity::Medium,
        citation: "CCPA Section 1798.120 - Right to Opt-Out",
    },
    SignalCategory {
        name: "undisclosed_collection",
        rule: MatchRule::Pattern(r"collect\w*\s+(personal|consumer)\s+(data|information)"),
        severity: Severity::Medium,
        citation: "CCPA Section 1798.100 - Right to Know",
    },
];

// ============================================================================
// LOOKUP
// ============================================================================

/// Signal categories for a domain, in declaration order.
///
/// `General` is intentionally empty - it is also the fallback for unknown
/// domain labels.
pub fn taxonomy(domain: Domain) -> &'static [SignalCategory] {
    match domain {
        Domain::Gdpr => &GDPR,
        Domain::Hipaa => &HIPAA,
        Domain::Sox => &SOX,
        Domain::Ccpa => &CCPA,
        Domain::General => &[],
    }
}

// ============================================================================
// COMPLIANT INDICATORS
// ============================================================================

/// Phrases that mark a text as actively compliant.
///
/// With zero violations, presence of any of these turns the status GREEN;
/// absence leaves it YELLOW (needs review).
pub const COMPLIANT_INDICATORS: &[&str] = &[
    "consent",
    "encrypt",
    "opt in",
    "opt-in",
    "opt out",
    "opt-out",
    "anonymize",
    "anonymized",
    "access control",
    "audit trail",
    "expiry",
    "retention period",
    "authorized",
];

/// Check a normalized text for compliant-practice phrases
pub fn has_compliant_indicators(normalized: &str) -> bool {
    COMPLIANT_INDICATORS.iter().any(|kw| normalized.contains(kw))
}

// ============================================================================
// COMPILED PATTERNS
// ============================================================================

static PATTERNS: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for domain in Domain::ALL {
        for category in taxonomy(domain) {
            if let MatchRule::Pattern(pattern) = category.rule {
                match Regex::new(pattern) {
                    Ok(re) => {
                        map.insert(pattern, re);
                    }
                    Err(e) => {
                        log::error!("Invalid taxonomy pattern '{}': {}", pattern, e);
                    }
                }
            }
        }
    }
    map
});

/// Look up the compiled regex for a `MatchRule::Pattern` string
pub fn compiled_pattern(pattern: &'static str) -> Option<&'static Regex> {
    PATTERNS.get(pattern)
}

// ============================================================================
// TESTS
// ============================================================================
