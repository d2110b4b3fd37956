//! Cross-Domain Conflict Checker
//!
//! A small fixed set of co-occurrence rules that flag text implying two
//! regimes pull in opposite directions (e.g. indefinite retention vs the
//! right to erasure). Purely additive: conflicts never block or alter the
//! verdict.

use serde::Serialize;

use crate::detector;
use crate::taxonomy::{Domain, Severity};

// ============================================================================
// TYPES
// ============================================================================

/// One regime's obligation inside a detected conflict
#[derive(Debug, Clone, Serialize)]
pub struct DomainObligation {
    pub domain: Domain,
    pub obligation: String,
}

/// A detected cross-domain conflict
#[derive(Debug, Clone, Serialize)]
pub struct ConflictRecord {
    pub conflict: String,
    pub severity: Severity,
    pub obligations: Vec<DomainObligation>,
}

// ============================================================================
// RULE TABLE
// ============================================================================

struct ConflictRule {
    name: &'static str,
    severity: Severity,
    /// Any one of these phrases triggers the rule
    triggers: &'static [&'static str],
    obligations: &'static [(Domain, &'static str)],
}

static RULES: [ConflictRule; 3] = [
    ConflictRule {
        name: "Data retention conflict",
        severity: Severity::High,
        triggers: &["store indefinitely", "retain indefinitely", "keep forever", "never delete"],
        obligations: &[
            (Domain::Gdpr, "Violates Right to Erasure (Article 17)"),
            (Domain::Ccpa, "Requires disclosure of the retention period"),
        ],
    },
    ConflictRule {
        name: "Personal data classification",
        severity: Severity::Medium,
        triggers: &["collect ip address", "log ip address", "track ip address"],
        obligations: &[
            (Domain::Gdpr, "IP address is personal data under Article 4"),
            (Domain::Ccpa, "May require an opt-out mechanism"),
        ],
    },
    ConflictRule {
        name: "Retention obligation conflict",
        severity: Severity::High,
        triggers: &["delete medical record", "erase patient data", "purge patient record"],
        obligations: &[
            (Domain::Hipaa, "Records must be retained for six years"),
            (Domain::Gdpr, "Erasure request may apply under Article 17"),
        ],
    },
];

// ============================================================================
// DETECTION
// ============================================================================

/// Run every conflict rule over the normalized text, in detection order
pub fn find_conflicts(text: &str) -> Vec<ConflictRecord> {
    let normalized = detector::normalize(text);
    let mut conflicts = Vec::new();

    for rule in &RULES {
        if rule.triggers.iter().any(|t| normalized.contains(t)) {
            conflicts.push(ConflictRecord {
                conflict: rule.name.to_string(),
                severity: rule.severity,
                obligations: rule
                    .obligations
                    .iter()
                    .map(|(domain, obligation)| DomainObligation {
                        domain: *domain,
                        obligation: obligation.to_string(),
                    })
                    .collect(),
            });
        }
    }

    conflicts
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indefinite_retention_triggers_erasure_conflict() {
        let conflicts = find_conflicts("We store indefinitely all user records");
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].conflict, "Data retention conflict");
        assert_eq!(conflicts[0].severity, Severity::High);

        let domains: Vec<Domain> = conflicts[0].obligations.iter().map(|o| o.domain).collect();
        assert_eq!(domains, vec![Domain::Gdpr, Domain::Ccpa]);
    }

    #[test]
    fn test_normalized_matching() {
        // Underscored identifier still triggers after normalization
        let conflicts = find_conflicts("collect_ip_address(request)");
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].conflict, "Personal data classification");
    }

    #[test]
    fn test_hipaa_gdpr_retention_tension() {
        let conflicts = find_conflicts("handler to erase patient data on request");
        assert_eq!(conflicts.len(), 1);
        assert!(conflicts[0]
            .obligations
            .iter()
            .any(|o| o.domain == Domain::Hipaa && o.obligation.contains("six years")));
    }

    #[test]
    fn test_clean_text_yields_no_conflicts() {
        assert!(find_conflicts("store_with_expiry(encrypt(data), 30)").is_empty());
    }

    #[test]
    fn test_multiple_conflicts_in_detection_order() {
        let text = "keep forever and collect ip address";
        let conflicts = find_conflicts(text);
        assert_eq!(conflicts.len(), 2);
        assert_eq!(conflicts[0].conflict, "Data retention conflict");
        assert_eq!(conflicts[1].conflict, "Personal data classification");
    }
}
