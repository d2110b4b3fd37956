//! Violation Detector
//!
//! CHỈ chứa logic detect - taxonomy tables live in `taxonomy::rules`.
//! Input: raw text + domain
//! Output: Vec<ViolationMatch> in taxonomy declaration order

use serde::Serialize;

use crate::taxonomy::{self, Domain, MatchRule, Severity, SignalCategory};

// ============================================================================
// VIOLATION MATCH
// ============================================================================

/// One matched signal category with its occurrence count
#[derive(Debug, Clone, Serialize)]
pub struct ViolationMatch {
    pub domain: Domain,
    pub category: &'static str,
    pub count: u32,
    pub severity: Severity,
    pub citation: &'static str,
}

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Case-normalize input for matching: lowercase, underscores folded to
/// spaces so identifiers like `store_forever` match phrase rules.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace('_', " ")
}

// ============================================================================
// DETECTION
// ============================================================================

/// Scan text against a domain's taxonomy.
///
/// Output order follows taxonomy declaration order, not occurrence order.
/// An empty taxonomy (General / unknown domain) yields no matches.
pub fn detect(text: &str, domain: Domain) -> Vec<ViolationMatch> {
    let normalized = normalize(text);
    let mut matches = Vec::new();

    for category in taxonomy::taxonomy(domain) {
        let count = apply_rule(category, &normalized);
        if count > 0 {
            matches.push(ViolationMatch {
                domain,
                category: category.name,
                count,
                severity: category.severity,
                citation: category.citation,
            });
        }
    }

    if !matches.is_empty() {
        log::debug!(
            "Detected {} signal categories for {} in {} chars",
            matches.len(),
            domain,
            text.len()
        );
    }

    matches
}

fn apply_rule(category: &SignalCategory, normalized: &str) -> u32 {
    match category.rule {
        MatchRule::Keywords(phrases) => count_phrases(normalized, phrases),

        MatchRule::Pattern(pattern) => match taxonomy::compiled_pattern(pattern) {
            Some(re) => re.find_iter(normalized).count() as u32,
            // Pattern failed to compile at table load; already logged there
            None => 0,
        },

        MatchRule::MissingSafeguard { triggers, safeguards } => {
            if safeguards.iter().any(|s| normalized.contains(s)) {
                0
            } else {
                count_phrases(normalized, triggers)
            }
        }

        MatchRule::CoOccurrence(phrases) => {
            if phrases.iter().all(|p| normalized.contains(p)) {
                1
            } else {
                0
            }
        }
    }
}

fn count_phrases(haystack: &str, phrases: &[&str]) -> u32 {
    phrases
        .iter()
        .map(|p| haystack.matches(p).count() as u32)
        .sum()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_without_consent_flags_missing_consent() {
        let matches = detect("We collect EMAIL addresses.", Domain::Gdpr);
        assert!(matches.iter().any(|m| m.category == "missing_consent" && m.count >= 1));
    }

    #[test]
    fn test_email_with_consent_not_flagged() {
        let matches = detect("We collect EMAIL addresses with explicit consent.", Domain::Gdpr);
        assert!(matches.iter().all(|m| m.category != "missing_consent"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let upper = detect("STORE FOREVER", Domain::Gdpr);
        let lower = detect("store forever", Domain::Gdpr);
        assert_eq!(upper.len(), lower.len());
        assert!(upper.iter().any(|m| m.category == "indefinite_retention"));
    }

    #[test]
    fn test_underscores_fold_to_spaces() {
        let matches = detect("send_to_third_party(user_email)", Domain::Gdpr);
        assert!(matches.iter().any(|m| m.category == "third_party_sharing"));
    }

    #[test]
    fn test_output_follows_declaration_order() {
        // third-party phrase occurs before the retention phrase in the input,
        // output still lists categories in taxonomy order
        let matches = detect("shared with a third party and kept forever", Domain::Gdpr);
        let names: Vec<&str> = matches.iter().map(|m| m.category).collect();
        assert_eq!(names, vec!["indefinite_retention", "third_party_sharing"]);
    }

    #[test]
    fn test_general_domain_yields_no_matches() {
        let matches = detect("email stored forever with a third party", Domain::General);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_occurrence_counting() {
        let matches = detect("user_email, backup_email, contact_email", Domain::Gdpr);
        let consent = matches.iter().find(|m| m.category == "missing_consent").unwrap();
        assert_eq!(consent.count, 3);
    }

    #[test]
    fn test_co_occurrence_counts_once() {
        let matches = detect("transfer records to a non-EU processor", Domain::Gdpr);
        let cross = matches.iter().find(|m| m.category == "cross_border_transfer").unwrap();
        assert_eq!(cross.count, 1);
    }

    #[test]
    fn test_hipaa_safeguard_suppresses_trigger() {
        let flagged = detect("patient records in the database", Domain::Hipaa);
        assert!(flagged.iter().any(|m| m.category == "unencrypted_phi"));

        let safe = detect("patient records are encrypted at rest", Domain::Hipaa);
        assert!(safe.iter().all(|m| m.category != "unencrypted_phi"));
    }

    #[test]
    fn test_ccpa_regex_pattern() {
        let matches = detect("we collect personal data from visitors", Domain::Ccpa);
        assert!(matches.iter().any(|m| m.category == "undisclosed_collection"));
    }
}
