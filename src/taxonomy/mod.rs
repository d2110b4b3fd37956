//! Pattern Taxonomy Module
//!
//! Static per-domain mapping of named signal categories to matching rules
//! and policy citations. This is the knowledge base every other engine
//! reads from.
//!
//! ## Structure
//! - `types.rs` - Domain, Severity, MatchRule, SignalCategory
//! - `rules.rs` - the actual per-domain tables (data only)

pub mod types;
pub mod rules;

pub use types::{Domain, MatchRule, Severity, SignalCategory};

pub use rules::{
    taxonomy,
    compiled_pattern,
    has_compliant_indicators,
    COMPLIANT_INDICATORS,
};
