//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change a default (history capacity, input threshold), only edit this file.

/// Maximum number of history records retained by the analytics aggregator.
///
/// Oldest records are evicted first once the log grows past this bound.
pub const DEFAULT_HISTORY_CAPACITY: usize = 1000;

/// Minimum input length (characters) accepted for analysis
pub const DEFAULT_MIN_INPUT_LEN: usize = 5;

/// Trailing window for the compliance-score trend (days)
pub const TREND_WINDOW_DAYS: i64 = 30;

/// Number of violation summaries shown on the dashboard
pub const TOP_VIOLATIONS_LIMIT: usize = 5;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Compliance Core";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get history capacity from environment or use default
pub fn get_history_capacity() -> usize {
    std::env::var("COMPLIANCE_HISTORY_CAPACITY")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_HISTORY_CAPACITY)
}

/// Get minimum input length from environment or use default
pub fn get_min_input_len() -> usize {
    std::env::var("COMPLIANCE_MIN_INPUT_LEN")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MIN_INPUT_LEN)
}
