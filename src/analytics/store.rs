//! Analytics Store
//!
//! Bounded, insertion-ordered history of classification outcomes.
//! Thread-safe: append, eviction and feedback updates happen under a single
//! mutex so FIFO eviction and index stability hold under concurrent callers.
//!
//! Persistence is a whole-document JSON rewrite on each mutation. Low write
//! volume makes that acceptable, and a repeated rewrite is idempotent.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::constants::DEFAULT_HISTORY_CAPACITY;
use crate::error::EngineResult;

use super::dashboard::{self, DashboardView, LearningInsights};
use super::record::{Feedback, HistoryRecord};

// ============================================================================
// STORE
// ============================================================================

/// Sole owner and writer of the history log
pub struct ComplianceAnalytics {
    history: Mutex<Vec<HistoryRecord>>,
    capacity: usize,
    persist_path: Option<PathBuf>,
}

impl ComplianceAnalytics {
    /// In-memory store with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            history: Mutex::new(Vec::new()),
            capacity: capacity.max(1),
            persist_path: None,
        }
    }

    /// Store backed by a JSON document, loading any existing history.
    ///
    /// A missing or unreadable document starts the store empty rather than
    /// failing: history is an aid, not a prerequisite.
    pub fn with_persistence(path: impl AsRef<Path>, capacity: usize) -> Self {
        let path = path.as_ref().to_path_buf();
        let history = load_history(&path);
        if !history.is_empty() {
            log::info!("Loaded {} history records from {:?}", history.len(), path);
        }
        Self {
            history: Mutex::new(history),
            capacity: capacity.max(1),
            persist_path: Some(path),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.history.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.lock().is_empty()
    }

    /// Clone of the retained history, oldest first
    pub fn snapshot(&self) -> Vec<HistoryRecord> {
        self.history.lock().clone()
    }

    // ------------------------------------------------------------------
    // MUTATIONS
    // ------------------------------------------------------------------

    /// Append a record, evicting oldest-first past capacity, then flush.
    ///
    /// On flush failure the in-memory log (record included) stays
    /// authoritative and the error is reported to the caller.
    pub fn record(&self, record: HistoryRecord) -> EngineResult<()> {
        let mut history = self.history.lock();
        history.push(record);
        if history.len() > self.capacity {
            let excess = history.len() - self.capacity;
            history.drain(0..excess);
        }
        self.flush_locked(&history)
    }

    /// Set feedback on the record at `index`.
    ///
    /// Out-of-range indexes are silently ignored (feedback is best-effort;
    /// index validity is the caller's responsibility). Returns whether the
    /// feedback was applied.
    pub fn record_feedback(&self, index: usize, feedback: Feedback) -> bool {
        let mut history = self.history.lock();
        match history.get_mut(index) {
            Some(record) => {
                record.feedback = Some(feedback);
                if let Err(e) = self.flush_locked(&history) {
                    log::error!("History flush after feedback failed: {}", e);
                }
                true
            }
            None => {
                log::debug!(
                    "Feedback index {} out of range ({} records), ignoring",
                    index,
                    history.len()
                );
                false
            }
        }
    }

    fn flush_locked(&self, history: &[HistoryRecord]) -> EngineResult<()> {
        if let Some(path) = &self.persist_path {
            let json = serde_json::to_string_pretty(history)?;
            std::fs::write(path, json)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // VIEWS
    // ------------------------------------------------------------------

    pub fn dashboard(&self) -> DashboardView {
        dashboard::build(&self.history.lock())
    }

    pub fn learning_insights(&self) -> LearningInsights {
        dashboard::learning_insights(&self.history.lock())
    }
}

impl Default for ComplianceAnalytics {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

// ============================================================================
// LOADING
// ============================================================================

fn load_history(path: &Path) -> Vec<HistoryRecord> {
    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(history) => history,
            Err(e) => {
                log::warn!("Corrupt history document {:?}: {} - starting empty", path, e);
                Vec::new()
            }
        },
        Err(_) => Vec::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
