//! Error Types
//!
//! Closed error taxonomy for the engine. Unknown domains are NOT an error:
//! they degrade to the empty taxonomy and the analysis proceeds.

use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the compliance engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// Input rejected before analysis (below the minimum length threshold)
    #[error("input too short: {length} chars (minimum {min})")]
    InvalidInput { length: usize, min: usize },

    /// History flush failed. In-memory state stays authoritative.
    #[error("failed to persist history: {0}")]
    Persistence(#[from] std::io::Error),

    /// History document could not be serialized
    #[error("failed to serialize history: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EngineError {
    /// True when the computed analysis result is still usable by the caller
    pub fn is_contained(&self) -> bool {
        matches!(self, EngineError::Persistence(_) | EngineError::Serialization(_))
    }
}
