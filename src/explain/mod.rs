//! Reasoning Chain Module
//!
//! Produces the ordered, human-readable explanation of how a verdict was
//! reached: a fixed five-stage linear pipeline where each stage carries a
//! preassigned base confidence and decides for itself whether to emit.
//!
//! ## Structure
//! - `types.rs` - ReasoningStage (the state machine), ReasoningStep
//! - `engine.rs` - chain generation + confidence aggregation

pub mod types;
pub mod engine;

pub use types::{ReasoningStage, ReasoningStep};
pub use engine::{explain, overall_confidence, risk_label};
