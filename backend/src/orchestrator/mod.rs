//! Orchestrator - per-step simulation loop
//!
//! Implements the decide → validate → propagate → mutate → snapshot →
//! stop-check cycle. See `engine.rs` for full implementation and
//! `checkpoint.rs` for pause/resume snapshots.

pub mod checkpoint;
pub mod engine;

// Re-export main types for convenience
pub use checkpoint::{compute_config_hash, CheckpointError, StateSnapshot};
pub use engine::{
    EngineConfig, EngineError, RunOutcome, SimulationEngine, StepError, StepResult, StopReason,
};
