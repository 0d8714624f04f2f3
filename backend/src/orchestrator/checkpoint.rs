//! Checkpoint - Save/Restore Simulation State
//!
//! Serializes complete engine state for pause/resume. The core performs no
//! I/O; callers decide where the serialized snapshot goes.
//!
//! # Critical Invariants
//!
//! - **Determinism**: restoring a snapshot and continuing produces the same
//!   results as an uninterrupted run (RNG state is part of the snapshot)
//! - **Config matching**: a snapshot can only be restored into an engine
//!   built from the same config, verified by SHA-256 fingerprint
//! - **History integrity**: history is carried whole; it is append-only and
//!   never trimmed on restore

use crate::metrics::MetricsCollector;
use crate::models::network::Network;
use crate::models::snapshot::StepSnapshot;
use crate::models::virus::Virus;
use crate::orchestrator::engine::{EngineConfig, SimulationEngine};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Checkpoint failures.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckpointError {
    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("config hash mismatch: snapshot {snapshot}, engine {engine}")]
    ConfigMismatch { snapshot: String, engine: String },
}

/// Complete engine state snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Step counter at capture time
    pub current_step: usize,

    /// RNG state at capture time (CRITICAL for determinism)
    pub rng_state: u64,

    /// Full network state (nodes, statuses, adjacency)
    pub network: Network,

    /// Virus including its current characteristics value
    pub virus: Virus,

    /// Per-step history captured so far
    pub history: Vec<StepSnapshot>,

    /// All attempt records
    pub metrics: MetricsCollector,

    /// SHA-256 fingerprint of the engine config (for validation)
    pub config_hash: String,
}

/// SHA-256 fingerprint of a config's canonical JSON form.
///
/// `EngineConfig` contains no maps, so plain serde field order is already
/// canonical.
pub fn compute_config_hash(config: &EngineConfig) -> Result<String, CheckpointError> {
    let json = serde_json::to_string(config)
        .map_err(|e| CheckpointError::Serialization(format!("config serialization: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

impl StateSnapshot {
    /// Capture the engine's complete state.
    pub fn capture(engine: &SimulationEngine) -> Result<Self, CheckpointError> {
        Ok(Self {
            current_step: engine.current_step(),
            rng_state: engine.rng_state(),
            network: engine.network().clone(),
            virus: engine.virus().clone(),
            history: engine.history().to_vec(),
            metrics: engine.metrics().clone(),
            config_hash: compute_config_hash(engine.config())?,
        })
    }
}

impl SimulationEngine {
    /// Restore state from a snapshot captured under the same config.
    ///
    /// The attached oracle (if any) is kept; only simulation state is
    /// replaced.
    pub fn restore(&mut self, snapshot: &StateSnapshot) -> Result<(), CheckpointError> {
        let engine_hash = compute_config_hash(self.config())?;
        if engine_hash != snapshot.config_hash {
            return Err(CheckpointError::ConfigMismatch {
                snapshot: snapshot.config_hash.clone(),
                engine: engine_hash,
            });
        }

        self.restore_state(
            snapshot.current_step,
            snapshot.rng_state,
            snapshot.network.clone(),
            snapshot.virus.clone(),
            snapshot.history.clone(),
            snapshot.metrics.clone(),
        );
        Ok(())
    }
}
