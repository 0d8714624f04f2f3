//! Pathogen Propagation Simulator - Core Engine
//!
//! Reproducible, fault-tolerant simulation of a synthetic pathogen
//! spreading across a network graph, with per-step target selection and
//! periodic mutation delegated to an external decision oracle.
//!
//! # Architecture
//!
//! - **models**: Domain types (Node, Network, Virus, snapshots)
//! - **rng**: Deterministic random number generation
//! - **metrics**: Append-only attempt records
//! - **propagation**: Infection/detection outcome model
//! - **mutation**: Mutation trigger and strategies
//! - **oracle**: Decision oracle contract, parsing, validation, fallback
//! - **orchestrator**: Main simulation loop and checkpoints
//!
//! # Critical Invariants
//!
//! 1. All randomness flows through each engine's own `RngManager`
//! 2. Oracle output is untrusted until validated against live topology
//! 3. A rejected step is a no-op: no state change, no counter advance
//! 4. History and metrics are append-only

// Module declarations
pub mod metrics;
pub mod models;
pub mod mutation;
pub mod oracle;
pub mod orchestrator;
pub mod propagation;
pub mod rng;

// Re-exports for convenience
pub use metrics::{AttemptRecord, MetricsCollector, MetricsSummary};
pub use models::{
    network::{Network, NetworkError},
    node::{Node, NodeStatus},
    snapshot::{NodeSnapshot, PopulationStats, StepSnapshot},
    virus::{Virus, VirusCharacteristics},
};
pub use mutation::{MutationDirective, MutationMode};
pub use oracle::{
    DecisionError, DecisionOracle, Message, OracleAdapter, OracleError, ParseError, Role,
    ScriptedOracle, SpreadDecision,
};
pub use orchestrator::{
    CheckpointError, EngineConfig, EngineError, RunOutcome, SimulationEngine, StateSnapshot,
    StepError, StepResult, StopReason,
};
pub use propagation::{AttackStrategy, AttemptReason, InfectionAttempt};
pub use rng::{RngManager, SeedSpec};
