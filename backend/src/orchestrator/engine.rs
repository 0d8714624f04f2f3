//! Simulation engine
//!
//! Main per-step loop integrating all components:
//! - Oracle decision (which edge to attack) with topology validation
//! - Propagation (infection/detection outcome)
//! - Defense hardening on detected failures
//! - Mutation trigger and strategy dispatch
//! - History snapshots (complete per-step state record)
//!
//! # Architecture
//!
//! The engine is externally paced: each call advances exactly one step and
//! steps never overlap. The oracle call inside a step is blocking; there is
//! no timeout or retry here. Cancellation is cooperative — callers stop
//! progress by not calling again.
//!
//! ```text
//! For each step:
//! 1. Ask the oracle adapter for a validated (source, target) pair
//!    (skipped on the manual path)
//! 2. Validate the pair against live state (ordered, fail-fast)
//! 3. Run the propagation model
//! 4. Harden target defense on a detected failure
//! 5. Record the attempt in metrics
//! 6. Roll the mutation trigger; mutate per the configured mode
//! 7. Snapshot state and advance the step counter
//! ```
//!
//! A failed validation or a failed decision means "no step occurred":
//! network state, history, and the step counter are untouched.
//!
//! # Example
//!
//! ```rust
//! use pathogen_simulator_core_rs::models::{Network, Node, Virus, VirusCharacteristics};
//! use pathogen_simulator_core_rs::orchestrator::{EngineConfig, SimulationEngine};
//! use pathogen_simulator_core_rs::propagation::AttackStrategy;
//!
//! let mut network = Network::new("net", "pair");
//! network.add_node(Node::new("0", "A", "home_pc", 0.0));
//! network.add_node(Node::new("1", "B", "home_pc", 0.0));
//! network.connect("0", "1").unwrap();
//! network.get_node_mut("0").unwrap().infect();
//!
//! let virus = Virus::new(
//!     "v",
//!     "Worm",
//!     "worm",
//!     VirusCharacteristics {
//!         attack_power: 10.0,
//!         spread_rate: 5.0,
//!         stealth: 5.0,
//!         mutation_rate: 1.0,
//!         target_hosts: vec!["home_pc".to_string()],
//!         behavior: "aggressive".to_string(),
//!     },
//! );
//!
//! let config = EngineConfig {
//!     max_steps: 10,
//!     seed: Some(42u64.into()),
//!     ..EngineConfig::default()
//! };
//! let mut engine = SimulationEngine::new(network, virus, config).unwrap();
//!
//! let result = engine.step_manual("0", "1", AttackStrategy::Exploit);
//! assert!(result.error.is_none());
//! assert_eq!(engine.current_step(), 1);
//! ```

use crate::metrics::{AttemptRecord, MetricsCollector};
use crate::models::network::Network;
use crate::models::snapshot::StepSnapshot;
use crate::models::virus::{Virus, VirusCharacteristics};
use crate::mutation::{self, MutationContext, MutationMode};
use crate::oracle::{DecisionError, DecisionOracle, OracleAdapter};
use crate::propagation::{self, AttackStrategy, InfectionAttempt};
use crate::rng::{RngManager, SeedSpec};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Defense boost applied to a target after a detected failed attack.
const DEFENSE_HARDENING: f64 = 0.15;

/// How many recent attempts feed the mutation context.
const MUTATION_WINDOW: usize = 10;

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete engine configuration.
///
/// `seed: Some(..)` selects seeded-deterministic mode; `None` selects
/// free-running stochastic mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Stop after this many validated steps
    pub max_steps: usize,

    /// Reproducibility mode: deterministic when set
    pub seed: Option<SeedSpec>,

    /// Mutation strategy, fixed for the whole run
    pub mutation_mode: MutationMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_steps: 50,
            seed: None,
            mutation_mode: MutationMode::default(),
        }
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Construction-time failures.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Why a step did not execute (or, for `Decision`, why no decision could
/// be obtained). Every variant leaves engine state untouched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StepError {
    #[error("no oracle attached and no explicit source/target provided")]
    NoOracleAttached,

    #[error("decision failed: {0}")]
    Decision(#[from] DecisionError),

    #[error("source node does not exist: {0}")]
    InvalidSourceNode(String),

    #[error("target node does not exist: {0}")]
    InvalidTargetNode(String),

    #[error("source node is not infected: {0}")]
    SourceNotInfected(String),

    #[error("target {target} is not connected to source {source_id}")]
    TargetNotConnected { source_id: String, target: String },

    #[error("target node is already infected: {0}")]
    TargetAlreadyInfected(String),
}

impl StepError {
    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            StepError::NoOracleAttached => "no_oracle_attached",
            StepError::Decision(e) => e.kind(),
            StepError::InvalidSourceNode(_) => "invalid_source_node",
            StepError::InvalidTargetNode(_) => "invalid_target_node",
            StepError::SourceNotInfected(_) => "source_not_infected",
            StepError::TargetNotConnected { .. } => "target_not_connected",
            StepError::TargetAlreadyInfected(_) => "target_already_infected",
        }
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Outcome of one `step` call.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Step counter value when the call was made
    pub step: usize,

    /// Attacking node (None when no decision was obtained)
    pub source_node: Option<String>,

    /// Attacked node (None when no decision was obtained)
    pub target_node: Option<String>,

    /// Propagation outcome; None when validation failed first
    pub attempt: Option<InfectionAttempt>,

    /// Whether the mutation trigger fired this step
    pub mutated: bool,

    /// Oracle reasoning text (empty on the manual path)
    pub reasoning: String,

    /// Why no step occurred; None on a validated step
    pub error: Option<StepError>,
}

impl StepResult {
    fn failed(step: usize, error: StepError) -> Self {
        Self {
            step,
            source_node: None,
            target_node: None,
            attempt: None,
            mutated: false,
            reasoning: String::new(),
            error: Some(error),
        }
    }
}

/// Why a run loop stopped, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    MaxStepsReached,
    NoInfectedNodes,
    AllInfected,
    NoPossibleSpread,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopReason::MaxStepsReached => "max_steps_reached",
            StopReason::NoInfectedNodes => "no_infected_nodes",
            StopReason::AllInfected => "all_infected",
            StopReason::NoPossibleSpread => "no_possible_spread",
        }
    }
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a `run` loop.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Stop condition that ended the run, when one did
    pub stop_reason: Option<StopReason>,

    /// Validated steps executed by this `run` call
    pub steps_executed: usize,

    /// Decision/oracle error that halted the loop, when one did
    pub halted_on: Option<StepError>,
}

// ============================================================================
// Engine
// ============================================================================

type BoxedOracle = Box<dyn DecisionOracle>;

/// The simulation engine. Constructed once per run; owns the network, the
/// virus, the RNG stream, metrics, and history.
pub struct SimulationEngine {
    network: Network,
    virus: Virus,
    config: EngineConfig,
    current_step: usize,
    rng: RngManager,
    metrics: MetricsCollector,
    history: Vec<StepSnapshot>,
    oracle: Option<OracleAdapter<BoxedOracle>>,
}

impl std::fmt::Debug for SimulationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationEngine")
            .field("network", &self.network)
            .field("virus", &self.virus)
            .field("config", &self.config)
            .field("current_step", &self.current_step)
            .field("rng", &self.rng)
            .field("metrics", &self.metrics)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

impl SimulationEngine {
    /// Create an engine over an already-built network and virus.
    ///
    /// # Errors
    /// `EngineError::InvalidConfig` when `max_steps` is zero, the network
    /// is empty, or the virus has no infectable host types.
    pub fn new(network: Network, virus: Virus, config: EngineConfig) -> Result<Self, EngineError> {
        if config.max_steps == 0 {
            return Err(EngineError::InvalidConfig(
                "max_steps must be at least 1".to_string(),
            ));
        }
        if network.node_count() == 0 {
            return Err(EngineError::InvalidConfig(
                "network has no nodes".to_string(),
            ));
        }
        if virus.characteristics().target_hosts.is_empty() {
            return Err(EngineError::InvalidConfig(
                "virus has no target host types".to_string(),
            ));
        }

        let rng = match &config.seed {
            Some(spec) => RngManager::from_seed(spec),
            None => RngManager::from_entropy(),
        };

        Ok(Self {
            network,
            virus,
            config,
            current_step: 0,
            rng,
            metrics: MetricsCollector::new(),
            history: Vec::new(),
            oracle: None,
        })
    }

    /// Attach the decision oracle. Must happen before oracle-driven steps;
    /// any heavyweight oracle initialization belongs before this point.
    pub fn attach_oracle(&mut self, oracle: BoxedOracle) {
        self.oracle = Some(OracleAdapter::new(oracle));
    }

    pub fn has_oracle(&self) -> bool {
        self.oracle.is_some()
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn virus(&self) -> &Virus {
        &self.virus
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn metrics(&self) -> &MetricsCollector {
        &self.metrics
    }

    pub fn history(&self) -> &[StepSnapshot] {
        &self.history
    }

    pub fn rng_state(&self) -> u64 {
        self.rng.get_state()
    }

    /// Infect one rng-chosen healthy node before step 0.
    ///
    /// Consumes exactly one `choice` draw, so seeded runs place the same
    /// patient zero every time. Returns the chosen id, or None when no
    /// healthy node exists.
    pub fn seed_patient_zero(&mut self) -> Option<String> {
        let healthy_ids: Vec<String> = self
            .network
            .nodes_in_order()
            .filter(|n| n.status() == crate::models::node::NodeStatus::Healthy)
            .map(|n| n.id().to_string())
            .collect();

        let chosen = self.rng.choice(&healthy_ids)?.clone();
        if let Some(node) = self.network.get_node_mut(&chosen) {
            node.infect();
        }
        tracing::info!(node = %chosen, "patient zero seeded");
        Some(chosen)
    }

    /// Execute one oracle-driven step.
    ///
    /// A decision or validation failure returns a structured error result
    /// without mutating network state, advancing the counter, or appending
    /// to history. The oracle path always attacks with the default
    /// `exploit` strategy; strategy experimentation goes through
    /// [`SimulationEngine::step_manual`].
    pub fn step(&mut self) -> StepResult {
        let step = self.current_step;

        let adapter = match self.oracle.as_mut() {
            Some(adapter) => adapter,
            None => return StepResult::failed(step, StepError::NoOracleAttached),
        };

        match adapter.decide_spread(step, &self.network, &self.virus, &self.metrics) {
            Ok(decision) => {
                let mut result = self.execute_primitive(
                    &decision.source,
                    &decision.target,
                    AttackStrategy::default(),
                );
                result.reasoning = decision.reasoning;
                result
            }
            Err(error) => {
                tracing::warn!(step, kind = error.kind(), "oracle decision failed");
                StepResult::failed(step, StepError::Decision(error))
            }
        }
    }

    /// Execute one manually-specified step (test/scenario path); the
    /// oracle is not consulted.
    pub fn step_manual(
        &mut self,
        source_id: &str,
        target_id: &str,
        strategy: AttackStrategy,
    ) -> StepResult {
        self.execute_primitive(source_id, target_id, strategy)
    }

    /// Validate and execute the primitive step. Validation order is fixed
    /// and fail-fast; nothing before its completion touches the RNG, so a
    /// rejected step leaves the seeded stream untouched.
    fn execute_primitive(
        &mut self,
        source_id: &str,
        target_id: &str,
        strategy: AttackStrategy,
    ) -> StepResult {
        let step = self.current_step;
        let mut result = StepResult {
            step,
            source_node: Some(source_id.to_string()),
            target_node: Some(target_id.to_string()),
            attempt: None,
            mutated: false,
            reasoning: String::new(),
            error: None,
        };

        // ========= Validations =========

        let (source_infected, source_connected) = match self.network.get_node(source_id) {
            Some(source) => (source.is_infected(), source.is_connected_to(target_id)),
            None => {
                result.error = Some(StepError::InvalidSourceNode(source_id.to_string()));
                return result;
            }
        };

        let target_infected = match self.network.get_node(target_id) {
            Some(target) => target.is_infected(),
            None => {
                result.error = Some(StepError::InvalidTargetNode(target_id.to_string()));
                return result;
            }
        };

        if !source_infected {
            result.error = Some(StepError::SourceNotInfected(source_id.to_string()));
            return result;
        }

        if !source_connected {
            result.error = Some(StepError::TargetNotConnected {
                source_id: source_id.to_string(),
                target: target_id.to_string(),
            });
            return result;
        }

        if target_infected {
            result.error = Some(StepError::TargetAlreadyInfected(target_id.to_string()));
            return result;
        }

        // ========= Execution =========

        let Some(target) = self.network.get_node_mut(target_id) else {
            // existence was validated above
            result.error = Some(StepError::InvalidTargetNode(target_id.to_string()));
            return result;
        };

        let attempt = propagation::attempt_infection(&self.virus, target, strategy, &mut self.rng);

        let defense_boost = if !attempt.success && attempt.detected {
            Some(target.harden(DEFENSE_HARDENING))
        } else {
            None
        };

        self.metrics.record(AttemptRecord::from_attempt(
            step,
            source_id,
            target_id,
            strategy,
            &attempt,
            defense_boost,
        ));
        result.attempt = Some(attempt);

        // ========= Mutation =========

        if mutation::should_mutate(&self.virus, &mut self.rng) {
            self.run_mutation();
            result.mutated = true;
        }

        // Always snapshot and advance for a validated step, even when the
        // infection attempt itself failed.
        self.history
            .push(StepSnapshot::capture(self.current_step, &self.network));
        self.current_step += 1;

        tracing::debug!(
            step,
            source = %source_id,
            target = %target_id,
            success = attempt.success,
            detected = attempt.detected,
            mutated = result.mutated,
            "step executed"
        );

        result
    }

    /// Compute and install new virus characteristics per the configured
    /// mode. Every path replaces the characteristics value; failure paths
    /// install an identical clone.
    fn run_mutation(&mut self) {
        let new_chars: VirusCharacteristics = match self.config.mutation_mode {
            MutationMode::Disabled => self.virus.characteristics().clone(),
            MutationMode::Heuristic => {
                let recent: Vec<AttemptRecord> = self.metrics.last_n(MUTATION_WINDOW).to_vec();
                let context = MutationContext {
                    step: self.current_step,
                    summary: self.metrics.summary(),
                    recent_attempts: &recent,
                };
                mutation::heuristic_mutate(self.virus.characteristics(), &context)
            }
            MutationMode::OracleDriven => match self.oracle.as_mut() {
                Some(adapter) => match adapter.decide_mutation(&self.virus, &self.metrics) {
                    Ok(directive) if directive.mutate => {
                        mutation::apply_directive(self.virus.characteristics(), &directive)
                    }
                    Ok(_) => self.virus.characteristics().clone(),
                    Err(error) => {
                        tracing::warn!(
                            kind = error.kind(),
                            "mutation decision failed; keeping characteristics"
                        );
                        self.virus.characteristics().clone()
                    }
                },
                None => self.virus.characteristics().clone(),
            },
        };

        self.virus.apply_mutation(new_chars);
    }

    /// Install previously captured state. Checkpoint restore only; the
    /// config-hash check lives in `checkpoint.rs`.
    pub(crate) fn restore_state(
        &mut self,
        current_step: usize,
        rng_state: u64,
        network: Network,
        virus: Virus,
        history: Vec<StepSnapshot>,
        metrics: MetricsCollector,
    ) {
        self.current_step = current_step;
        self.rng.set_state(rng_state);
        self.network = network;
        self.virus = virus;
        self.history = history;
        self.metrics = metrics;
    }

    /// Evaluate stop conditions in priority order. Pure; consumes nothing.
    pub fn check_stop(&self) -> Option<StopReason> {
        if self.current_step >= self.config.max_steps {
            return Some(StopReason::MaxStepsReached);
        }

        let infected = self.network.infected_nodes();
        if infected.is_empty() {
            return Some(StopReason::NoInfectedNodes);
        }

        if self.network.healthy_nodes().is_empty() {
            return Some(StopReason::AllInfected);
        }

        let spread_possible = infected.iter().any(|node| {
            node.connected_nodes().iter().any(|neighbor_id| {
                self.network
                    .get_node(neighbor_id)
                    .map(|n| !n.is_infected())
                    .unwrap_or(false)
            })
        });
        if !spread_possible {
            return Some(StopReason::NoPossibleSpread);
        }

        None
    }

    /// Drive oracle-driven steps until a stop condition or a decision
    /// error. Takes the step-0 baseline snapshot when history is empty.
    pub fn run(&mut self) -> RunOutcome {
        if self.history.is_empty() {
            self.history
                .push(StepSnapshot::capture(self.current_step, &self.network));
        }

        let mut steps_executed = 0;
        loop {
            if let Some(reason) = self.check_stop() {
                tracing::info!(reason = %reason, step = self.current_step, "simulation stopped");
                return RunOutcome {
                    stop_reason: Some(reason),
                    steps_executed,
                    halted_on: None,
                };
            }

            let result = self.step();
            match result.error {
                Some(error) => {
                    tracing::warn!(code = error.code(), "run halted on step error");
                    return RunOutcome {
                        stop_reason: None,
                        steps_executed,
                        halted_on: Some(error),
                    };
                }
                None => steps_executed += 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::node::Node;

    fn virus(mutation_rate: f64) -> Virus {
        Virus::new(
            "v",
            "V",
            "worm",
            VirusCharacteristics {
                attack_power: 10.0,
                spread_rate: 5.0,
                stealth: 5.0,
                mutation_rate,
                target_hosts: vec!["home_pc".to_string()],
                behavior: "aggressive".to_string(),
            },
        )
    }

    fn pair_network() -> Network {
        let mut network = Network::new("n", "pair");
        network.add_node(Node::new("0", "A", "home_pc", 0.0));
        network.add_node(Node::new("1", "B", "home_pc", 0.0));
        network.connect("0", "1").unwrap();
        network.get_node_mut("0").unwrap().infect();
        network
    }

    fn seeded_config() -> EngineConfig {
        EngineConfig {
            max_steps: 10,
            seed: Some(42u64.into()),
            mutation_mode: MutationMode::Disabled,
        }
    }

    #[test]
    fn test_new_rejects_zero_max_steps() {
        let config = EngineConfig {
            max_steps: 0,
            ..seeded_config()
        };
        let err = SimulationEngine::new(pair_network(), virus(1.0), config).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn test_new_rejects_empty_network() {
        let err =
            SimulationEngine::new(Network::new("n", "empty"), virus(1.0), seeded_config())
                .unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn test_validation_errors_do_not_advance() {
        let mut engine =
            SimulationEngine::new(pair_network(), virus(1.0), seeded_config()).unwrap();
        let rng_before = engine.rng_state();

        let cases = [
            ("zzz", "1", "invalid_source_node"),
            ("0", "zzz", "invalid_target_node"),
            ("1", "0", "source_not_infected"),
            ("0", "0", "target_not_connected"),
        ];
        for (source, target, code) in cases {
            let result = engine.step_manual(source, target, AttackStrategy::Exploit);
            assert_eq!(result.error.as_ref().map(|e| e.code()), Some(code));
            assert_eq!(engine.current_step(), 0, "no step may occur on {}", code);
            assert!(engine.history().is_empty());
        }
        assert_eq!(
            engine.rng_state(),
            rng_before,
            "rejected steps must not consume randomness"
        );
    }

    #[test]
    fn test_already_infected_target_rejected() {
        let mut network = pair_network();
        network.get_node_mut("1").unwrap().infect();
        let mut engine = SimulationEngine::new(network, virus(1.0), seeded_config()).unwrap();

        let result = engine.step_manual("0", "1", AttackStrategy::Exploit);
        assert_eq!(
            result.error.as_ref().map(|e| e.code()),
            Some("target_already_infected")
        );
    }

    #[test]
    fn test_validated_step_always_advances() {
        // attack 10 vs defense 0 ⇒ guaranteed success
        let mut engine =
            SimulationEngine::new(pair_network(), virus(1.0), seeded_config()).unwrap();

        let result = engine.step_manual("0", "1", AttackStrategy::Exploit);
        assert!(result.error.is_none());
        assert!(result.attempt.unwrap().success);
        assert_eq!(engine.current_step(), 1);
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.metrics().summary().total_attempts, 1);
        assert!(engine.network().get_node("1").unwrap().is_infected());
    }

    #[test]
    fn test_step_without_oracle_is_structured_error() {
        let mut engine =
            SimulationEngine::new(pair_network(), virus(1.0), seeded_config()).unwrap();
        let result = engine.step();
        assert_eq!(
            result.error.as_ref().map(|e| e.code()),
            Some("no_oracle_attached")
        );
        assert_eq!(engine.current_step(), 0);
    }

    #[test]
    fn test_check_stop_priority_order() {
        // max_steps wins even over an un-spreadable graph
        let mut network = Network::new("n", "single");
        network.add_node(Node::new("0", "A", "home_pc", 0.0));
        network.get_node_mut("0").unwrap().infect();

        let config = EngineConfig {
            max_steps: 1,
            ..seeded_config()
        };
        let mut engine = SimulationEngine::new(network, virus(1.0), config).unwrap();
        assert_eq!(engine.check_stop(), Some(StopReason::AllInfected));

        engine.current_step = 1;
        assert_eq!(engine.check_stop(), Some(StopReason::MaxStepsReached));
    }

    #[test]
    fn test_check_stop_no_infected() {
        let mut network = pair_network();
        network.get_node_mut("0").unwrap().disinfect();
        let engine = SimulationEngine::new(network, virus(1.0), seeded_config()).unwrap();
        assert_eq!(engine.check_stop(), Some(StopReason::NoInfectedNodes));
    }

    #[test]
    fn test_check_stop_no_possible_spread() {
        // Two disconnected nodes: 0 infected, 1 healthy but unreachable
        let mut network = Network::new("n", "islands");
        network.add_node(Node::new("0", "A", "home_pc", 0.0));
        network.add_node(Node::new("1", "B", "home_pc", 0.0));
        network.get_node_mut("0").unwrap().infect();

        let engine = SimulationEngine::new(network, virus(1.0), seeded_config()).unwrap();
        assert_eq!(engine.check_stop(), Some(StopReason::NoPossibleSpread));
    }

    #[test]
    fn test_seed_patient_zero_consumes_one_draw() {
        let mut network = Network::new("n", "trio");
        network.add_node(Node::new("0", "A", "home_pc", 0.0));
        network.add_node(Node::new("1", "B", "home_pc", 0.0));
        network.add_node(Node::new("2", "C", "home_pc", 0.0));

        let mut engine =
            SimulationEngine::new(network.clone(), virus(1.0), seeded_config()).unwrap();
        let chosen_a = engine.seed_patient_zero().unwrap();

        let mut engine_b = SimulationEngine::new(network, virus(1.0), seeded_config()).unwrap();
        let chosen_b = engine_b.seed_patient_zero().unwrap();

        assert_eq!(chosen_a, chosen_b, "same seed must pick same patient zero");
        assert!(engine.network().get_node(&chosen_a).unwrap().is_infected());
    }
}
