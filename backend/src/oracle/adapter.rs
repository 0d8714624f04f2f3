//! Oracle adapter
//!
//! Builds prompt context, invokes the oracle, parses the reply, and — the
//! important part — validates the proposed decision against live topology
//! before it reaches the engine. An oracle may hallucinate edges or pick an
//! already-infected target; the fallback search repairs what it can and
//! reports honest saturation when it cannot.

use crate::metrics::MetricsCollector;
use crate::models::network::Network;
use crate::models::virus::Virus;
use crate::mutation::MutationDirective;
use crate::oracle::parser::{parse_decision, parse_mutation, ParseError};
use crate::oracle::{prompt, DecisionOracle, OracleError};
use thiserror::Error;

/// Validated spread decision, safe to hand to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadDecision {
    pub source: String,
    pub target: String,
    pub reasoning: String,
}

/// All the ways a decision request can fail.
///
/// `NoValidTargets` is a legitimate saturation signal, not necessarily
/// fatal; the others indicate a broken oracle or reply.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DecisionError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("decision parse failed: {0}")]
    ParseFailed(#[from] ParseError),

    #[error("invalid source node: {source_id}")]
    InvalidSourceNode {
        source_id: String,
        raw_response: String,
    },

    #[error("no valid targets remain anywhere in the graph")]
    NoValidTargets { raw_response: String },
}

impl DecisionError {
    /// Stable machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            DecisionError::Oracle(_) => "oracle_invocation_failed",
            DecisionError::ParseFailed(_) => "decision_parse_failed",
            DecisionError::InvalidSourceNode { .. } => "invalid_source_node",
            DecisionError::NoValidTargets { .. } => "no_valid_targets",
        }
    }

    /// Raw oracle text, where one was received.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            DecisionError::Oracle(_) => None,
            DecisionError::ParseFailed(e) => Some(e.raw()),
            DecisionError::InvalidSourceNode { raw_response, .. } => Some(raw_response),
            DecisionError::NoValidTargets { raw_response } => Some(raw_response),
        }
    }
}

/// Wraps a `DecisionOracle` with prompt building, parsing, and topology
/// validation.
pub struct OracleAdapter<O: DecisionOracle> {
    oracle: O,
}

impl<O: DecisionOracle> OracleAdapter<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Ask the oracle which edge to attack next.
    ///
    /// The proposed target must be a neighbor of the proposed source and
    /// not already infected. When it is not, the fallback chain runs:
    /// 1. the source's first non-infected neighbor;
    /// 2. the first non-infected neighbor of any infected node, scanning in
    ///    network insertion order;
    /// 3. `NoValidTargets`.
    ///
    /// Fallback never fabricates an edge: every repaired decision is a real
    /// neighbor relation in the live graph.
    pub fn decide_spread(
        &mut self,
        step: usize,
        network: &Network,
        virus: &Virus,
        metrics: &MetricsCollector,
    ) -> Result<SpreadDecision, DecisionError> {
        let messages = prompt::decision_messages(step, network, virus, metrics);
        let raw = self.oracle.complete(&messages)?;
        let fields = parse_decision(&raw)?;

        let source_node = network.get_node(&fields.source).ok_or_else(|| {
            DecisionError::InvalidSourceNode {
                source_id: fields.source.clone(),
                raw_response: raw.clone(),
            }
        })?;

        let target_usable = source_node.is_connected_to(&fields.target)
            && network
                .get_node(&fields.target)
                .map(|n| !n.is_infected())
                .unwrap_or(false);

        if target_usable {
            return Ok(SpreadDecision {
                source: fields.source,
                target: fields.target,
                reasoning: fields.reasoning,
            });
        }

        // Fallback a: any non-infected neighbor of the proposed source
        for neighbor_id in source_node.connected_nodes() {
            if let Some(neighbor) = network.get_node(neighbor_id) {
                if !neighbor.is_infected() {
                    tracing::warn!(
                        step,
                        source = %fields.source,
                        proposed = %fields.target,
                        chosen = %neighbor_id,
                        "oracle target not connected; using neighbor fallback"
                    );
                    return Ok(SpreadDecision {
                        source: fields.source.clone(),
                        target: neighbor_id.clone(),
                        reasoning: format!(
                            "fallback: original target {} not connected; choosing neighbor {}",
                            fields.target, neighbor_id
                        ),
                    });
                }
            }
        }

        // Fallback b: first non-infected neighbor of any infected node
        for node in network.infected_nodes() {
            for neighbor_id in node.connected_nodes() {
                if let Some(neighbor) = network.get_node(neighbor_id) {
                    if !neighbor.is_infected() {
                        tracing::warn!(
                            step,
                            source = %node.id(),
                            chosen = %neighbor_id,
                            "oracle decision invalid; using graph-wide fallback"
                        );
                        return Ok(SpreadDecision {
                            source: node.id().to_string(),
                            target: neighbor_id.clone(),
                            reasoning: format!(
                                "fallback: original choice invalid; choosing {}->{}",
                                node.id(),
                                neighbor_id
                            ),
                        });
                    }
                }
            }
        }

        Err(DecisionError::NoValidTargets { raw_response: raw })
    }

    /// Ask the oracle whether and how the pathogen should mutate.
    pub fn decide_mutation(
        &mut self,
        virus: &Virus,
        metrics: &MetricsCollector,
    ) -> Result<MutationDirective, DecisionError> {
        let messages = prompt::mutation_messages(virus, metrics);
        let raw = self.oracle.complete(&messages)?;
        Ok(parse_mutation(&raw)?)
    }
}
