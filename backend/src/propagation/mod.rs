//! Propagation model
//!
//! Computes the outcome of a single infection attempt from virus stats, the
//! target's defense, and the chosen attack strategy. This is the only place
//! in the crate permitted to flip a node to infected; callers apply
//! secondary effects such as defense hardening.
//!
//! # Strategy branches
//!
//! - **brute_force**: raw attack, ignores stealth. Noisy (60% detection on
//!   failure).
//! - **phishing**: stealth-driven, only viable against human-operated node
//!   types. Quiet (10% detection) but a hard failure against automated
//!   hosts.
//! - **exploit** (default): balanced attack-vs-defense with a small jitter.
//!
//! # RNG discipline
//!
//! Draw order is fixed: optional jitter draw (exploit only), success roll,
//! then an independent detection roll only on failure. Precondition
//! short-circuits consume zero draws. Seeded determinism depends on this
//! ordering; do not reorder.

use crate::models::node::{Node, NodeStatus};
use crate::models::virus::Virus;
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Node types considered human-operated, the only valid phishing targets.
pub const HUMAN_OPERATED_TYPES: [&str; 2] = ["home_pc", "corp_workstation"];

/// Residual success probability modeling unpatchable risk. Does not apply
/// to phishing.
const SUCCESS_FLOOR: f64 = 0.05;

/// Attack strategy selecting the propagation formula branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackStrategy {
    BruteForce,
    Phishing,
    #[default]
    Exploit,
}

impl AttackStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttackStrategy::BruteForce => "brute_force",
            AttackStrategy::Phishing => "phishing",
            AttackStrategy::Exploit => "exploit",
        }
    }
}

impl std::fmt::Display for AttackStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttackStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brute_force" => Ok(AttackStrategy::BruteForce),
            "phishing" => Ok(AttackStrategy::Phishing),
            "exploit" => Ok(AttackStrategy::Exploit),
            _ => Err(()),
        }
    }
}

/// Machine-readable outcome classification for an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptReason {
    /// Target was not healthy; nothing to attack
    NodeNotHealthy,
    /// Virus cannot infect the target's host type (and probing it is loud)
    IncompatibleHost,
    /// Phishing attempted against a non-human-operated host
    PhishingLogicErrorNoHuman,
    /// Roll failed
    StrategyFailed,
    /// Roll succeeded; target is now infected
    StrategySucceeded,
}

impl AttemptReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptReason::NodeNotHealthy => "node_not_healthy",
            AttemptReason::IncompatibleHost => "incompatible_host",
            AttemptReason::PhishingLogicErrorNoHuman => "phishing_logic_error_no_human",
            AttemptReason::StrategyFailed => "strategy_failed",
            AttemptReason::StrategySucceeded => "strategy_success",
        }
    }
}

/// Result of a single infection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfectionAttempt {
    pub success: bool,
    pub detected: bool,
    pub reason: AttemptReason,
    /// Pre-roll infection chance, rounded to 2dp; kept even on failure for
    /// metrics and mutation context
    pub infection_score: f64,
}

impl InfectionAttempt {
    fn short_circuit(reason: AttemptReason, detected: bool) -> Self {
        Self {
            success: false,
            detected,
            reason,
            infection_score: 0.0,
        }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Attempt to infect `target` with `virus` using `strategy`.
///
/// Preconditions short-circuit without consuming RNG draws:
/// - a non-healthy target is not attackable (`node_not_healthy`)
/// - an incompatible host type fails *and is detected* — attacking a host
///   the pathogen cannot run on is itself a loud event (`incompatible_host`)
/// - phishing a non-human host is a hard logic failure
///   (`phishing_logic_error_no_human`, detected)
///
/// Success flips the node to infected here. On failure an independent
/// detection roll decides whether defenders noticed.
pub fn attempt_infection(
    virus: &Virus,
    target: &mut Node,
    strategy: AttackStrategy,
    rng: &mut RngManager,
) -> InfectionAttempt {
    if target.status() != NodeStatus::Healthy {
        return InfectionAttempt::short_circuit(AttemptReason::NodeNotHealthy, false);
    }

    if !virus.can_infect(target.node_type()) {
        return InfectionAttempt::short_circuit(AttemptReason::IncompatibleHost, true);
    }

    // Normalize 0–10 stats to [0, 1]
    let atk = clamp01(virus.characteristics().attack_power / 10.0);
    let stl = clamp01(virus.characteristics().stealth / 10.0);
    let defense = target.security_level();

    let (infection_chance, detection_chance, floor_applies) = match strategy {
        AttackStrategy::BruteForce => (0.1 + 1.5 * atk - defense, 0.6, true),
        AttackStrategy::Phishing => {
            if !HUMAN_OPERATED_TYPES.contains(&target.node_type()) {
                return InfectionAttempt::short_circuit(
                    AttemptReason::PhishingLogicErrorNoHuman,
                    true,
                );
            }
            (0.2 + 1.4 * stl - defense, 0.1, false)
        }
        AttackStrategy::Exploit => {
            let jitter = rng.uniform(-0.05, 0.05);
            (0.25 + (atk - defense) + jitter, 0.3, true)
        }
    };

    let roll = rng.next_f64();
    let success = (infection_chance > 0.0 && roll < infection_chance)
        || (floor_applies && roll < SUCCESS_FLOOR);

    let mut detected = false;
    if success {
        target.infect();
    } else {
        let det_roll = rng.next_f64();
        detected = det_roll < detection_chance;
    }

    InfectionAttempt {
        success,
        detected,
        reason: if success {
            AttemptReason::StrategySucceeded
        } else {
            AttemptReason::StrategyFailed
        },
        infection_score: round2(infection_chance),
    }
}
