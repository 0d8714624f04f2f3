//! Mutation subsystem
//!
//! Two separable concerns:
//! - **Trigger**: a d20 roll against the virus's `mutation_rate` decides
//!   whether this step mutates at all. Rate 1 ⇒ 5%, rate 10 ⇒ 50%.
//! - **Strategy**: how new characteristics are computed once triggered.
//!   Selected once at engine construction via [`MutationMode`], not probed
//!   at runtime.
//!
//! Every strategy returns a *new* `VirusCharacteristics` value. On any
//! failure (oracle error, unparseable directive, `mutate: false`) the
//! fallback is an unmodified clone — never null, never the original
//! reference.

use crate::metrics::{AttemptRecord, MetricsSummary};
use crate::models::virus::{Virus, VirusCharacteristics};
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};

/// Mutation strategy selection, fixed at engine construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationMode {
    /// Trigger still rolls but characteristics are replaced by an identical
    /// clone; keeps the RNG draw sequence aligned across modes
    #[default]
    Disabled,
    /// Local heuristic: nudge the stat the recent attempt window suggests
    Heuristic,
    /// Ask the decision oracle for a mutation directive
    OracleDriven,
}

/// Context handed to mutation strategies.
#[derive(Debug, Clone)]
pub struct MutationContext<'a> {
    pub step: usize,
    pub summary: MetricsSummary,
    pub recent_attempts: &'a [AttemptRecord],
}

/// Structured mutation directive decoded from oracle output.
///
/// `kind` is `"stat_boost"` (numeric `change_value` applied to a stat) or
/// `"adaptation"` (string `change_value` appended to `target_hosts`).
/// Unknown kinds are ignored and fall back to a plain clone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationDirective {
    pub mutate: bool,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub target_parameter: Option<String>,
    #[serde(default)]
    pub change_value: Option<serde_json::Value>,
}

/// d20 trigger: mutate iff roll ≤ `mutation_rate`.
pub fn should_mutate(virus: &Virus, rng: &mut RngManager) -> bool {
    let roll = rng.randint(1, 20);
    roll as f64 <= virus.characteristics().mutation_rate
}

fn clamp_stat(value: f64) -> f64 {
    value.clamp(0.0, 10.0)
}

/// Heuristic strategy: when the recent window is failure-dominated the
/// pathogen gets sneakier, otherwise it gets stronger. Always a new value.
pub fn heuristic_mutate(
    chars: &VirusCharacteristics,
    context: &MutationContext<'_>,
) -> VirusCharacteristics {
    let mut next = chars.clone();

    let failures = context
        .recent_attempts
        .iter()
        .filter(|a| !a.success)
        .count();
    let failure_dominated = failures * 2 > context.recent_attempts.len();

    if failure_dominated {
        next.stealth = clamp_stat(next.stealth + 0.5);
    } else {
        next.attack_power = clamp_stat(next.attack_power + 0.5);
    }
    next
}

/// Apply an oracle directive to produce new characteristics.
///
/// Malformed pieces (wrong value type, unknown parameter or kind) degrade
/// to a plain clone rather than erroring; the oracle is untrusted.
pub fn apply_directive(
    chars: &VirusCharacteristics,
    directive: &MutationDirective,
) -> VirusCharacteristics {
    let mut next = chars.clone();

    let kind = directive.kind.as_deref().unwrap_or("");
    let param = directive.target_parameter.as_deref().unwrap_or("");

    match kind {
        "stat_boost" => {
            if let Some(delta) = directive.change_value.as_ref().and_then(|v| v.as_f64()) {
                match param {
                    "attack_power" => next.attack_power = clamp_stat(next.attack_power + delta),
                    "stealth" => next.stealth = clamp_stat(next.stealth + delta),
                    "spread_rate" => next.spread_rate = clamp_stat(next.spread_rate + delta),
                    _ => {}
                }
            }
        }
        "adaptation" => {
            if param == "target_hosts" {
                if let Some(host) = directive.change_value.as_ref().and_then(|v| v.as_str()) {
                    if !next.target_hosts.iter().any(|h| h == host) {
                        next.target_hosts.push(host.to_string());
                    }
                }
            }
        }
        _ => {}
    }

    next
}
