//! Prompt rendering
//!
//! Renders simulation state into the fixed prompt shapes the oracle sees.
//! Templates are deliberately plain text assembled with `format!`; the
//! oracle contract does not promise the reply will honor them, which is why
//! parsing downstream is so defensive.

use crate::metrics::MetricsCollector;
use crate::models::network::Network;
use crate::models::virus::Virus;
use crate::oracle::Message;

/// Shared system prompt for both decision kinds.
const SYSTEM_PROMPT: &str = "You are the decision engine of a pathogen propagation simulation. \
You receive the current network topology and pathogen stats and must answer \
with a single JSON object and nothing else.";

/// Render the adjacency listing: one `- Node X: a, b` line per node.
fn adjacency_listing(network: &Network) -> String {
    let mut out = String::new();
    for node in network.nodes_in_order() {
        let neighbors = if node.connected_nodes().is_empty() {
            "(none)".to_string()
        } else {
            node.connected_nodes().join(", ")
        };
        out.push_str(&format!("- Node {}: {}\n", node.id(), neighbors));
    }
    out
}

fn id_listing(nodes: &[&crate::models::node::Node]) -> String {
    nodes
        .iter()
        .map(|n| n.id())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the spread-decision prompt for the current step.
pub fn decision_messages(
    step: usize,
    network: &Network,
    virus: &Virus,
    metrics: &MetricsCollector,
) -> Vec<Message> {
    let chars = virus.characteristics();
    let summary = metrics.summary();

    let user = format!(
        "Step {step}.\n\
         \n\
         Network adjacency:\n{adjacency}\n\
         Infected nodes: {infected}\n\
         Healthy nodes: {healthy}\n\
         \n\
         Pathogen \"{name}\" ({behavior}): attack_power={attack}, \
         spread_rate={spread}, stealth={stealth}, mutation_rate={mutation}.\n\
         Attempts so far: {attempts} ({successes} succeeded).\n\
         \n\
         Pick one infected source node and one connected, non-infected \
         target node to attack next. Reply with JSON: \
         {{\"source_node\": \"<id>\", \"target_node\": \"<id>\", \
         \"reasoning\": \"<short>\"}}",
        step = step,
        adjacency = adjacency_listing(network),
        infected = id_listing(&network.infected_nodes()),
        healthy = id_listing(&network.healthy_nodes()),
        name = virus.name(),
        behavior = chars.behavior,
        attack = chars.attack_power,
        spread = chars.spread_rate,
        stealth = chars.stealth,
        mutation = chars.mutation_rate,
        attempts = summary.total_attempts,
        successes = summary.successes,
    );

    vec![Message::system(SYSTEM_PROMPT), Message::user(user)]
}

/// Build the mutation-decision prompt.
pub fn mutation_messages(virus: &Virus, metrics: &MetricsCollector) -> Vec<Message> {
    let chars = virus.characteristics();
    let summary = metrics.summary();

    let recent_failures: Vec<String> = metrics
        .last_n(10)
        .iter()
        .filter(|a| !a.success)
        .map(|a| {
            format!(
                "- step {}: {} -> {} via {} (score {}, detected: {})",
                a.step, a.source, a.target, a.strategy, a.infection_score, a.detected
            )
        })
        .collect();

    let failures_block = if recent_failures.is_empty() {
        "(none)".to_string()
    } else {
        recent_failures.join("\n")
    };

    let user = format!(
        "Pathogen stats: attack_power={attack}, spread_rate={spread}, \
         stealth={stealth}, mutation_rate={mutation}, behavior={behavior}.\n\
         Totals: {attempts} attempts, {successes} successes, {failures} \
         failures, avg infection score {avg}.\n\
         Recent failures:\n{failures_block}\n\
         \n\
         Decide whether the pathogen should mutate and how. Reply with \
         JSON: {{\"mutate\": <bool>, \"type\": \"stat_boost\"|\"adaptation\", \
         \"target_parameter\": \"<name>\", \"change_value\": <number|string>}}",
        attack = chars.attack_power,
        spread = chars.spread_rate,
        stealth = chars.stealth,
        mutation = chars.mutation_rate,
        behavior = chars.behavior,
        attempts = summary.total_attempts,
        successes = summary.successes,
        failures = summary.failures,
        avg = summary.avg_infection_score,
        failures_block = failures_block,
    );

    vec![Message::system(SYSTEM_PROMPT), Message::user(user)]
}
