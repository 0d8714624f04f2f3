//! Per-step history snapshots
//!
//! The engine appends one `StepSnapshot` to its history per validated step
//! (plus a step-0 baseline when a run starts). History is append-only and is
//! never rewritten; an external repository may persist it, the core performs
//! no I/O.
//!
//! Snapshots are plain serde values so the determinism property can be
//! checked by comparing serialized history byte-for-byte.

use crate::models::network::Network;
use crate::models::node::NodeStatus;
use serde::{Deserialize, Serialize};

/// Aggregate node counts at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationStats {
    pub infected: usize,
    pub quarantined: usize,
    pub healthy: usize,
}

/// Minimal per-node state captured in a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub id: String,
    pub status: NodeStatus,
    pub node_type: String,
}

/// Full state snapshot for one step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepSnapshot {
    pub step: usize,
    pub stats: PopulationStats,
    pub nodes: Vec<NodeSnapshot>,
}

impl StepSnapshot {
    /// Capture the network's current node states, tagged with `step`.
    pub fn capture(step: usize, network: &Network) -> Self {
        let mut stats = PopulationStats {
            infected: 0,
            quarantined: 0,
            healthy: 0,
        };
        let mut nodes = Vec::with_capacity(network.node_count());

        for node in network.nodes_in_order() {
            match node.status() {
                NodeStatus::Infected => stats.infected += 1,
                NodeStatus::Quarantined => stats.quarantined += 1,
                NodeStatus::Healthy => stats.healthy += 1,
            }
            nodes.push(NodeSnapshot {
                id: node.id().to_string(),
                status: node.status(),
                node_type: node.node_type().to_string(),
            });
        }

        Self { step, stats, nodes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::node::Node;

    #[test]
    fn test_capture_counts_statuses() {
        let mut network = Network::new("t", "line");
        network.add_node(Node::new("a", "A", "home_pc", 0.2));
        network.add_node(Node::new("b", "B", "home_pc", 0.2));
        network.add_node(Node::new("c", "C", "home_pc", 0.2));
        network.get_node_mut("a").unwrap().infect();
        network.get_node_mut("b").unwrap().infect();
        network.get_node_mut("b").unwrap().quarantine();

        let snap = StepSnapshot::capture(3, &network);
        assert_eq!(snap.step, 3);
        assert_eq!(
            snap.stats,
            PopulationStats {
                infected: 1,
                quarantined: 1,
                healthy: 1
            }
        );
        assert_eq!(snap.nodes.len(), 3);
        assert_eq!(snap.nodes[0].id, "a");
        assert_eq!(snap.nodes[0].status, NodeStatus::Infected);
    }
}
