//! Node model
//!
//! Represents a single host in the simulated network. Each node has:
//! - A status lifecycle: healthy → infected → quarantined
//! - A security level in [0.0, 1.0] acting as its defense value
//! - An adjacency list of connected node ids
//!
//! # Critical Invariants
//!
//! 1. A node transitions healthy → infected at most once per run unless
//!    explicitly disinfected (not used by the main loop)
//! 2. Only the propagation model flips a node to infected; the engine only
//!    hardens defense
//! 3. Adjacency is append-only and duplicate-free

use serde::{Deserialize, Serialize};

/// Node status lifecycle states.
///
/// Serialized with stable snake_case names; these are the wire strings the
/// history sink and oracle prompts use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    Healthy,
    Infected,
    Quarantined,
}

impl NodeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Healthy => "healthy",
            NodeStatus::Infected => "infected",
            NodeStatus::Quarantined => "quarantined",
        }
    }
}

impl std::fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A host in the network
///
/// # Example
/// ```
/// use pathogen_simulator_core_rs::models::{Node, NodeStatus};
///
/// let mut node = Node::new("0", "Workstation-0", "corp_workstation", 0.4);
/// assert_eq!(node.status(), NodeStatus::Healthy);
///
/// node.connect("1");
/// node.infect();
/// assert!(node.is_infected());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique node identifier (e.g., "0", "7")
    id: String,

    /// Human-readable name (e.g., "CloudServer-3")
    name: String,

    /// Host type id (e.g., "home_pc", "iot_device", "mainframe")
    node_type: String,

    /// Defense value in [0.0, 1.0]; raised by detected failed attacks
    security_level: f64,

    /// Current lifecycle status
    status: NodeStatus,

    /// Ids of directly connected nodes (undirected edges, stored per side)
    connected_nodes: Vec<String>,
}

impl Node {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        node_type: impl Into<String>,
        security_level: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type: node_type.into(),
            security_level,
            status: NodeStatus::Healthy,
            connected_nodes: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node_type(&self) -> &str {
        &self.node_type
    }

    pub fn security_level(&self) -> f64 {
        self.security_level
    }

    pub fn status(&self) -> NodeStatus {
        self.status
    }

    pub fn connected_nodes(&self) -> &[String] {
        &self.connected_nodes
    }

    pub fn is_infected(&self) -> bool {
        self.status == NodeStatus::Infected
    }

    /// Whether `other` is directly connected to this node.
    pub fn is_connected_to(&self, other: &str) -> bool {
        self.connected_nodes.iter().any(|id| id == other)
    }

    /// Add an edge to `other_node_id`. Idempotent.
    pub fn connect(&mut self, other_node_id: impl Into<String>) {
        let other = other_node_id.into();
        if !self.connected_nodes.contains(&other) {
            self.connected_nodes.push(other);
        }
    }

    /// Flip a healthy node to infected. No-op for any other status.
    pub fn infect(&mut self) {
        if self.status == NodeStatus::Healthy {
            self.status = NodeStatus::Infected;
        }
    }

    /// Move an infected node into quarantine. No-op otherwise.
    pub fn quarantine(&mut self) {
        if self.status == NodeStatus::Infected {
            self.status = NodeStatus::Quarantined;
        }
    }

    /// Reset the node to healthy.
    pub fn disinfect(&mut self) {
        self.status = NodeStatus::Healthy;
    }

    /// Raise the defense value after a detected failed attack.
    ///
    /// Capped at 0.99 so no node ever becomes fully unassailable. Returns
    /// the applied boost, rounded to 2 decimal places for reporting.
    pub fn harden(&mut self, amount: f64) -> f64 {
        let old = self.security_level;
        self.security_level = (old + amount).min(0.99);
        ((self.security_level - old) * 100.0).round() / 100.0
    }
}
