//! Network model
//!
//! A collection of nodes plus their undirected adjacency. Topology
//! construction is external; this type only stores what it is given and
//! exposes the narrow read/write surface the engine and oracle adapter need.
//!
//! # Critical Invariants
//!
//! 1. **Deterministic iteration**: nodes iterate in insertion order. The
//!    fallback target search and snapshots depend on this; a plain HashMap
//!    walk would make seeded runs irreproducible.
//! 2. **Id uniqueness**: each node id appears exactly once
//! 3. **Edge symmetry**: `connect` always wires both directions

use crate::models::node::Node;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors from network mutation operations
#[derive(Debug, Error, PartialEq)]
pub enum NetworkError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),
}

/// The simulated network graph
///
/// Nodes are indexed by id for O(1) lookup; a companion order vector keeps
/// insertion order for deterministic iteration.
///
/// # Example
/// ```
/// use pathogen_simulator_core_rs::models::{Network, Node};
///
/// let mut network = Network::new("net-1", "star");
/// network.add_node(Node::new("0", "Hub", "mainframe", 0.6));
/// network.add_node(Node::new("1", "Leaf", "home_pc", 0.2));
/// network.connect("0", "1").unwrap();
///
/// assert_eq!(network.node_count(), 2);
/// assert!(network.get_node("0").unwrap().is_connected_to("1"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    /// Network identifier
    id: String,

    /// Topology label (informational; construction is external)
    topology: String,

    /// All nodes, indexed by id
    nodes: HashMap<String, Node>,

    /// Node ids in insertion order (deterministic iteration)
    node_order: Vec<String>,
}

impl Network {
    pub fn new(id: impl Into<String>, topology: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            topology: topology.into(),
            nodes: HashMap::new(),
            node_order: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn topology(&self) -> &str {
        &self.topology
    }

    pub fn node_count(&self) -> usize {
        self.node_order.len()
    }

    /// Insert a node. Replacing an existing id keeps its original position.
    pub fn add_node(&mut self, node: Node) {
        let id = node.id().to_string();
        if self.nodes.insert(id.clone(), node).is_none() {
            self.node_order.push(id);
        }
    }

    pub fn get_node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    pub fn get_node_mut(&mut self, node_id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(node_id)
    }

    /// Wire an undirected edge between two existing nodes.
    pub fn connect(&mut self, a: &str, b: &str) -> Result<(), NetworkError> {
        if !self.nodes.contains_key(a) {
            return Err(NetworkError::NodeNotFound(a.to_string()));
        }
        if !self.nodes.contains_key(b) {
            return Err(NetworkError::NodeNotFound(b.to_string()));
        }
        if let Some(node) = self.nodes.get_mut(a) {
            node.connect(b);
        }
        if let Some(node) = self.nodes.get_mut(b) {
            node.connect(a);
        }
        Ok(())
    }

    /// Iterate nodes in insertion order.
    pub fn nodes_in_order(&self) -> impl Iterator<Item = &Node> {
        self.node_order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Currently infected nodes, in insertion order.
    pub fn infected_nodes(&self) -> Vec<&Node> {
        self.nodes_in_order().filter(|n| n.is_infected()).collect()
    }

    /// Non-infected nodes, in insertion order.
    ///
    /// Quarantined nodes count as "healthy" here: they are not spreading.
    pub fn healthy_nodes(&self) -> Vec<&Node> {
        self.nodes_in_order().filter(|n| !n.is_infected()).collect()
    }

    /// Mean defense of non-infected nodes, rounded to 2 decimal places.
    ///
    /// Infected nodes contribute zero: a compromised host no longer defends
    /// the network.
    pub fn security_level(&self) -> f64 {
        if self.node_order.is_empty() {
            return 0.0;
        }
        let total: f64 = self
            .nodes_in_order()
            .map(|n| if n.is_infected() { 0.0 } else { n.security_level() })
            .sum();
        ((total / self.node_order.len() as f64) * 100.0).round() / 100.0
    }
}
