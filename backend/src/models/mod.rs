//! Domain models for the pathogen propagation simulator

pub mod network;
pub mod node;
pub mod snapshot;
pub mod virus;

// Re-exports
pub use network::{Network, NetworkError};
pub use node::{Node, NodeStatus};
pub use snapshot::{NodeSnapshot, PopulationStats, StepSnapshot};
pub use virus::{Virus, VirusCharacteristics};
