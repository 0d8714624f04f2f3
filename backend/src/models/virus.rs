//! Virus model
//!
//! The pathogen's characteristics are an immutable value: a mutation builds
//! a brand-new `VirusCharacteristics` and swaps it in wholesale. Strategies
//! never edit the current value in place, which keeps the clone-fallback
//! path safe when an oracle mutation fails halfway.

use serde::{Deserialize, Serialize};

/// Pathogen stats. All numeric stats live on a 0–10 scale except
/// `mutation_rate`, which is a 1–10 value interpreted as a d20 threshold
/// (rate R ⇒ mutation probability R/20 per step).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirusCharacteristics {
    /// Raw offensive strength (0–10)
    pub attack_power: f64,

    /// Propagation aggressiveness (0–10); informational for the oracle
    pub spread_rate: f64,

    /// Evasion capability (0–10)
    pub stealth: f64,

    /// d20 threshold for mutation triggering (1–10)
    pub mutation_rate: f64,

    /// Node types this pathogen is able to infect
    pub target_hosts: Vec<String>,

    /// Behavioral profile label (e.g., "aggressive", "stealthy")
    pub behavior: String,
}

/// The simulated pathogen
///
/// # Example
/// ```
/// use pathogen_simulator_core_rs::models::{Virus, VirusCharacteristics};
///
/// let virus = Virus::new(
///     "v-1",
///     "Crimson Worm",
///     "worm",
///     VirusCharacteristics {
///         attack_power: 7.0,
///         spread_rate: 6.0,
///         stealth: 4.0,
///         mutation_rate: 3.0,
///         target_hosts: vec!["home_pc".to_string()],
///         behavior: "aggressive".to_string(),
///     },
/// );
/// assert!(virus.can_infect("home_pc"));
/// assert!(!virus.can_infect("mainframe"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Virus {
    id: String,
    name: String,
    virus_type: String,
    characteristics: VirusCharacteristics,
    /// Named exploit this pathogen abuses (informational, fed to prompts)
    exploit: String,
    /// Impact description (informational)
    impact: String,
}

impl Virus {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        virus_type: impl Into<String>,
        characteristics: VirusCharacteristics,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            virus_type: virus_type.into(),
            characteristics,
            exploit: String::new(),
            impact: String::new(),
        }
    }

    pub fn with_exploit(mut self, exploit: impl Into<String>) -> Self {
        self.exploit = exploit.into();
        self
    }

    pub fn with_impact(mut self, impact: impl Into<String>) -> Self {
        self.impact = impact.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn virus_type(&self) -> &str {
        &self.virus_type
    }

    pub fn characteristics(&self) -> &VirusCharacteristics {
        &self.characteristics
    }

    pub fn exploit(&self) -> &str {
        &self.exploit
    }

    pub fn impact(&self) -> &str {
        &self.impact
    }

    pub fn can_infect(&self, node_type: &str) -> bool {
        self.characteristics
            .target_hosts
            .iter()
            .any(|t| t == node_type)
    }

    /// Replace the characteristics value with a mutated one.
    pub fn apply_mutation(&mut self, new_characteristics: VirusCharacteristics) {
        self.characteristics = new_characteristics;
    }
}
