//! xorshift64* random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for simulation purposes.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce exact simulation)
//! - Testing (verify behavior)
//! - Research (validate results)
//!
//! # Reproducibility modes
//!
//! A simulation either runs seeded-deterministic (`RngManager::from_seed`)
//! or free-running stochastic (`RngManager::from_entropy`). Once seeded with
//! seed S, the exact sequence of outcomes across every consumer (propagation
//! jitter, mutation die roll, patient-zero selection) is reproducible
//! call-for-call, provided call order is identical.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seed specification for a simulation run.
///
/// Text seeds are accepted for operator convenience ("outbreak-42" is easier
/// to share than a u64). A text seed that parses as an unsigned integer is
/// used numerically; anything else is hashed to a stable 64-bit value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedSpec {
    /// Numeric seed, used as-is.
    Integer(u64),
    /// Free-form text seed, reduced to a u64 via SHA-256.
    Text(String),
}

impl SeedSpec {
    /// Reduce this spec to the u64 actually fed into the generator.
    pub fn to_seed(&self) -> u64 {
        match self {
            SeedSpec::Integer(n) => *n,
            SeedSpec::Text(s) => match s.parse::<u64>() {
                Ok(n) => n,
                Err(_) => {
                    let digest = Sha256::digest(s.as_bytes());
                    let mut bytes = [0u8; 8];
                    bytes.copy_from_slice(&digest[..8]);
                    u64::from_be_bytes(bytes)
                }
            },
        }
    }
}

impl From<u64> for SeedSpec {
    fn from(n: u64) -> Self {
        SeedSpec::Integer(n)
    }
}

impl From<&str> for SeedSpec {
    fn from(s: &str) -> Self {
        SeedSpec::Text(s.to_string())
    }
}

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use pathogen_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let roll = rng.next_f64();          // [0.0, 1.0)
/// let jitter = rng.uniform(-0.05, 0.05);
/// assert!(roll >= 0.0 && roll < 1.0);
/// assert!(jitter >= -0.05 && jitter < 0.05);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// # Example
    /// ```
    /// use pathogen_simulator_core_rs::RngManager;
    ///
    /// let rng = RngManager::new(12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        // Ensure seed is never zero (xorshift requirement)
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create a new RNG from a seed specification (integer or text).
    pub fn from_seed(spec: &SeedSpec) -> Self {
        Self::new(spec.to_seed())
    }

    /// Create a free-running RNG seeded from system time.
    ///
    /// Used for stochastic mode, where runs are intentionally not
    /// reproducible.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9E3779B97F4A7C15);
        Self::new(nanos)
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate random f64 in range [0.0, 1.0)
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Convert to [0.0, 1.0) using the top 53 bits
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Generate random f64 in range [a, b)
    ///
    /// # Panics
    /// Panics if a > b
    pub fn uniform(&mut self, a: f64, b: f64) -> f64 {
        assert!(a <= b, "uniform bounds out of order");
        a + self.next_f64() * (b - a)
    }

    /// Generate random value in range [min, max)
    ///
    /// # Panics
    /// Panics if min >= max
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next();
        let range_size = (max - min) as u64;
        min + (value % range_size) as i64
    }

    /// Generate random integer in range [a, b], both endpoints inclusive
    ///
    /// # Panics
    /// Panics if a > b
    pub fn randint(&mut self, a: i64, b: i64) -> i64 {
        assert!(a <= b, "randint bounds out of order");
        self.range(a, b + 1)
    }

    /// Pick a random element from a slice; `None` when the slice is empty.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.range(0, items.len() as i64) as usize;
        Some(&items[idx])
    }

    /// Shuffle a slice in place (Fisher–Yates).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.range(0, (i + 1) as i64) as usize;
            items.swap(i, j);
        }
    }

    /// Get current RNG state (for checkpointing/replay)
    pub fn get_state(&self) -> u64 {
        self.state
    }

    /// Restore RNG state captured via [`RngManager::get_state`].
    pub fn set_state(&mut self, state: u64) {
        self.state = if state == 0 { 1 } else { state };
    }
}
