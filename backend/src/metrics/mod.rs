//! Attempt metrics
//!
//! Append-only record of every infection attempt, consumed by the mutation
//! context (recent failures inform how the pathogen adapts) and by external
//! observers. Records are never rewritten.

use crate::propagation::{AttackStrategy, AttemptReason, InfectionAttempt};
use serde::{Deserialize, Serialize};

/// One recorded infection attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub step: usize,
    pub source: String,
    pub target: String,
    pub strategy: AttackStrategy,
    pub success: bool,
    pub detected: bool,
    pub reason: AttemptReason,
    pub infection_score: f64,
    /// Defense boost applied to the target after a detected failure (2dp)
    pub defense_boost: Option<f64>,
}

impl AttemptRecord {
    pub fn from_attempt(
        step: usize,
        source: &str,
        target: &str,
        strategy: AttackStrategy,
        attempt: &InfectionAttempt,
        defense_boost: Option<f64>,
    ) -> Self {
        Self {
            step,
            source: source.to_string(),
            target: target.to_string(),
            strategy,
            success: attempt.success,
            detected: attempt.detected,
            reason: attempt.reason,
            infection_score: attempt.infection_score,
            defense_boost,
        }
    }
}

/// Aggregate view over all recorded attempts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_attempts: usize,
    pub successes: usize,
    pub failures: usize,
    /// Mean infection score across all attempts, rounded to 4dp
    pub avg_infection_score: f64,
}

/// Append-only collector of attempt records.
///
/// # Example
/// ```
/// use pathogen_simulator_core_rs::metrics::MetricsCollector;
///
/// let metrics = MetricsCollector::new();
/// let summary = metrics.summary();
/// assert_eq!(summary.total_attempts, 0);
/// assert_eq!(summary.avg_infection_score, 0.0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsCollector {
    attempts: Vec<AttemptRecord>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: AttemptRecord) {
        self.attempts.push(record);
    }

    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    /// The most recent `n` records (fewer when the log is shorter).
    pub fn last_n(&self, n: usize) -> &[AttemptRecord] {
        let start = self.attempts.len().saturating_sub(n);
        &self.attempts[start..]
    }

    pub fn summary(&self) -> MetricsSummary {
        let total = self.attempts.len();
        let successes = self.attempts.iter().filter(|a| a.success).count();
        let avg = if total > 0 {
            let sum: f64 = self.attempts.iter().map(|a| a.infection_score).sum();
            ((sum / total as f64) * 10_000.0).round() / 10_000.0
        } else {
            0.0
        };

        MetricsSummary {
            total_attempts: total,
            successes,
            failures: total - successes,
            avg_infection_score: avg,
        }
    }
}
