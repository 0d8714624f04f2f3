//! Scripted oracle stub
//!
//! A deterministic `DecisionOracle` that replays canned responses. Shipped
//! in all builds so integration tests and offline demos can drive the full
//! decision path without a model backend.

use crate::oracle::{DecisionOracle, Message, OracleError};
use std::collections::VecDeque;

/// Replays a fixed script of responses, or repeats a single response
/// forever.
///
/// # Example
/// ```
/// use pathogen_simulator_core_rs::oracle::{DecisionOracle, ScriptedOracle};
///
/// let mut oracle = ScriptedOracle::new(vec![
///     r#"{"source_node": "0", "target_node": "1"}"#.to_string(),
/// ]);
/// let text = oracle.complete(&[]).unwrap();
/// assert!(text.contains("source_node"));
/// assert!(oracle.complete(&[]).is_err()); // script exhausted
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedOracle {
    responses: VecDeque<String>,
    repeat: Option<String>,
}

impl ScriptedOracle {
    /// Play `responses` in order, then fail with an invocation error.
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses: responses.into(),
            repeat: None,
        }
    }

    /// Return the same response on every call, never exhausting.
    pub fn repeating(response: impl Into<String>) -> Self {
        Self {
            responses: VecDeque::new(),
            repeat: Some(response.into()),
        }
    }

    /// Append one more scripted response.
    pub fn push(&mut self, response: impl Into<String>) {
        self.responses.push_back(response.into());
    }

    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl DecisionOracle for ScriptedOracle {
    fn complete(&mut self, _messages: &[Message]) -> Result<String, OracleError> {
        if let Some(response) = self.responses.pop_front() {
            return Ok(response);
        }
        match &self.repeat {
            Some(response) => Ok(response.clone()),
            None => Err(OracleError::Invocation("script exhausted".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_plays_in_order_then_errors() {
        let mut oracle = ScriptedOracle::new(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(oracle.complete(&[]).unwrap(), "a");
        assert_eq!(oracle.complete(&[]).unwrap(), "b");
        assert!(matches!(
            oracle.complete(&[]),
            Err(OracleError::Invocation(_))
        ));
    }

    #[test]
    fn test_repeating_never_exhausts() {
        let mut oracle = ScriptedOracle::repeating("same");
        for _ in 0..10 {
            assert_eq!(oracle.complete(&[]).unwrap(), "same");
        }
    }

    #[test]
    fn test_script_drains_before_repeat() {
        let mut oracle = ScriptedOracle::repeating("tail");
        oracle.push("head");
        assert_eq!(oracle.complete(&[]).unwrap(), "head");
        assert_eq!(oracle.complete(&[]).unwrap(), "tail");
    }
}
