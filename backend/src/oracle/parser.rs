//! Oracle response parsers
//!
//! Extracts structured decisions from free-form oracle text. Models tend to
//! wrap JSON in prose or code fences, rename fields, or return node ids as
//! numbers; the parsers tolerate all of that. What they do not tolerate is
//! missing both halves of a decision, and every error keeps the raw text
//! for offline diagnosis.

use crate::mutation::MutationDirective;
use serde_json::Value;
use thiserror::Error;

/// Accepted aliases for the decision's source field, probed in order.
pub const SOURCE_ALIASES: [&str; 4] = ["source_node", "source_node_id", "source", "src"];

/// Accepted aliases for the decision's target field, probed in order.
pub const TARGET_ALIASES: [&str; 4] = ["target_node", "target_node_id", "target", "dst"];

/// Parse failure on oracle text. Always carries the raw response.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    #[error("invalid JSON from oracle")]
    InvalidJson { raw: String },

    #[error("missing fields: {missing:?}")]
    MissingFields {
        missing: Vec<&'static str>,
        raw: String,
    },

    /// Mutation replies must carry a boolean `mutate`; its absence is a
    /// schema violation distinct from broken JSON syntax
    #[error("missing boolean 'mutate' field")]
    MissingMutateField { raw: String },
}

impl ParseError {
    /// The raw oracle text that failed to parse.
    pub fn raw(&self) -> &str {
        match self {
            ParseError::InvalidJson { raw } => raw,
            ParseError::MissingFields { raw, .. } => raw,
            ParseError::MissingMutateField { raw } => raw,
        }
    }
}

/// Structured spread decision pulled out of oracle text.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionFields {
    pub source: String,
    pub target: String,
    pub reasoning: String,
}

/// Parse `raw` as JSON; on failure retry the substring between the first
/// `{` and the last `}` (strips code fences and surrounding prose).
fn extract_json(raw: &str) -> Result<Value, ParseError> {
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return Ok(value);
    }

    let start = raw.find('{');
    let end = raw.rfind('}');
    if let (Some(start), Some(end)) = (start, end) {
        if end > start {
            if let Ok(value) = serde_json::from_str::<Value>(&raw[start..=end]) {
                return Ok(value);
            }
        }
    }

    Err(ParseError::InvalidJson {
        raw: raw.to_string(),
    })
}

/// Probe the alias table and stringify whatever non-null scalar is found.
/// Models regularly return node ids as bare numbers.
fn lookup_aliased(value: &Value, aliases: &[&'static str]) -> Option<String> {
    let obj = value.as_object()?;
    for alias in aliases {
        match obj.get(*alias) {
            Some(Value::String(s)) => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => continue,
        }
    }
    None
}

/// Parse a spread decision from raw oracle text.
pub fn parse_decision(raw: &str) -> Result<DecisionFields, ParseError> {
    let value = extract_json(raw)?;

    let source = lookup_aliased(&value, &SOURCE_ALIASES);
    let target = lookup_aliased(&value, &TARGET_ALIASES);

    let mut missing = Vec::new();
    if source.is_none() {
        missing.push("source");
    }
    if target.is_none() {
        missing.push("target");
    }
    if !missing.is_empty() {
        return Err(ParseError::MissingFields {
            missing,
            raw: raw.to_string(),
        });
    }

    let reasoning = value
        .get("reasoning")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    Ok(DecisionFields {
        source: source.unwrap_or_default(),
        target: target.unwrap_or_default(),
        reasoning,
    })
}

/// Parse a mutation directive from raw oracle text.
///
/// Stricter than the decision parser: the reply must be a JSON object (no
/// substring salvage) with a boolean `mutate` field.
pub fn parse_mutation(raw: &str) -> Result<MutationDirective, ParseError> {
    let value: Value = serde_json::from_str(raw).map_err(|_| ParseError::InvalidJson {
        raw: raw.to_string(),
    })?;

    match value.get("mutate") {
        Some(Value::Bool(_)) => {}
        _ => {
            return Err(ParseError::MissingMutateField {
                raw: raw.to_string(),
            })
        }
    }

    serde_json::from_value(value).map_err(|_| ParseError::InvalidJson {
        raw: raw.to_string(),
    })
}
