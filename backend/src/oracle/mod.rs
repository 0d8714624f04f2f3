//! Decision oracle layer
//!
//! The simulation delegates target selection and mutation decisions to an
//! external oracle (a cloud model, an on-device model, or a deterministic
//! stub). The core consumes it only through the narrow
//! `complete(messages) -> text` contract; concrete network or on-device
//! backends live outside this crate.
//!
//! Oracle output is untrusted and loosely schematized: free text that is
//! *expected* to contain a JSON decision. The [`parser`] module extracts
//! structure from it and the [`adapter`] validates the decision against
//! live topology before it is allowed anywhere near engine state.

pub mod adapter;
pub mod parser;
pub mod prompt;
pub mod scripted;

pub use adapter::{DecisionError, OracleAdapter, SpreadDecision};
pub use parser::{DecisionFields, ParseError};
pub use scripted::ScriptedOracle;

use thiserror::Error;

/// Message role in an oracle conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
        }
    }
}

/// One message in the ordered prompt sequence sent to the oracle.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Failure to obtain any response from the oracle backend.
///
/// Distinct from parse failures: here we never got usable text at all.
/// No retry or timeout policy lives at this layer; a backend that hangs
/// hangs the step.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OracleError {
    #[error("oracle invocation failed: {0}")]
    Invocation(String),
}

/// External decision service contract.
///
/// Implementations may block, may fail, and may return non-JSON or partial
/// text; all of that is tolerated downstream. Heavyweight initialization
/// (e.g. loading an on-device model) must happen before the engine is
/// constructed, not inside `complete`.
pub trait DecisionOracle {
    fn complete(&mut self, messages: &[Message]) -> Result<String, OracleError>;
}

impl<T: DecisionOracle + ?Sized> DecisionOracle for Box<T> {
    fn complete(&mut self, messages: &[Message]) -> Result<String, OracleError> {
        (**self).complete(messages)
    }
}
