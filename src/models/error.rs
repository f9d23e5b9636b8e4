//! Errors raised while generating a bracket.

/// Errors that can occur during bracket generation.
///
/// Any of these means "do not create the bracket": no partially built
/// structure is ever returned alongside an error.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum BracketError {
    /// Caller input is malformed (participant count < 1, unknown bracket type, ...).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The generated structure is internally inconsistent. Indicates a bug in the topology.
    #[error("Bracket invariant violated: {0}")]
    InvariantViolation(String),
    /// A slot resolved to neither a bye nor a known participant.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl BracketError {
    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        BracketError::InvariantViolation(msg.into())
    }

    pub(crate) fn input(msg: impl Into<String>) -> Self {
        BracketError::InvalidInput(msg.into())
    }
}
