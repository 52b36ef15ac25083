//! Common error types for shelf.

use thiserror::Error;

/// A failed assertion.
///
/// Every relationship check reports through this one type; the message is
/// the only thing that tells the failures apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionError {
    message: String,
}

impl AssertionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for assertions.
pub type AssertResult<T> = Result<T, AssertionError>;

/// A string did not name one of the four relation kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown relation kind: '{name}'")]
pub struct ParseKindError {
    name: String,
}

impl ParseKindError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
