// ABOUTME: Error types for document tree operations.
// ABOUTME: Provides AstError with Malformed and UnexpectedShape variants used by the JSON adapter.

use thiserror::Error;

/// Errors that can occur while converting external representations into
/// the node catalog.
#[derive(Debug, Error)]
pub enum AstError {
    /// The JSON value is not a node object at all (wrong JSON type,
    /// missing `type` tag).
    #[error("not a node object: {0}")]
    UnexpectedShape(String),

    /// The node object carries a recognized type tag but is missing or
    /// mistyping a required field.
    #[error("malformed {kind} node: {reason}")]
    Malformed { kind: String, reason: String },
}

impl AstError {
    /// Creates an UnexpectedShape error with a custom message.
    pub fn unexpected(msg: impl Into<String>) -> Self {
        AstError::UnexpectedShape(msg.into())
    }

    /// Creates a Malformed error for a given node type tag.
    pub fn malformed(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        AstError::Malformed {
            kind: kind.into(),
            reason: reason.into(),
        }
    }
}
