//! Error types for hierarchy edits and text parsing.

use thiserror::Error;

/// Failures reported by [`crate::Hierarchy`] operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HierarchyError {
    /// A node or parent id outside `[0, len)`
    #[error("node index {index} out of range (hierarchy holds {len} nodes)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A parent link that would break index ordering
    #[error("parent {parent} must be created before node {node}")]
    ParentOrder { node: usize, parent: usize },

    /// Malformed constraint or transform text
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Failures reported when reading whitespace separated scalar text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("expected {expected} scalar fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid scalar {token:?}")]
    InvalidScalar { token: String },
}

/// Result type alias using [`HierarchyError`].
pub type Result<T> = std::result::Result<T, HierarchyError>;

/// Splits `text` on whitespace and parses every token as `f32`.
pub(crate) fn parse_scalars(text: &str) -> std::result::Result<Vec<f32>, ParseError> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<f32>().map_err(|_| ParseError::InvalidScalar {
                token: token.to_string(),
            })
        })
        .collect()
}
