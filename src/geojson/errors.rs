//! Error types for GeoJSON traversal

use std::fmt;

use crate::geojson::types::GeometryType;

/// Traversal-specific error types
///
/// Unrecognized node kinds and malformed shapes cannot be constructed
/// with the closed model, so the only runtime failure left is a
/// callback misbehaving.
#[derive(Debug)]
pub enum VisitError {
    /// A geometry callback replaced a node with a differently-typed geometry
    GeometryTypeMismatch {
        /// Kind of the node being replaced
        expected: GeometryType,
        /// Kind of the offered replacement
        actual: GeometryType,
    },
}

impl fmt::Display for VisitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisitError::GeometryTypeMismatch { expected, actual } => write!(
                f,
                "Expected geometry callback to return a {}, got a {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for VisitError {}

/// Result type for traversal operations
pub type VisitResult<T> = Result<T, VisitError>;
