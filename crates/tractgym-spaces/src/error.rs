//! Error types for space conversion.

use thiserror::Error;

/// Errors that can occur when rebuilding a space from a map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpaceError {
    /// The map has keys the space does not declare
    #[error("unknown fields for {space}: {}", fields.join(", "))]
    UnknownFields {
        /// Name of the space being built.
        space: &'static str,
        /// Offending keys, in map order.
        fields: Vec<String>,
    },

    /// The map lacks keys the space declares
    #[error("missing fields for {space}: {}", fields.join(", "))]
    MissingFields {
        /// Name of the space being built.
        space: &'static str,
        /// Absent fields, in declaration order.
        fields: Vec<String>,
    },

    /// A value has the wrong kind for its field
    #[error("field '{field}' of {space} expects a {expected} value, found {found}")]
    KindMismatch {
        /// Name of the space being built.
        space: &'static str,
        /// Field whose value was rejected.
        field: &'static str,
        /// Kind the field stores.
        expected: &'static str,
        /// Kind that was supplied.
        found: &'static str,
    },

    /// A matrix field does not have the expected `(rows, columns)` shape
    #[error("field '{field}' has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        /// Field whose shape was checked.
        field: &'static str,
        /// Required shape.
        expected: (usize, usize),
        /// Shape found; for ragged rows, the first row of the wrong length.
        found: (usize, usize),
    },
}
