//! Error types for grid and board operations

use crate::coords::{Location, LocationKind};

/// Errors surfaced by coordinate parsing and board operations
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Malformed location text: wrong field count, non-integer component,
    /// or unknown direction name.
    #[error("invalid coordinate '{0}'")]
    InvalidCoordinate(String),

    /// A kind-specific operation was given a location of another kind.
    #[error("location {location} is not a {expected}")]
    WrongLocationKind {
        location: Location,
        expected: LocationKind,
    },

    /// A snapshot payload contradicts the kind of the location it is stored at.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}
