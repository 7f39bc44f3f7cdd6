// Copyright 2025 Lars Brubaker
// License: MIT
//
// Error types for boundary triangulation.

use thiserror::Error;

/// Result type for boundary-mesh operations.
pub type Result<T> = std::result::Result<T, TriangulationError>;

/// Errors that can occur while triangulating a boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangulationError {
    /// A flat `[x0, y0, x1, y1, ...]` buffer does not hold whole points.
    #[error("invalid vertex array: flat buffer length {len} is not a multiple of 2")]
    MalformedBuffer {
        /// Length of the rejected buffer.
        len: usize,
    },

    /// The boundary has fewer than three vertices.
    #[error("vertices count cannot be less than 3, got {actual}")]
    TooFewVertices {
        /// Actual vertex count.
        actual: usize,
    },

    /// A boundary vertex has a NaN or infinite coordinate.
    #[error("invalid coordinate at vertex {index}")]
    InvalidCoordinate {
        /// Index of the offending vertex.
        index: usize,
    },

    /// Ear clipping made no progress and the stall policy asked to fail.
    #[error("no ear found with {remaining} vertices remaining")]
    Stalled {
        /// Vertices left in the working list when the scan stalled.
        remaining: usize,
    },
}

impl TriangulationError {
    /// True for errors caused by a malformed call rather than by the geometry.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, TriangulationError::Stalled { .. })
    }
}
