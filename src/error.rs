//! Error types for clipping operations.

use thiserror::Error;

/// Errors reported by polygon clipping operations.
///
/// All failures are detected up front during input validation; once a clip
/// run starts it cannot fail, and an empty result is the ordinary
/// "no overlap" outcome rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipError {
    /// A polygon has fewer than three vertices.
    #[error("degenerate input: polygon has {found} vertices, need at least 3")]
    DegenerateInput {
        /// Number of vertices actually supplied.
        found: usize,
    },

    /// Two consecutive vertices of a polygon share the same coordinates.
    ///
    /// The wrap-around pair (last vertex, first vertex) counts as
    /// consecutive; inputs carry no repeated closing point.
    #[error("degenerate input: coincident consecutive vertices at index {index}")]
    CoincidentVertices {
        /// Index of the first vertex of the coincident pair.
        index: usize,
    },
}
