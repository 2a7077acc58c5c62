//! Errors for rejected geometric input.
//!
//! Only *degenerate input* is reported through this type; violations of the
//! pipeline's internal invariants (a broken edge cycle, a third crossing
//! point) panic instead, since they indicate a defect upstream rather than
//! bad data at the boundary.

use thiserror::Error;

/// Degenerate geometry rejected at a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Fewer than three usable vertices remain after culling degenerate
    /// edges.
    #[error("polygon has {got} usable vertices after degenerate-edge culling, need at least 3")]
    TooFewVertices { got: usize },

    /// The given points are collinear (or coincident) and define no plane.
    #[error("points do not define a plane (zero-length normal)")]
    DegenerateNormal,
}
