//! Error types for the geometric core.

use thiserror::Error;

use crate::triangulate::AxisPair;

/// Errors from polygon triangulation.
///
/// Singular linear systems and zero plane coefficients are not errors
/// anywhere in this crate; they are skipped candidates. Triangulation is
/// the only operation that can fail outright, and its errors mean "no
/// surface to draw", never a fatal condition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangulateError {
    /// The points are collinear (zero area) when projected onto this pair
    /// of axes.
    #[error("points are collinear in the {0} projection")]
    DegenerateProjection(AxisPair),

    /// Fewer than 3 points; no polygon exists.
    #[error("{0} points cannot form a polygon")]
    TooFewPoints(usize),
}

/// Result type for triangulation.
pub type Result<T> = std::result::Result<T, TriangulateError>;
