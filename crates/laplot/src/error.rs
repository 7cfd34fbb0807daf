//! Error types for the figure layer.

use laplot_geom::TriangulateError;
use thiserror::Error;

/// Errors from plot operations.
///
/// Every variant means "nothing was drawn; the figure is unchanged". None
/// of these are fatal: a caller reproducing the original teaching plots can
/// ignore them and get incomplete geometry, but the omission is explicit
/// rather than silent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureError {
    /// Both coefficients of a 2D equation are zero; there is no line.
    #[error("equation has no nonzero coefficient, nothing to draw")]
    DegenerateEquation,

    /// The plane-box cut has no triangulatable polygon.
    #[error("plane cut is degenerate: {0}")]
    DegenerateSurface(#[from] TriangulateError),

    /// The intersection line of two planes misses the figure bounds, or
    /// the planes are parallel.
    #[error("plane intersection does not cross the figure bounds")]
    NoIntersectionInBounds,
}

/// Result type for figure operations.
pub type Result<T> = std::result::Result<T, FigureError>;
