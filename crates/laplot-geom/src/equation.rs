//! Linear equations in two and three unknowns.

use laplot_math::{Axis, Point3};

/// A linear equation in three unknowns: `a1·x + a2·y + a3·z = b`.
///
/// The coefficient array is indexed by axis, so `coeffs[Axis::Y.index()]`
/// is the y coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearEquation3 {
    /// Coefficients `(a1, a2, a3)`.
    pub coeffs: [f64; 3],
    /// Right-hand side `b`.
    pub rhs: f64,
}

impl LinearEquation3 {
    /// Create an equation from its coefficients and right-hand side.
    pub fn new(a1: f64, a2: f64, a3: f64, b: f64) -> Self {
        Self {
            coeffs: [a1, a2, a3],
            rhs: b,
        }
    }

    /// Coefficient for the given axis.
    pub fn coeff(&self, axis: Axis) -> f64 {
        self.coeffs[axis.index()]
    }

    /// Evaluate the left-hand side at a point.
    pub fn evaluate(&self, p: &Point3) -> f64 {
        self.coeffs[0] * p.x + self.coeffs[1] * p.y + self.coeffs[2] * p.z
    }

    /// Signed residual `lhs(p) - rhs`; zero when `p` lies on the plane.
    pub fn residual(&self, p: &Point3) -> f64 {
        self.evaluate(p) - self.rhs
    }
}

/// A linear equation in two unknowns: `a1·x + a2·y = b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearEquation2 {
    /// Coefficients `(a1, a2)`.
    pub coeffs: [f64; 2],
    /// Right-hand side `b`.
    pub rhs: f64,
}

impl LinearEquation2 {
    /// Create an equation from its coefficients and right-hand side.
    pub fn new(a1: f64, a2: f64, b: f64) -> Self {
        Self {
            coeffs: [a1, a2],
            rhs: b,
        }
    }

    /// Solve for y at a given x. `None` when the y coefficient is zero
    /// (the line is vertical).
    pub fn solve_y(&self, x: f64) -> Option<f64> {
        if self.coeffs[1] == 0.0 {
            None
        } else {
            Some((self.rhs - x * self.coeffs[0]) / self.coeffs[1])
        }
    }

    /// Solve for x at a given y. `None` when the x coefficient is zero
    /// (the line is horizontal).
    pub fn solve_x(&self, y: f64) -> Option<f64> {
        if self.coeffs[0] == 0.0 {
            None
        } else {
            Some((self.rhs - y * self.coeffs[1]) / self.coeffs[0])
        }
    }

    /// True when both coefficients are zero and the equation defines no line.
    pub fn is_degenerate(&self) -> bool {
        self.coeffs[0] == 0.0 && self.coeffs[1] == 0.0
    }
}
