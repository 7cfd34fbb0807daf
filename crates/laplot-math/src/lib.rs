#![warn(missing_docs)]

//! Math types for the laplot workspace.
//!
//! Thin wrappers around nalgebra providing the domain types the plotting
//! crates share: points, coordinate axes, inclusive intervals, and
//! axis-aligned bounds.

use nalgebra::{Vector2, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A point in 2D space.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in 2D space.
pub type Vec2 = Vector2<f64>;

/// A coordinate axis in 3D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis (index 0).
    X,
    /// The y axis (index 1).
    Y,
    /// The z axis (index 2).
    Z,
}

impl Axis {
    /// All three axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis (0, 1, or 2).
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two remaining axes, in ascending index order.
    pub fn others(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }

    /// Component of a point along this axis.
    pub fn of(self, p: &Point3) -> f64 {
        p[self.index()]
    }
}

/// A closed interval `[min, max]` on one axis.
///
/// Membership is inclusive at both ends; every bounds test in the
/// intersection routines goes through [`Interval::contains`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower endpoint.
    pub min: f64,
    /// Upper endpoint.
    pub max: f64,
}

impl Interval {
    /// Create an interval from two endpoints, in either order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Symmetric interval `[-half, half]`.
    pub fn symmetric(half: f64) -> Self {
        Self::new(-half, half)
    }

    /// Inclusive membership test.
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Width of the interval.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// The low (`high = false`) or high (`high = true`) endpoint.
    pub fn endpoint(&self, high: bool) -> f64 {
        if high {
            self.max
        } else {
            self.min
        }
    }
}

/// An axis-aligned box: one closed interval per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    /// Extent along x.
    pub x: Interval,
    /// Extent along y.
    pub y: Interval,
    /// Extent along z.
    pub z: Interval,
}

impl Bounds3 {
    /// Create bounds from three intervals.
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        Self { x, y, z }
    }

    /// Cube `[-half, half]` on every axis.
    pub fn symmetric(half: f64) -> Self {
        let i = Interval::symmetric(half);
        Self { x: i, y: i, z: i }
    }

    /// The interval along the given axis.
    pub fn axis(&self, axis: Axis) -> Interval {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Corner selected by a binary triple: `false` picks the low endpoint
    /// on that axis, `true` the high one.
    pub fn corner(&self, bits: [bool; 3]) -> Point3 {
        Point3::new(
            self.x.endpoint(bits[0]),
            self.y.endpoint(bits[1]),
            self.z.endpoint(bits[2]),
        )
    }

    /// Inclusive membership test on all three axes.
    pub fn contains(&self, p: &Point3) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y) && self.z.contains(p.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_others() {
        assert_eq!(Axis::X.others(), [Axis::Y, Axis::Z]);
        assert_eq!(Axis::Y.others(), [Axis::X, Axis::Z]);
        assert_eq!(Axis::Z.others(), [Axis::X, Axis::Y]);
    }

    #[test]
    fn test_interval_orders_endpoints() {
        let i = Interval::new(4.0, -2.0);
        assert!((i.min + 2.0).abs() < 1e-12);
        assert!((i.max - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_interval_contains_is_inclusive() {
        let i = Interval::new(-3.0, 3.0);
        assert!(i.contains(-3.0));
        assert!(i.contains(3.0));
        assert!(i.contains(0.0));
        assert!(!i.contains(3.0000001));
    }

    #[test]
    fn test_bounds_corner() {
        let b = Bounds3::symmetric(3.0);
        let c = b.corner([false, true, false]);
        assert!((c.x + 3.0).abs() < 1e-12);
        assert!((c.y - 3.0).abs() < 1e-12);
        assert!((c.z + 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_bounds_contains_face_point() {
        let b = Bounds3::symmetric(3.0);
        // on a face, still inside (inclusive)
        assert!(b.contains(&Point3::new(3.0, 0.0, 0.0)));
        assert!(!b.contains(&Point3::new(3.1, 0.0, 0.0)));
    }

    #[test]
    fn test_axis_of() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert!((Axis::X.of(&p) - 1.0).abs() < 1e-12);
        assert!((Axis::Z.of(&p) - 3.0).abs() < 1e-12);
    }
}
