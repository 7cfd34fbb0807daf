//! Plane-box and plane-plane intersection within axis-aligned bounds.
//!
//! Both routines clip analytic geometry against a [`Bounds3`] box:
//!
//! - [`plane_box_polygon`] walks the 12 box edges and collects the points
//!   where a plane crosses them, giving the vertices of the (possibly
//!   degenerate) polygon cut by the plane.
//! - [`plane_plane_clip`] finds where the intersection line of two planes
//!   crosses the box faces.
//!
//! Degeneracies never escape as errors here: a zero coefficient or a
//! singular 2x2 system means "no crossing for that edge or face pair" and
//! the candidate is skipped.

use laplot_math::{Axis, Bounds3, Point3};

use crate::equation::LinearEquation3;

/// The 8 box corners as binary triples (`false` = low endpoint).
const CORNERS: [[bool; 3]; 8] = [
    [false, false, false],
    [false, false, true],
    [false, true, false],
    [false, true, true],
    [true, false, false],
    [true, false, true],
    [true, true, false],
    [true, true, true],
];

/// Vertices of the polygon where a plane cuts an axis-aligned box.
///
/// Each of the 12 box edges is visited exactly once: an edge is owned by
/// the corner whose bit is low on the edge's axis. For each edge the plane
/// equation is solved for the coordinate along that axis with the other two
/// coordinates fixed at the corner, and the point is kept only when the
/// solved coordinate lies within the axis interval (inclusive).
///
/// Edges parallel to the plane (zero coefficient on the edge's axis) are
/// skipped rather than divided by. Points are deduplicated by exact value
/// equality, so a plane through a corner yields that corner once.
///
/// Fewer than 3 returned points means the cut is degenerate and there is no
/// polygon to draw.
pub fn plane_box_polygon(eqn: &LinearEquation3, bounds: &Bounds3) -> Vec<Point3> {
    let mut points: Vec<Point3> = Vec::new();

    for bits in CORNERS {
        for axis in Axis::ALL {
            let i = axis.index();
            // each edge belongs to the corner at its low end
            if bits[i] {
                continue;
            }
            let a_i = eqn.coeff(axis);
            if a_i == 0.0 {
                // plane parallel to this edge direction
                continue;
            }
            let mut fixed = 0.0;
            for other in axis.others() {
                let k = other.index();
                fixed += eqn.coeffs[k] * bounds.axis(other).endpoint(bits[k]);
            }
            let solved = (eqn.rhs - fixed) / a_i;
            if bounds.axis(axis).contains(solved) {
                let mut p = bounds.corner(bits);
                p[i] = solved;
                if !points.contains(&p) {
                    points.push(p);
                }
            }
        }
    }

    points
}

/// Solve the 2x2 system `a · x = b` by Cramer's rule.
///
/// Returns `None` when the determinant is zero (singular system).
pub fn solve_2x2(a: [[f64; 2]; 2], b: [f64; 2]) -> Option<[f64; 2]> {
    let det = a[0][0] * a[1][1] - a[0][1] * a[1][0];
    if det == 0.0 {
        return None;
    }
    let x0 = (b[0] * a[1][1] - b[1] * a[0][1]) / det;
    let x1 = (a[0][0] * b[1] - a[1][0] * b[0]) / det;
    Some([x0, x1])
}

/// Points where the intersection line of two planes crosses the faces of a
/// box.
///
/// For each axis held at one of its two interval endpoints, the remaining
/// two coordinates are found by solving the 2x2 system formed by both
/// equations' coefficients on the free axes. Singular systems (the planes'
/// projections are parallel on that axis) contribute nothing. A solution is
/// kept only when both free coordinates lie within their axis intervals
/// (inclusive).
///
/// The output is ordered by held axis then endpoint and is not
/// deduplicated; connect it as a polyline to draw the clipped line. An
/// empty result means the line misses the box entirely or the planes are
/// parallel.
pub fn plane_plane_clip(
    e1: &LinearEquation3,
    e2: &LinearEquation3,
    bounds: &Bounds3,
) -> Vec<Point3> {
    let mut points: Vec<Point3> = Vec::new();

    for held in Axis::ALL {
        let [u, v] = held.others();
        let a = [
            [e1.coeff(u), e1.coeff(v)],
            [e2.coeff(u), e2.coeff(v)],
        ];
        for high in [false, true] {
            let t = bounds.axis(held).endpoint(high);
            let b = [
                e1.rhs - t * e1.coeff(held),
                e2.rhs - t * e2.coeff(held),
            ];
            let Some([pu, pv]) = solve_2x2(a, b) else {
                continue;
            };
            if bounds.axis(u).contains(pu) && bounds.axis(v).contains(pv) {
                let mut p = Point3::origin();
                p[u.index()] = pu;
                p[v.index()] = pv;
                p[held.index()] = t;
                points.push(p);
            }
        }
    }

    points
}
