//! Triangulation of a convex point set for surface rendering.
//!
//! A plane cut through a box is a convex polygon, so triangulation is a
//! matter of ordering the vertices around their centroid and fanning them
//! into triangles. The ordering happens in a 2D projection onto a pair of
//! axes, and a projection can be degenerate: a plane parallel to the
//! projection direction collapses to a line segment. Instead of trying
//! projections by exception handling, [`triangulate_projected`] reports the
//! degenerate pair explicitly and [`triangulate_polygon`] retries the fixed
//! pair order XY, XZ, ZY deterministically.

use std::fmt;

use laplot_math::{Axis, Point2, Point3};

use crate::error::{Result, TriangulateError};

/// Area below which a projected polygon counts as collinear.
const DEGENERATE_AREA: f64 = 1e-12;

/// An ordered pair of distinct axes defining a 2D projection plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisPair {
    /// Axis mapped to the projected u coordinate.
    pub u: Axis,
    /// Axis mapped to the projected v coordinate.
    pub v: Axis,
}

impl AxisPair {
    /// Project onto (x, y).
    pub const XY: Self = Self { u: Axis::X, v: Axis::Y };
    /// Project onto (x, z).
    pub const XZ: Self = Self { u: Axis::X, v: Axis::Z };
    /// Project onto (z, y).
    pub const ZY: Self = Self { u: Axis::Z, v: Axis::Y };

    /// The retry order used by [`triangulate_polygon`].
    pub const RETRY_ORDER: [Self; 3] = [Self::XY, Self::XZ, Self::ZY];

    /// Project a 3D point onto this axis pair.
    pub fn project(&self, p: &Point3) -> Point2 {
        Point2::new(self.u.of(p), self.v.of(p))
    }
}

impl fmt::Display for AxisPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:?}", self.u, self.v)
    }
}

/// A triangle mesh over a set of polygon vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMesh {
    /// Polygon vertices, ordered around the polygon boundary.
    pub vertices: Vec<Point3>,
    /// Flat array of triangle indices into `vertices`: `[i0, i1, i2, ...]`.
    pub indices: Vec<u32>,
}

impl SurfaceMesh {
    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Triangulate a convex point set using the given projection.
///
/// The points are sorted by angle around their centroid in the projected
/// plane, then fanned into triangles from the first vertex. Returns
/// [`TriangulateError::DegenerateProjection`] when the projected polygon
/// has (near-)zero area, and [`TriangulateError::TooFewPoints`] below 3
/// points.
pub fn triangulate_projected(points: &[Point3], pair: AxisPair) -> Result<SurfaceMesh> {
    if points.len() < 3 {
        return Err(TriangulateError::TooFewPoints(points.len()));
    }

    let projected: Vec<Point2> = points.iter().map(|p| pair.project(p)).collect();
    let n = projected.len() as f64;
    let centroid = Point2::new(
        projected.iter().map(|p| p.x).sum::<f64>() / n,
        projected.iter().map(|p| p.y).sum::<f64>() / n,
    );

    // sort the original points by projected angle around the centroid
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| {
        let ta = (projected[a].y - centroid.y).atan2(projected[a].x - centroid.x);
        let tb = (projected[b].y - centroid.y).atan2(projected[b].x - centroid.x);
        ta.total_cmp(&tb)
    });

    // shoelace area in the projection; collinear sets collapse to zero
    let mut area = 0.0;
    for i in 0..order.len() {
        let a = projected[order[i]];
        let b = projected[order[(i + 1) % order.len()]];
        area += a.x * b.y - b.x * a.y;
    }
    if (area / 2.0).abs() <= DEGENERATE_AREA {
        return Err(TriangulateError::DegenerateProjection(pair));
    }

    let vertices: Vec<Point3> = order.iter().map(|&i| points[i]).collect();
    let mut indices = Vec::with_capacity((vertices.len() - 2) * 3);
    for i in 1..vertices.len() - 1 {
        indices.push(0);
        indices.push(i as u32);
        indices.push(i as u32 + 1);
    }

    Ok(SurfaceMesh { vertices, indices })
}

/// Triangulate a convex point set, retrying projections deterministically.
///
/// Tries [`AxisPair::RETRY_ORDER`] in order and returns the first
/// non-degenerate triangulation. A set collinear in every axis projection
/// (a genuinely degenerate cut) is reported as the last pair's
/// [`TriangulateError::DegenerateProjection`]; this is a known limit of
/// axis-aligned projection and callers treat it as "nothing to draw".
pub fn triangulate_polygon(points: &[Point3]) -> Result<SurfaceMesh> {
    let mut last = TriangulateError::TooFewPoints(points.len());
    for pair in AxisPair::RETRY_ORDER {
        match triangulate_projected(points, pair) {
            Ok(mesh) => return Ok(mesh),
            Err(e @ TriangulateError::TooFewPoints(_)) => return Err(e),
            Err(e) => last = e,
        }
    }
    Err(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_fans_into_two_triangles() {
        let pts = [
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(-1.0, 1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
        ];
        let mesh = triangulate_projected(&pts, AxisPair::XY).unwrap();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.num_triangles(), 2);
    }

    #[test]
    fn test_too_few_points() {
        let pts = [Point3::origin(), Point3::new(1.0, 0.0, 0.0)];
        assert_eq!(
            triangulate_projected(&pts, AxisPair::XY),
            Err(TriangulateError::TooFewPoints(2))
        );
    }

    #[test]
    fn test_vertical_plane_degenerate_in_xy() {
        // a polygon in the plane y = x projects to a segment in XY
        let pts = [
            Point3::new(-1.0, -1.0, -1.0),
            Point3::new(1.0, 1.0, -1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(-1.0, -1.0, 1.0),
        ];
        assert_eq!(
            triangulate_projected(&pts, AxisPair::XY),
            Err(TriangulateError::DegenerateProjection(AxisPair::XY))
        );
        // the retry driver falls through to XZ
        let mesh = triangulate_polygon(&pts).unwrap();
        assert_eq!(mesh.num_triangles(), 2);
    }

    #[test]
    fn test_fully_collinear_set_reports_degenerate() {
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        ];
        let err = triangulate_polygon(&pts).unwrap_err();
        assert!(matches!(err, TriangulateError::DegenerateProjection(_)));
    }

    #[test]
    fn test_retry_order_is_deterministic() {
        let pts = [
            Point3::new(-1.0, -1.0, -1.0),
            Point3::new(1.0, 1.0, -1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(-1.0, -1.0, 1.0),
        ];
        let a = triangulate_polygon(&pts).unwrap();
        let b = triangulate_polygon(&pts).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_axis_pair_display() {
        assert_eq!(AxisPair::ZY.to_string(), "ZY");
    }
}
