#![warn(missing_docs)]

//! Geometric core for the laplot workspace.
//!
//! Pure, stateless computations behind the plotting crates:
//!
//! - Linear equations in two and three unknowns
//! - Plane-box edge intersection (the polygon a plane cuts from a box)
//! - Plane-plane intersection clipped to a box
//! - Convex polygon triangulation with explicit degenerate-projection
//!   reporting
//!
//! Nothing here renders; the output is points and meshes that the figure
//! layer hands to an external renderer.

pub mod equation;
pub mod error;
pub mod intersect;
pub mod triangulate;

pub use equation::{LinearEquation2, LinearEquation3};
pub use error::{Result, TriangulateError};
pub use intersect::{plane_box_polygon, plane_plane_clip, solve_2x2};
pub use triangulate::{triangulate_polygon, triangulate_projected, AxisPair, SurfaceMesh};

#[cfg(test)]
mod tests {
    use super::*;
    use laplot_math::Bounds3;

    #[test]
    fn test_cut_and_triangulate() {
        // end to end: diagonal plane through the unit cube -> hexagon -> 4 triangles
        let eqn = LinearEquation3::new(1.0, 1.0, 1.0, 0.0);
        let pts = plane_box_polygon(&eqn, &Bounds3::symmetric(1.0));
        let mesh = triangulate_polygon(&pts).unwrap();
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.num_triangles(), 4);
        for v in &mesh.vertices {
            assert!(eqn.residual(v).abs() < 1e-12);
        }
    }

    #[test]
    fn test_vertical_plane_cut_triangulates_via_retry() {
        // x + y = 0 is parallel to z; its cut projects to a segment in XY
        // and needs the XZ retry.
        let eqn = LinearEquation3::new(1.0, 1.0, 0.0, 0.0);
        let pts = plane_box_polygon(&eqn, &Bounds3::symmetric(2.0));
        assert_eq!(pts.len(), 4);
        let mesh = triangulate_polygon(&pts).unwrap();
        assert_eq!(mesh.num_triangles(), 2);
    }
}
