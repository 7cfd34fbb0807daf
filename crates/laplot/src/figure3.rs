//! 3D figures: bounded axes, plane surfaces, and plane-intersection lines.

use laplot_geom::{plane_box_polygon, plane_plane_clip, triangulate_polygon, LinearEquation3};
use laplot_math::Bounds3;

use crate::error::{FigureError, Result};
use crate::scene::{Color, Path3, TriSurface};

/// Default opacity for plane surfaces.
const SURFACE_ALPHA: f64 = 0.3;

/// A 3D figure: axis bounds, labels, and recorded surfaces and paths.
///
/// Everything plotted is clipped to `bounds`, the rectangular prism the
/// renderer will show.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure3 {
    /// The visible box; all geometry is clipped to it.
    pub bounds: Bounds3,
    /// Axis labels, x/y/z order.
    pub axis_labels: [String; 3],
    /// Recorded plane surfaces.
    pub surfaces: Vec<TriSurface>,
    /// Recorded polylines.
    pub paths: Vec<Path3>,
}

impl Figure3 {
    /// Create a figure over the given bounds.
    pub fn new(bounds: Bounds3) -> Self {
        Self {
            bounds,
            axis_labels: [
                "$x_1$".to_string(),
                "$x_2$".to_string(),
                "$x_3$".to_string(),
            ],
            surfaces: Vec::new(),
            paths: Vec::new(),
        }
    }

    /// Plot the plane `a1·x + a2·y + a3·z = b` as a translucent surface
    /// clipped to the figure bounds.
    ///
    /// The plane is cut against the bounds box and the resulting polygon is
    /// triangulated. An `Err` means the cut was degenerate (fewer than 3
    /// points, or collinear in every axis projection) and the figure is
    /// unchanged.
    pub fn plot_plane(&mut self, eqn: &LinearEquation3, color: Color) -> Result<&TriSurface> {
        let polygon = plane_box_polygon(eqn, &self.bounds);
        let mesh = triangulate_polygon(&polygon)?;
        let idx = self.surfaces.len();
        self.surfaces
            .push(TriSurface::from_mesh(&mesh, color.with_alpha(SURFACE_ALPHA)));
        Ok(&self.surfaces[idx])
    }

    /// Plot the intersection line of two planes, clipped to the figure
    /// bounds.
    ///
    /// An `Err` means the planes are parallel or their line misses the
    /// bounds; the figure is unchanged.
    pub fn plot_plane_intersection(
        &mut self,
        e1: &LinearEquation3,
        e2: &LinearEquation3,
        color: Color,
    ) -> Result<&Path3> {
        let points = plane_plane_clip(e1, e2, &self.bounds);
        if points.is_empty() {
            return Err(FigureError::NoIntersectionInBounds);
        }
        let idx = self.paths.len();
        self.paths.push(Path3 {
            points: points.into_iter().map(|p| p.into()).collect(),
            color,
        });
        Ok(&self.paths[idx])
    }
}

impl Default for Figure3 {
    fn default() -> Self {
        Self::new(Bounds3::symmetric(3.0))
    }
}
