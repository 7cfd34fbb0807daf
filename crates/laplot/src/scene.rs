//! Serializable scene items handed to an external renderer.
//!
//! The figure layer records what should be drawn; how it is drawn is the
//! renderer's business. Points use small serializable structs instead of
//! the nalgebra types so the scene serializes without nalgebra's serde
//! feature.

use laplot_geom::SurfaceMesh;
use laplot_math::{Point2, Point3};
use serde::{Deserialize, Serialize};

/// A serializable 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2D {
    /// Create a new 2D point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point2> for Point2D {
    fn from(p: Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// A serializable 3D point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point3D {
    /// Create a new 3D point.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<Point3> for Point3D {
    fn from(p: Point3) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

impl From<Point3D> for Point3 {
    fn from(p: Point3D) -> Self {
        Point3::new(p.x, p.y, p.z)
    }
}

/// An RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
    /// Opacity.
    pub a: f64,
}

impl Color {
    /// Opaque green, the default plane surface color.
    pub const GREEN: Self = Self { r: 0.0, g: 0.5, b: 0.0, a: 1.0 };
    /// Opaque blue, the default intersection line color.
    pub const BLUE: Self = Self { r: 0.0, g: 0.0, b: 1.0, a: 1.0 };
    /// Opaque red.
    pub const RED: Self = Self { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
    /// Opaque black.
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

    /// This color with a different opacity.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

/// A labeled 2D polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path2 {
    /// Vertices, connected in order.
    pub points: Vec<Point2D>,
    /// Legend label, typically from [`crate::math_label`].
    pub label: Option<String>,
    /// Stroke color.
    pub color: Color,
}

/// A 3D polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path3 {
    /// Vertices, connected in order.
    pub points: Vec<Point3D>,
    /// Stroke color.
    pub color: Color,
}

/// A triangulated surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriSurface {
    /// Vertices, ordered around the polygon boundary.
    pub vertices: Vec<Point3D>,
    /// Flat triangle indices into `vertices`.
    pub indices: Vec<u32>,
    /// Fill color; planes default to 0.3 opacity so stacked planes stay
    /// readable.
    pub color: Color,
}

impl TriSurface {
    /// Build a scene surface from a geometry mesh.
    pub fn from_mesh(mesh: &SurfaceMesh, color: Color) -> Self {
        Self {
            vertices: mesh.vertices.iter().map(|&p| p.into()).collect(),
            indices: mesh.indices.clone(),
            color,
        }
    }
}
