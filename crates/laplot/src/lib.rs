#![warn(missing_docs)]

//! Plotting utilities for linear-algebra teaching.
//!
//! This crate records what a lesson figure should show — lines defined by
//! linear equations in 2D, plane surfaces and plane-intersection lines in
//! 3D, equation labels, axis cosmetics — as serializable scene data. It
//! never draws anything itself; a renderer (notebook widget, SVG writer,
//! GPU view) consumes the scene.
//!
//! # Example
//!
//! ```
//! use laplot::{Color, Figure3};
//! use laplot_geom::LinearEquation3;
//!
//! let mut fig = Figure3::default();
//! let e1 = LinearEquation3::new(1.0, 1.0, 1.0, 0.0);
//! let e2 = LinearEquation3::new(1.0, -1.0, 0.0, 0.0);
//! fig.plot_plane(&e1, Color::GREEN).unwrap();
//! fig.plot_plane(&e2, Color::GREEN).unwrap();
//! fig.plot_plane_intersection(&e1, &e2, Color::BLUE).unwrap();
//! assert_eq!(fig.surfaces.len(), 2);
//! assert_eq!(fig.paths.len(), 1);
//! ```

pub mod error;
pub mod figure2;
pub mod figure3;
pub mod label;
pub mod scene;

pub use error::{FigureError, Result};
pub use figure2::{AxisStyle, Figure2};
pub use figure3::Figure3;
pub use label::{format_equation, math_label};
pub use scene::{Color, Path2, Path3, Point2D, Point3D, TriSurface};

// the geometry the figures are built on, for callers that need it directly
pub use laplot_geom::{LinearEquation2, LinearEquation3};
pub use laplot_math::{Bounds3, Interval};
