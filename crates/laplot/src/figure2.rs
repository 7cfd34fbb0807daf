//! 2D figures: axis ranges, axis cosmetics, and line plotting.

use laplot_geom::LinearEquation2;
use laplot_math::Interval;
use serde::{Deserialize, Serialize};

use crate::error::{FigureError, Result};
use crate::label::math_label;
use crate::scene::{Color, Path2, Point2D};

/// How the renderer should draw the axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisStyle {
    /// Conventional box frame around the plot area.
    #[default]
    Boxed,
    /// Spines through the origin, ticks on the bottom/left spines, top and
    /// right spines hidden. The classroom style for vector diagrams.
    Centered,
}

/// A 2D figure: axis ranges, axis style, and recorded line plots.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure2 {
    /// Horizontal axis range.
    pub x: Interval,
    /// Vertical axis range.
    pub y: Interval,
    /// Axis cosmetics.
    pub axis_style: AxisStyle,
    /// Recorded lines, in plot order.
    pub items: Vec<Path2>,
}

impl Figure2 {
    /// Create a figure with the given axis ranges.
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            x: Interval::new(xmin, xmax),
            y: Interval::new(ymin, ymax),
            axis_style: AxisStyle::default(),
            items: Vec::new(),
        }
    }

    /// Move the axis spines through the origin.
    pub fn center_axes(&mut self) {
        self.axis_style = AxisStyle::Centered;
    }

    /// Plot the line `a1·x + a2·y = b` across the figure's x range.
    ///
    /// A vertical line (`a2 = 0`) is drawn between the y range limits at
    /// `x = b / a1`. When both coefficients are zero there is no line and
    /// the figure is left unchanged.
    pub fn plot_line(&mut self, eqn: &LinearEquation2, color: Color) -> Result<&Path2> {
        let points = if let (Some(y1), Some(y2)) =
            (eqn.solve_y(self.x.min), eqn.solve_y(self.x.max))
        {
            vec![
                Point2D::new(self.x.min, y1),
                Point2D::new(self.x.max, y2),
            ]
        } else if let Some(x0) = eqn.solve_x(0.0) {
            // vertical line x = b / a1
            vec![
                Point2D::new(x0, self.y.min),
                Point2D::new(x0, self.y.max),
            ]
        } else {
            return Err(FigureError::DegenerateEquation);
        };

        let idx = self.items.len();
        self.items.push(Path2 {
            points,
            label: Some(math_label(&eqn.coeffs, eqn.rhs)),
            color,
        });
        Ok(&self.items[idx])
    }
}

impl Default for Figure2 {
    fn default() -> Self {
        Self::new(-6.0, 6.0, -2.0, 4.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_ranges() {
        let fig = Figure2::default();
        assert!((fig.x.min + 6.0).abs() < 1e-12);
        assert!((fig.x.max - 6.0).abs() < 1e-12);
        assert!((fig.y.min + 2.0).abs() < 1e-12);
        assert!((fig.y.max - 4.0).abs() < 1e-12);
        assert_eq!(fig.axis_style, AxisStyle::Boxed);
    }

    #[test]
    fn test_plot_line_spans_x_range() {
        let mut fig = Figure2::default();
        // x + 2y = 4: y = (4 - x) / 2
        let eqn = LinearEquation2::new(1.0, 2.0, 4.0);
        let path = fig.plot_line(&eqn, Color::BLUE).unwrap();
        assert_eq!(path.points.len(), 2);
        assert_relative_eq!(path.points[0].x, -6.0);
        assert_relative_eq!(path.points[0].y, 5.0);
        assert_relative_eq!(path.points[1].x, 6.0);
        assert_relative_eq!(path.points[1].y, -1.0);
        assert_eq!(path.label.as_deref(), Some("$x_1 + 2 x_2 = 4$"));
    }

    #[test]
    fn test_vertical_line_fallback() {
        let mut fig = Figure2::default();
        // 2x = 4 is the vertical line x = 2
        let eqn = LinearEquation2::new(2.0, 0.0, 4.0);
        let path = fig.plot_line(&eqn, Color::BLACK).unwrap();
        assert!((path.points[0].x - 2.0).abs() < 1e-12);
        assert!((path.points[1].x - 2.0).abs() < 1e-12);
        assert!((path.points[0].y + 2.0).abs() < 1e-12);
        assert!((path.points[1].y - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_equation_leaves_figure_unchanged() {
        let mut fig = Figure2::default();
        let eqn = LinearEquation2::new(0.0, 0.0, 5.0);
        assert_eq!(
            fig.plot_line(&eqn, Color::BLUE),
            Err(FigureError::DegenerateEquation)
        );
        assert!(fig.items.is_empty());
    }

    #[test]
    fn test_center_axes() {
        let mut fig = Figure2::default();
        fig.center_axes();
        assert_eq!(fig.axis_style, AxisStyle::Centered);
    }
}
