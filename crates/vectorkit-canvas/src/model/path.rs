use serde::{Deserialize, Serialize};

use super::{Aabb, Point, ShapeStyle, ShapeSystem};
use crate::geometry;
use crate::surface::DrawSurface;

/// One step in a vector path, modeled on SVG path commands.
///
/// A well-formed sequence begins with `MoveTo`; nothing enforces that, and
/// malformed sequences degrade gracefully (see [`geometry::flatten_path`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum PathCommand {
    /// Set the current point without drawing.
    #[serde(rename = "M")]
    MoveTo { x: f64, y: f64 },
    /// Line from the current point.
    #[serde(rename = "L")]
    LineTo { x: f64, y: f64 },
    /// Cubic Bezier curve from the current point through two control
    /// points to `(x, y)`.
    #[serde(rename = "C")]
    CubicTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    /// Close the current subpath.
    #[serde(rename = "Z")]
    Close,
}

/// Freeform path shape holding an ordered command sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathShape {
    pub commands: Vec<PathCommand>,
    #[serde(default, skip_serializing_if = "ShapeStyle::is_empty")]
    pub style: ShapeStyle,
}

impl PathShape {
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self {
            commands,
            style: ShapeStyle::default(),
        }
    }

    fn flattened(&self) -> Vec<Point> {
        geometry::flatten_path(&self.commands)
    }
}

impl ShapeSystem for PathShape {
    fn draw(&self, surface: &mut dyn DrawSurface) {
        // A single command draws nothing visible; skip the whole bracket.
        if self.commands.len() < 2 {
            return;
        }

        surface.begin_path();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo { x, y } => surface.move_to(x, y),
                PathCommand::LineTo { x, y } => surface.line_to(x, y),
                PathCommand::CubicTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => surface.cubic_to(x1, y1, x2, y2, x, y),
                PathCommand::Close => surface.close_path(),
            }
        }
    }

    fn contains_point(&self, x: f64, y: f64) -> bool {
        geometry::point_in_polygon_approx(Point::new(x, y), &self.flattened())
    }

    fn aabb(&self) -> Aabb {
        Aabb::from_points(&self.flattened())
    }
}
