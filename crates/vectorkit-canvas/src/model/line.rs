use serde::{Deserialize, Serialize};

use super::{Aabb, Point, ShapeStyle, ShapeSystem};
use crate::geometry;
use crate::surface::DrawSurface;

/// Hit-test slack for lines, in pixels. Mathematically a line has zero
/// thickness; without this a user could never click one.
pub const LINE_HIT_TOLERANCE: f64 = 5.0;

/// Straight segment between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    #[serde(default, skip_serializing_if = "ShapeStyle::is_empty")]
    pub style: ShapeStyle,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
            style: ShapeStyle::default(),
        }
    }
}

impl ShapeSystem for Line {
    fn draw(&self, surface: &mut dyn DrawSurface) {
        // Open two-point path; no close.
        surface.begin_path();
        surface.move_to(self.start.x, self.start.y);
        surface.line_to(self.end.x, self.end.y);
    }

    fn contains_point(&self, x: f64, y: f64) -> bool {
        geometry::point_to_segment_distance(Point::new(x, y), self.start, self.end)
            <= LINE_HIT_TOLERANCE
    }

    fn aabb(&self) -> Aabb {
        Aabb {
            top: self.start.y.min(self.end.y),
            right: self.start.x.max(self.end.x),
            bottom: self.start.y.max(self.end.y),
            left: self.start.x.min(self.end.x),
        }
    }
}
