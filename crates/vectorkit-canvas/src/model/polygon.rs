use serde::{Deserialize, Serialize};

use super::{Aabb, Point, ShapeStyle, ShapeSystem};
use crate::geometry;
use crate::surface::DrawSurface;

/// Regular polygon with `sides` vertices inscribed in a circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub center: Point,
    pub sides: u32,
    pub radius: f64,
    #[serde(default, skip_serializing_if = "ShapeStyle::is_empty")]
    pub style: ShapeStyle,
}

impl Polygon {
    pub fn new(cx: f64, cy: f64, sides: u32, radius: f64) -> Self {
        Self {
            center: Point::new(cx, cy),
            sides,
            radius,
            style: ShapeStyle::default(),
        }
    }

    fn vertices(&self) -> Vec<Point> {
        geometry::polygon_vertices(self.center.x, self.center.y, self.sides, self.radius)
    }
}

impl ShapeSystem for Polygon {
    fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.begin_path();
        for (i, v) in self.vertices().iter().enumerate() {
            if i == 0 {
                surface.move_to(v.x, v.y);
            } else {
                surface.line_to(v.x, v.y);
            }
        }
        surface.close_path();
    }

    fn contains_point(&self, x: f64, y: f64) -> bool {
        geometry::point_in_polygon_approx(Point::new(x, y), &self.vertices())
    }

    fn aabb(&self) -> Aabb {
        Aabb::from_points(&self.vertices())
    }
}
