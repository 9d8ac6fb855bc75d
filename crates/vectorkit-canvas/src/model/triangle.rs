use serde::{Deserialize, Serialize};

use super::{Aabb, Point, ShapeStyle, ShapeSystem};
use crate::geometry;
use crate::surface::DrawSurface;

/// Triangle defined by its three vertices, in either winding order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    #[serde(default, skip_serializing_if = "ShapeStyle::is_empty")]
    pub style: ShapeStyle,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            a,
            b,
            c,
            style: ShapeStyle::default(),
        }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3))
    }
}

impl ShapeSystem for Triangle {
    fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.begin_path();
        surface.move_to(self.a.x, self.a.y);
        surface.line_to(self.b.x, self.b.y);
        surface.line_to(self.c.x, self.c.y);
        surface.close_path();
    }

    fn contains_point(&self, x: f64, y: f64) -> bool {
        geometry::point_in_triangle(Point::new(x, y), self.a, self.b, self.c)
    }

    fn aabb(&self) -> Aabb {
        Aabb::from_points(&[self.a, self.b, self.c])
    }
}
