use serde::{Deserialize, Serialize};

use super::{Aabb, Point, ShapeStyle, ShapeSystem};
use crate::geometry;
use crate::surface::DrawSurface;

/// Star with alternating outer and inner vertices around a center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub center: Point,
    pub spikes: u32,
    pub outer_radius: f64,
    pub inner_radius: f64,
    #[serde(default, skip_serializing_if = "ShapeStyle::is_empty")]
    pub style: ShapeStyle,
}

impl Star {
    pub fn new(cx: f64, cy: f64, spikes: u32, outer_radius: f64, inner_radius: f64) -> Self {
        Self {
            center: Point::new(cx, cy),
            spikes,
            outer_radius,
            inner_radius,
            style: ShapeStyle::default(),
        }
    }

    fn vertices(&self) -> Vec<Point> {
        geometry::star_vertices(
            self.center.x,
            self.center.y,
            self.spikes,
            self.outer_radius,
            self.inner_radius,
        )
    }
}

impl ShapeSystem for Star {
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
