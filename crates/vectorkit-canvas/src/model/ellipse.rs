use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::{Aabb, Point, ShapeStyle, ShapeSystem};
use crate::surface::DrawSurface;

/// Axis-aligned ellipse defined by its center and two radii.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
    #[serde(default, skip_serializing_if = "ShapeStyle::is_empty")]
    pub style: ShapeStyle,
}

impl Ellipse {
    pub fn new(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self {
            center: Point::new(cx, cy),
            rx,
            ry,
            style: ShapeStyle::default(),
        }
    }
}

impl ShapeSystem for Ellipse {
    fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.begin_path();
        surface.ellipse(self.center.x, self.center.y, self.rx, self.ry, 0.0, 0.0, TAU);
    }

    fn contains_point(&self, x: f64, y: f64) -> bool {
        // Normalized quadratic form; boundary inclusive. Zero radii make the
        // quotient non-finite and every comparison false.
        let dx = x - self.center.x;
        let dy = y - self.center.y;
        (dx * dx) / (self.rx * self.rx) + (dy * dy) / (self.ry * self.ry) <= 1.0
    }

    fn aabb(&self) -> Aabb {
        Aabb {
            top: self.center.y - self.ry,
            right: self.center.x + self.rx,
            bottom: self.center.y + self.ry,
            left: self.center.x - self.rx,
        }
    }
}
