use serde::{Deserialize, Serialize};

use super::{Aabb, ShapeStyle, ShapeSystem};
use crate::surface::DrawSurface;

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "ShapeStyle::is_empty")]
    pub style: ShapeStyle,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            style: ShapeStyle::default(),
        }
    }
}

impl ShapeSystem for Rectangle {
    fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.begin_path();
        surface.rect(self.x, self.y, self.width, self.height);
        surface.close_path();
    }

    fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && y >= self.y && x <= self.x + self.width && y <= self.y + self.height
    }

    fn aabb(&self) -> Aabb {
        Aabb {
            top: self.y,
            right: self.x + self.width,
            bottom: self.y + self.height,
            left: self.x,
        }
    }
}
