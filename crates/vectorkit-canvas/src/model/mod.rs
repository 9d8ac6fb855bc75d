//! The shape data model and the per-kind system implementations.
//!
//! `Shape` is a closed tagged union; each variant lives in its own module
//! and implements the [`ShapeSystem`] contract. Dispatch is an exhaustive
//! match, so adding a variant without a system is a compile error rather
//! than a runtime miss; the [`ShapeError::UnknownShapeKind`] failure only
//! survives at the string-tag boundary ([`ShapeKind::from_tag`]).

use serde::{Deserialize, Serialize};

use vectorkit_core::error::ShapeError;

use crate::surface::DrawSurface;

mod ellipse;
mod line;
mod path;
mod polygon;
mod rectangle;
mod star;
mod triangle;

pub use ellipse::Ellipse;
pub use line::{Line, LINE_HIT_TOLERANCE};
pub use path::{PathCommand, PathShape};
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use star::Star;
pub use triangle::Triangle;

/// A point in canvas pixel space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned bounding box in y-down coordinates.
///
/// After any computation over a non-empty point set, `top <= bottom` and
/// `left <= right`. An empty point set leaves the infinite seed values,
/// giving an inverted box that [`contains`](Self::contains) rejects for
/// every finite point; callers that care must treat it as degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Aabb {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Folds the extents of a point set.
    pub fn from_points(points: &[Point]) -> Self {
        let mut extents = Self {
            top: f64::INFINITY,
            right: f64::NEG_INFINITY,
            bottom: f64::NEG_INFINITY,
            left: f64::INFINITY,
        };

        for p in points {
            extents.top = extents.top.min(p.y);
            extents.right = extents.right.max(p.x);
            extents.bottom = extents.bottom.max(p.y);
            extents.left = extents.left.min(p.x);
        }

        extents
    }

    /// Inclusive containment check.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        y >= self.top && x <= self.right && y <= self.bottom && x >= self.left
    }

    /// True when the box is inverted (e.g. built from no points).
    pub fn is_degenerate(&self) -> bool {
        !(self.top <= self.bottom && self.left <= self.right)
    }
}

/// Optional presentation attributes carried alongside geometry.
///
/// The geometry core never interprets these; the renderer applies them as
/// surface state around the draw calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
}

impl ShapeStyle {
    pub fn is_empty(&self) -> bool {
        self.stroke_width.is_none() && self.stroke_color.is_none() && self.fill_color.is_none()
    }
}

/// The contract every shape kind satisfies.
///
/// `draw` is the only operation with side effects, and those are confined
/// to the supplied surface. `contains_point` and `aabb` are pure and
/// deterministic for identical inputs.
pub trait ShapeSystem {
    /// Emits the shape's path primitives against the surface.
    fn draw(&self, surface: &mut dyn DrawSurface);

    /// Hit-test: does `(x, y)` lie within the shape's visual area?
    fn contains_point(&self, x: f64, y: f64) -> bool;

    /// The shape's axis-aligned bounding box.
    fn aabb(&self) -> Aabb;
}

/// Tag distinguishing the shape variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rect,
    Ellipse,
    Triangle,
    Star,
    Polygon,
    Path,
    Line,
}

impl ShapeKind {
    /// The wire tag for this kind.
    pub fn as_tag(&self) -> &'static str {
        match self {
            ShapeKind::Rect => "rect",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Star => "star",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Path => "path",
            ShapeKind::Line => "line",
        }
    }

    /// Resolves a wire tag to a kind.
    ///
    /// An unrecognized tag is an integration bug (a kind exists somewhere
    /// without a system here), surfaced as
    /// [`ShapeError::UnknownShapeKind`].
    pub fn from_tag(tag: &str) -> Result<Self, ShapeError> {
        match tag {
            "rect" => Ok(ShapeKind::Rect),
            "ellipse" => Ok(ShapeKind::Ellipse),
            "triangle" => Ok(ShapeKind::Triangle),
            "star" => Ok(ShapeKind::Star),
            "polygon" => Ok(ShapeKind::Polygon),
            "path" => Ok(ShapeKind::Path),
            "line" => Ok(ShapeKind::Line),
            _ => Err(ShapeError::UnknownShapeKind {
                tag: tag.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A drawable shape. The kind tag is fixed at construction; geometry fields
/// are mutated only by the owning document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Rect(Rectangle),
    Ellipse(Ellipse),
    Triangle(Triangle),
    Star(Star),
    Polygon(Polygon),
    Path(PathShape),
    Line(Line),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rect(_) => ShapeKind::Rect,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Star(_) => ShapeKind::Star,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Path(_) => ShapeKind::Path,
            Shape::Line(_) => ShapeKind::Line,
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Rect(s) => &s.style,
            Shape::Ellipse(s) => &s.style,
            Shape::Triangle(s) => &s.style,
            Shape::Star(s) => &s.style,
            Shape::Polygon(s) => &s.style,
            Shape::Path(s) => &s.style,
            Shape::Line(s) => &s.style,
        }
    }
}

impl ShapeSystem for Shape {
    fn draw(&self, surface: &mut dyn DrawSurface) {
        match self {
            Shape::Rect(s) => s.draw(surface),
            Shape::Ellipse(s) => s.draw(surface),
            Shape::Triangle(s) => s.draw(surface),
            Shape::Star(s) => s.draw(surface),
            Shape::Polygon(s) => s.draw(surface),
            Shape::Path(s) => s.draw(surface),
            Shape::Line(s) => s.draw(surface),
        }
    }

    fn contains_point(&self, x: f64, y: f64) -> bool {
        match self {
            Shape::Rect(s) => s.contains_point(x, y),
            Shape::Ellipse(s) => s.contains_point(x, y),
            Shape::Triangle(s) => s.contains_point(x, y),
            Shape::Star(s) => s.contains_point(x, y),
            Shape::Polygon(s) => s.contains_point(x, y),
            Shape::Path(s) => s.contains_point(x, y),
            Shape::Line(s) => s.contains_point(x, y),
        }
    }

    fn aabb(&self) -> Aabb {
        match self {
            Shape::Rect(s) => s.aabb(),
            Shape::Ellipse(s) => s.aabb(),
            Shape::Triangle(s) => s.aabb(),
            Shape::Star(s) => s.aabb(),
            Shape::Polygon(s) => s.aabb(),
            Shape::Path(s) => s.aabb(),
            Shape::Line(s) => s.aabb(),
        }
    }
}
