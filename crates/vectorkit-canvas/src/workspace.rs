//! Workspace document store.
//!
//! Owns the shape list and the active tool mode. This is the only place
//! shape geometry is mutated; the shape systems consume shapes read-only.
//! Z-order is insertion order, and hit-testing scans topmost-first.

use tracing::debug;

use vectorkit_core::error::DocumentError;

use crate::model::{
    Ellipse, Line, PathCommand, PathShape, Point, Polygon, Rectangle, Shape, ShapeKind,
    ShapeSystem, Star, Triangle,
};
use crate::surface::DrawSurface;

/// The active editing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Select,
    Rectangle,
    Ellipse,
    Triangle,
    Star,
    Polygon,
    Line,
    Path,
}

/// A shape placed in the document, with identity and selection state.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingObject {
    pub id: u64,
    pub name: String,
    pub shape: Shape,
    pub selected: bool,
}

impl DrawingObject {
    fn new(id: u64, shape: Shape) -> Self {
        let name = match shape.kind() {
            ShapeKind::Rect => "Rectangle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Star => "Star",
            ShapeKind::Polygon => "Polygon",
            ShapeKind::Path => "Path",
            ShapeKind::Line => "Line",
        };
        Self {
            id,
            name: format!("{} {}", name, id),
            shape,
            selected: false,
        }
    }
}

/// Document state: shape list plus tool mode.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    objects: Vec<DrawingObject>,
    next_id: u64,
    tool: ToolMode,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the active tool.
    pub fn set_tool(&mut self, tool: ToolMode) {
        self.tool = tool;
    }

    /// The active tool.
    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    /// Adds a shape on top of the z-order, returning its id.
    pub fn add(&mut self, shape: Shape) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        debug!("Adding {} shape with id {}", shape.kind(), id);
        self.objects.push(DrawingObject::new(id, shape));
        id
    }

    pub fn add_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) -> u64 {
        let mut rect = Rectangle::new(x, y, width, height);
        rect.style.stroke_color = Some("#fff".to_string());
        self.add(Shape::Rect(rect))
    }

    pub fn add_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) -> u64 {
        let mut ellipse = Ellipse::new(cx, cy, rx, ry);
        ellipse.style.stroke_color = Some("#ec111a".to_string());
        self.add(Shape::Ellipse(ellipse))
    }

    pub fn add_triangle(&mut self, a: Point, b: Point, c: Point) -> u64 {
        let mut triangle = Triangle::new(a, b, c);
        triangle.style.stroke_color = Some("#f2609e".to_string());
        self.add(Shape::Triangle(triangle))
    }

    pub fn add_star(
        &mut self,
        cx: f64,
        cy: f64,
        spikes: u32,
        outer_radius: f64,
        inner_radius: f64,
    ) -> u64 {
        let mut star = Star::new(cx, cy, spikes, outer_radius, inner_radius);
        star.style.stroke_color = Some("#7849b8".to_string());
        star.style.stroke_width = Some(4.0);
        star.style.fill_color = Some("#c1d3fe".to_string());
        self.add(Shape::Star(star))
    }

    pub fn add_polygon(&mut self, cx: f64, cy: f64, sides: u32, radius: f64) -> u64 {
        let mut polygon = Polygon::new(cx, cy, sides, radius);
        polygon.style.stroke_color = Some("#138468".to_string());
        self.add(Shape::Polygon(polygon))
    }

    pub fn add_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> u64 {
        let mut line = Line::new(x1, y1, x2, y2);
        line.style.stroke_color = Some("#fb6330".to_string());
        self.add(Shape::Line(line))
    }

    pub fn add_path(&mut self, commands: Vec<PathCommand>) -> u64 {
        let mut path = PathShape::new(commands);
        path.style.stroke_color = Some("#ffd42f".to_string());
        path.style.fill_color = Some("#2db1ba".to_string());
        self.add(Shape::Path(path))
    }

    /// Removes an object by id.
    pub fn remove(&mut self, id: u64) -> Result<DrawingObject, DocumentError> {
        match self.objects.iter().position(|obj| obj.id == id) {
            Some(index) => {
                debug!("Removing shape {}", id);
                Ok(self.objects.remove(index))
            }
            None => Err(DocumentError::ShapeNotFound { id }),
        }
    }

    /// Marks an object selected or not.
    pub fn set_selected(&mut self, id: u64, selected: bool) -> Result<(), DocumentError> {
        match self.get_mut(id) {
            Some(obj) => {
                obj.selected = selected;
                Ok(())
            }
            None => Err(DocumentError::ShapeNotFound { id }),
        }
    }

    /// Ids of the selected objects, bottom first.
    pub fn selected_ids(&self) -> Vec<u64> {
        self.objects
            .iter()
            .filter(|obj| obj.selected)
            .map(|obj| obj.id)
            .collect()
    }

    /// Clears every selection flag.
    pub fn deselect_all(&mut self) {
        for obj in &mut self.objects {
            obj.selected = false;
        }
    }

    pub fn get(&self, id: u64) -> Option<&DrawingObject> {
        self.objects.iter().find(|obj| obj.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut DrawingObject> {
        self.objects.iter_mut().find(|obj| obj.id == id)
    }

    /// All objects in z-order, bottom first.
    pub fn objects(&self) -> &[DrawingObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Finds the topmost object containing `(x, y)`, if any.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<u64> {
        self.objects
            .iter()
            .rev()
            .find(|obj| obj.shape.contains_point(x, y))
            .map(|obj| obj.id)
    }

    /// Draws every object bottom-up against the surface.
    pub fn draw_all(&self, surface: &mut dyn DrawSurface) {
        for obj in &self.objects {
            obj.shape.draw(surface);
        }
    }
}
