//! # VectorKit Canvas
//!
//! This crate is the geometry core of VectorKit: a small closed set of 2D
//! vector shapes, each of which can draw itself against an abstract surface,
//! answer point-containment queries for interactive selection, and report
//! its axis-aligned bounding box.
//!
//! ## Core Components
//!
//! - **Geometry**: pure math primitives (orientation tests, vertex
//!   generation, path flattening, point-to-segment distance)
//! - **Model**: the `Shape` tagged union, one module per variant, each
//!   implementing the three-operation [`ShapeSystem`](model::ShapeSystem)
//!   contract
//! - **Surface**: the abstract [`DrawSurface`](surface::DrawSurface) that
//!   receives path primitives, plus a recording implementation for tests
//!   and export layers
//! - **Workspace**: the document store owning the shape list and tool mode
//!
//! ## Architecture
//!
//! ```text
//! Workspace (shape list, tool mode)
//!   └── Shape (rect, ellipse, triangle, star, polygon, path, line)
//!         ├── draw(surface)        -> path primitives
//!         ├── contains_point(x, y) -> hit-testing
//!         └── aabb()               -> bounding box
//!
//! Geometry (shared math used by every shape system)
//! ```
//!
//! Every operation is a pure function of the shape value passed in; the
//! core never stores shapes outside the workspace and never mutates
//! geometry during drawing or hit-testing.
//!
//! ## Usage
//!
//! ```rust
//! use vectorkit_canvas::model::{Rectangle, Shape, ShapeSystem};
//!
//! let shape = Shape::Rect(Rectangle::new(0.0, 0.0, 10.0, 10.0));
//! assert!(shape.contains_point(5.0, 5.0));
//! assert_eq!(shape.aabb().right, 10.0);
//! ```

pub mod geometry;
pub mod model;
pub mod surface;
pub mod workspace;

pub use model::{
    Aabb, Ellipse, Line, PathCommand, PathShape, Point, Polygon, Rectangle, Shape, ShapeKind,
    ShapeStyle, ShapeSystem, Star, Triangle,
};
pub use surface::{DrawSurface, PathTrace, TraceOp};
pub use workspace::{DrawingObject, ToolMode, Workspace};
