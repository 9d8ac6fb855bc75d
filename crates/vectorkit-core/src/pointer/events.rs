//! Pointer event types.

use serde::{Deserialize, Serialize};

/// The kind of pointer interaction an event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerEventKind {
    /// Button pressed.
    Down,
    /// Pointer moved.
    Move,
    /// Button released.
    Up,
    /// Double click.
    DoubleClick,
}

/// A pointer event in surface coordinates (canvas pixel space, y-down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerEventKind,
    /// X position on the surface.
    pub x: f64,
    /// Y position on the surface.
    pub y: f64,
}

impl PointerEvent {
    /// Creates a new pointer event.
    pub fn new(kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self { kind, x, y }
    }

    /// Creates a button-press event.
    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Down, x, y)
    }

    /// Creates a move event.
    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    /// Creates a button-release event.
    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Up, x, y)
    }

    /// Creates a double-click event.
    pub fn double_click(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::DoubleClick, x, y)
    }
}
