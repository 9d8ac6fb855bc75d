//! Abstract drawing surface.
//!
//! Shape systems emit path primitives against a caller-supplied
//! [`DrawSurface`]; style state (stroke width, colors) is applied by the
//! surface owner around the draw call, never by the systems themselves.
//! [`PathTrace`] records the primitive stream for tests and for export
//! layers that want to replay it elsewhere.

/// The vector-path target a shape draws into.
///
/// Coordinates are canvas pixel space, y-down. Implementations decide what
/// "begin" and "close" mean for their backend (a real canvas starts a fresh
/// path; an SVG writer might open a `d` attribute).
pub trait DrawSurface {
    /// Starts a fresh path.
    fn begin_path(&mut self);

    /// Closes the current subpath back to its start point.
    fn close_path(&mut self);

    /// Sets the current point without drawing.
    fn move_to(&mut self, x: f64, y: f64);

    /// Draws a line from the current point.
    fn line_to(&mut self, x: f64, y: f64);

    /// Draws a cubic Bezier curve from the current point through the two
    /// control points to `(x, y)`.
    fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64);

    /// Draws an elliptical arc centered at `(cx, cy)` with radii
    /// `(rx, ry)`, rotated by `rotation`, sweeping `start_angle` to
    /// `end_angle` (radians).
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    );

    /// Draws an axis-aligned rectangle outline.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}

/// One recorded surface primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraceOp {
    BeginPath,
    ClosePath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CubicTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

/// A surface that records every primitive it receives.
#[derive(Debug, Clone, Default)]
pub struct PathTrace {
    ops: Vec<TraceOp>,
}

impl PathTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded primitives, in call order.
    pub fn ops(&self) -> &[TraceOp] {
        &self.ops
    }

    /// Drops everything recorded so far.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl DrawSurface for PathTrace {
    fn begin_path(&mut self) {
        self.ops.push(TraceOp::BeginPath);
    }

    fn close_path(&mut self) {
        self.ops.push(TraceOp::ClosePath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(TraceOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(TraceOp::LineTo { x, y });
    }

    fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.ops.push(TraceOp::CubicTo {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        });
    }

    fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    ) {
        self.ops.push(TraceOp::Ellipse {
            cx,
            cy,
            rx,
            ry,
            rotation,
            start_angle,
            end_angle,
        });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(TraceOp::Rect {
            x,
            y,
            width,
            height,
        });
    }
}
