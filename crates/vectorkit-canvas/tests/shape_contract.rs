//! Exercises the three-operation contract across every shape kind.

use std::f64::consts::TAU;

use vectorkit_canvas::model::{
    Aabb, Ellipse, Line, PathCommand, PathShape, Point, Polygon, Rectangle, Shape, Star, Triangle,
};
use vectorkit_canvas::surface::{PathTrace, TraceOp};
use vectorkit_canvas::ShapeSystem;

#[test]
fn rectangle_contract() {
    let rect = Rectangle::new(0.0, 0.0, 10.0, 10.0);

    assert!(rect.contains_point(5.0, 5.0));
    assert!(rect.contains_point(0.0, 0.0), "corners are inclusive");
    assert!(rect.contains_point(10.0, 10.0));
    assert!(!rect.contains_point(11.0, 5.0));
    assert!(!rect.contains_point(5.0, -0.1));

    assert_eq!(rect.aabb(), Aabb::new(0.0, 10.0, 10.0, 0.0));
}

#[test]
fn ellipse_boundary_is_inclusive() {
    let ellipse = Ellipse::new(0.0, 0.0, 5.0, 3.0);

    assert!(ellipse.contains_point(5.0, 0.0));
    assert!(ellipse.contains_point(0.0, -3.0));
    assert!(!ellipse.contains_point(6.0, 0.0));
    assert!(!ellipse.contains_point(5.0 + 1e-9, 0.0));
    // Inside the AABB but outside the curve.
    assert!(!ellipse.contains_point(4.5, 2.5));

    assert_eq!(ellipse.aabb(), Aabb::new(-3.0, 5.0, 3.0, -5.0));
}

#[test]
fn triangle_contract() {
    let tri = Triangle::from_coords(0.0, 0.0, 10.0, 0.0, 0.0, 10.0);

    assert!(tri.contains_point(1.0, 1.0));
    assert!(!tri.contains_point(9.0, 9.0));
    // Far outside its own AABB.
    assert!(!tri.contains_point(100.0, -40.0));

    assert_eq!(tri.aabb(), Aabb::new(0.0, 10.0, 10.0, 0.0));
}

#[test]
fn line_hit_tolerance() {
    let line = Line::new(0.0, 0.0, 10.0, 0.0);

    assert!(line.contains_point(5.0, 3.0));
    assert!(line.contains_point(5.0, 5.0), "tolerance is inclusive");
    assert!(!line.contains_point(5.0, 6.0));

    assert_eq!(line.aabb(), Aabb::new(0.0, 10.0, 0.0, 0.0));
}

#[test]
fn path_aabb_covers_visited_points() {
    let path = PathShape::new(vec![
        PathCommand::MoveTo { x: 0.0, y: 0.0 },
        PathCommand::LineTo { x: 10.0, y: 0.0 },
        PathCommand::LineTo { x: 10.0, y: 10.0 },
        PathCommand::Close,
    ]);

    assert_eq!(path.aabb(), Aabb::new(0.0, 10.0, 10.0, 0.0));
    // AABB approximation: this point is outside the triangle the path
    // outlines, but the hit-test accepts it.
    assert!(path.contains_point(1.0, 9.0));
    assert!(!path.contains_point(11.0, 5.0));
}

#[test]
fn star_and_polygon_use_vertex_extents() {
    let star = Star::new(0.0, 0.0, 5, 10.0, 4.0);
    let aabb = star.aabb();
    assert!((aabb.top - (-10.0)).abs() < 1e-9, "first spike points up");
    assert!(aabb.bottom < 10.0, "no vertex at the bottom pole");
    assert!(star.contains_point(0.0, 0.0));
    assert!(!star.contains_point(0.0, -10.5));

    let polygon = Polygon::new(0.0, 0.0, 6, 10.0);
    let aabb = polygon.aabb();
    assert!((aabb.right - 10.0).abs() < 1e-9, "vertex at angle zero");
    assert!(polygon.contains_point(0.0, 0.0));
    assert!(!polygon.contains_point(10.5, 0.0));
}

#[test]
fn degenerate_shapes_reject_everything() {
    let ellipse = Ellipse::new(0.0, 0.0, 0.0, 0.0);
    assert!(!ellipse.contains_point(0.0, 0.0));

    let star = Star::new(0.0, 0.0, 0, 10.0, 4.0);
    assert!(star.aabb().is_degenerate());
    assert!(!star.contains_point(0.0, 0.0));

    let path = PathShape::new(vec![]);
    assert!(path.aabb().is_degenerate());
}

#[test]
fn nan_coordinates_never_hit() {
    let rect = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    assert!(!rect.contains_point(f64::NAN, 5.0));

    let ellipse = Ellipse::new(0.0, 0.0, 5.0, 3.0);
    assert!(!ellipse.contains_point(f64::NAN, f64::NAN));

    let line = Line::new(0.0, 0.0, 10.0, 0.0);
    assert!(!line.contains_point(5.0, f64::NAN));

    let star = Star::new(0.0, 0.0, 5, 10.0, 4.0);
    assert!(!star.contains_point(f64::NAN, 0.0));
}

#[test]
fn triangle_nan_coordinates_pass_the_inclusive_test() {
    // NaN edge signs are neither strictly negative nor strictly positive,
    // so the inclusive sign test accepts the point. IEEE comparison
    // semantics propagate with no validation layer; this mirrors the
    // canvas renderer this model was ported from.
    let tri = Triangle::from_coords(0.0, 0.0, 10.0, 0.0, 0.0, 10.0);
    assert!(tri.contains_point(f64::NAN, 5.0));
    assert!(tri.contains_point(f64::NAN, f64::NAN));
}

#[test]
fn dispatch_through_the_tagged_union() {
    let shapes = vec![
        Shape::Rect(Rectangle::new(0.0, 0.0, 10.0, 10.0)),
        Shape::Ellipse(Ellipse::new(5.0, 5.0, 5.0, 5.0)),
        Shape::Triangle(Triangle::from_coords(0.0, 0.0, 10.0, 0.0, 0.0, 10.0)),
        Shape::Star(Star::new(5.0, 5.0, 5, 5.0, 2.0)),
        Shape::Polygon(Polygon::new(5.0, 5.0, 6, 5.0)),
        Shape::Path(PathShape::new(vec![
            PathCommand::MoveTo { x: 0.0, y: 0.0 },
            PathCommand::LineTo { x: 10.0, y: 10.0 },
        ])),
        Shape::Line(Line::new(0.0, 10.0, 10.0, 0.0)),
    ];

    for shape in &shapes {
        assert!(
            shape.contains_point(5.0, 5.0),
            "{} should contain (5, 5)",
            shape.kind()
        );
        let aabb = shape.aabb();
        assert!(aabb.top <= aabb.bottom, "{} aabb inverted", shape.kind());
        assert!(aabb.left <= aabb.right, "{} aabb inverted", shape.kind());
    }
}

#[test]
fn rectangle_draw_trace() {
    let mut trace = PathTrace::new();
    Rectangle::new(1.0, 2.0, 3.0, 4.0).draw(&mut trace);

    assert_eq!(
        trace.ops(),
        &[
            TraceOp::BeginPath,
            TraceOp::Rect {
                x: 1.0,
                y: 2.0,
                width: 3.0,
                height: 4.0
            },
            TraceOp::ClosePath,
        ]
    );

    // A cleared trace records the next draw from scratch.
    trace.clear();
    Rectangle::new(0.0, 0.0, 5.0, 5.0).draw(&mut trace);
    assert_eq!(trace.ops().len(), 3);
    assert_eq!(
        trace.ops()[1],
        TraceOp::Rect {
            x: 0.0,
            y: 0.0,
            width: 5.0,
            height: 5.0
        }
    );
}

#[test]
fn ellipse_draws_a_full_turn_without_close() {
    let mut trace = PathTrace::new();
    Ellipse::new(0.0, 0.0, 5.0, 3.0).draw(&mut trace);

    assert_eq!(
        trace.ops(),
        &[
            TraceOp::BeginPath,
            TraceOp::Ellipse {
                cx: 0.0,
                cy: 0.0,
                rx: 5.0,
                ry: 3.0,
                rotation: 0.0,
                start_angle: 0.0,
                end_angle: TAU,
            },
        ]
    );
}

#[test]
fn line_draws_an_open_path() {
    let mut trace = PathTrace::new();
    Line::new(0.0, 0.0, 10.0, 0.0).draw(&mut trace);

    assert_eq!(
        trace.ops(),
        &[
            TraceOp::BeginPath,
            TraceOp::MoveTo { x: 0.0, y: 0.0 },
            TraceOp::LineTo { x: 10.0, y: 0.0 },
        ]
    );
}

#[test]
fn star_draw_closes_the_outline() {
    let mut trace = PathTrace::new();
    Star::new(0.0, 0.0, 5, 10.0, 4.0).draw(&mut trace);

    let ops = trace.ops();
    assert_eq!(ops.len(), 12, "begin + 10 vertices + close");
    assert_eq!(ops[0], TraceOp::BeginPath);
    assert!(matches!(ops[1], TraceOp::MoveTo { .. }));
    assert!(ops[2..11]
        .iter()
        .all(|op| matches!(op, TraceOp::LineTo { .. })));
    assert_eq!(ops[11], TraceOp::ClosePath);
}

#[test]
fn short_paths_draw_nothing() {
    let mut trace = PathTrace::new();
    PathShape::new(vec![PathCommand::MoveTo { x: 1.0, y: 1.0 }]).draw(&mut trace);
    assert!(trace.is_empty());

    PathShape::new(vec![]).draw(&mut trace);
    assert!(trace.is_empty());
}

#[test]
fn path_commands_map_one_to_one() {
    let mut trace = PathTrace::new();
    PathShape::new(vec![
        PathCommand::MoveTo { x: 0.0, y: 0.0 },
        PathCommand::CubicTo {
            x1: 1.0,
            y1: 2.0,
            x2: 3.0,
            y2: 4.0,
            x: 5.0,
            y: 6.0,
        },
        PathCommand::Close,
    ])
    .draw(&mut trace);

    assert_eq!(
        trace.ops(),
        &[
            TraceOp::BeginPath,
            TraceOp::MoveTo { x: 0.0, y: 0.0 },
            TraceOp::CubicTo {
                x1: 1.0,
                y1: 2.0,
                x2: 3.0,
                y2: 4.0,
                x: 5.0,
                y: 6.0
            },
            TraceOp::ClosePath,
        ]
    );
}

#[test]
fn shapes_serialize_with_kind_tags() {
    let shape = Shape::Rect(Rectangle::new(0.0, 0.0, 10.0, 5.0));
    let value = serde_json::to_value(&shape).unwrap();
    assert_eq!(value["kind"], "rect");
    assert_eq!(value["width"], 10.0);

    let back: Shape = serde_json::from_value(value).unwrap();
    assert_eq!(back, shape);

    let cmd = PathCommand::MoveTo { x: 1.0, y: 2.0 };
    let value = serde_json::to_value(cmd).unwrap();
    assert_eq!(value["command"], "M");

    let closed: PathCommand = serde_json::from_str(r#"{"command":"Z"}"#).unwrap();
    assert_eq!(closed, PathCommand::Close);
}

#[test]
fn ellipse_round_trips_through_json() {
    let mut ellipse = Ellipse::new(3.0, -2.0, 4.0, 1.5);
    ellipse.style.fill_color = Some("#2db1ba".to_string());
    let shape = Shape::Ellipse(ellipse);

    let json = serde_json::to_string(&shape).unwrap();
    let back: Shape = serde_json::from_str(&json).unwrap();
    assert_eq!(back, shape);
}
