//! Shared geometry primitives used by the shape systems.
//!
//! These are pure functions: no shape state, no surface access. Degenerate
//! input (zero radii, empty point lists, zero-length segments) degrades to
//! degenerate output instead of failing; callers check where it matters.

use std::f64::consts::PI;

use crate::model::{Aabb, PathCommand, Point};

/// Signed area-derived quantity for the ordered triple `(p1, p2, p3)`.
///
/// The sign tells which side of the directed line `p2 -> p3` the point `p1`
/// lies on; zero means collinear.
pub fn orientation_sign(p1: Point, p2: Point, p3: Point) -> f64 {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}

/// Tests whether `pt` lies inside the triangle `(v1, v2, v3)`.
///
/// Edges and vertices count as inside: the point is rejected only when the
/// three edge orientations mix strictly positive and strictly negative
/// signs, so either winding order works. NaN coordinates make every sign
/// comparison false and therefore test as inside.
pub fn point_in_triangle(pt: Point, v1: Point, v2: Point, v3: Point) -> bool {
    let d1 = orientation_sign(pt, v1, v2);
    let d2 = orientation_sign(pt, v2, v3);
    let d3 = orientation_sign(pt, v3, v1);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}

/// Approximate polygon containment: tests the point against the AABB of the
/// vertex set, not the polygon itself.
///
/// This reports false positives near concave regions and corners. A proper
/// ray-casting or winding-number test is a known open item; selection
/// behavior depends on today's loose answer, so don't tighten it here.
pub fn point_in_polygon_approx(pt: Point, points: &[Point]) -> bool {
    Aabb::from_points(points).contains(pt.x, pt.y)
}

/// Computes the vertices of a star in winding order.
///
/// Starts at rotation `3π/2` (first spike pointing up in y-down
/// coordinates) and alternates outer and inner vertices, advancing by
/// `π/spikes` after each, for `2 * spikes` vertices total.
pub fn star_vertices(
    cx: f64,
    cy: f64,
    spikes: u32,
    outer_radius: f64,
    inner_radius: f64,
) -> Vec<Point> {
    let step = PI / spikes as f64;
    let mut rot = PI / 2.0 * 3.0;
    let mut points = Vec::with_capacity(spikes as usize * 2);

    for _ in 0..spikes {
        points.push(Point::new(
            cx + rot.cos() * outer_radius,
            cy + rot.sin() * outer_radius,
        ));
        rot += step;

        points.push(Point::new(
            cx + rot.cos() * inner_radius,
            cy + rot.sin() * inner_radius,
        ));
        rot += step;
    }

    points
}

/// Computes the vertices of a regular polygon in drawing order, centered at
/// `(cx, cy)` with every vertex at distance `radius`.
pub fn polygon_vertices(cx: f64, cy: f64, sides: u32, radius: f64) -> Vec<Point> {
    let angle_step = 2.0 * PI / sides as f64;
    let mut points = Vec::with_capacity(sides as usize);

    for i in 0..sides {
        let angle = angle_step * i as f64;
        points.push(Point::new(
            cx + angle.cos() * radius,
            cy + angle.sin() * radius,
        ));
    }

    points
}

/// Reduces a command sequence to the polyline of points it visits.
///
/// Cubic segments contribute their endpoint only; control points are
/// discarded, so pronounced curves flatten to a straight hop. `Close` emits
/// the subpath start and resets the current point to it. Malformed
/// sequences (no leading `MoveTo`) fall back to an implicit `(0, 0)` start.
pub fn flatten_path(commands: &[PathCommand]) -> Vec<Point> {
    let mut points = Vec::with_capacity(commands.len());
    let mut start = Point::new(0.0, 0.0);
    let mut current = Point::new(0.0, 0.0);

    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo { x, y } => {
                current = Point::new(x, y);
                start = current;
                points.push(current);
            }
            PathCommand::LineTo { x, y } => {
                current = Point::new(x, y);
                points.push(current);
            }
            PathCommand::CubicTo { x, y, .. } => {
                // Endpoint only; see the doc comment above.
                current = Point::new(x, y);
                points.push(current);
            }
            PathCommand::Close => {
                points.push(start);
                current = start;
            }
        }
    }

    points
}

fn distance_squared(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Squared distance from `pt` to the segment `a -> b`.
///
/// Projects `pt` onto the segment's line, clamps the parameter to `[0, 1]`,
/// and measures to the clamped projection. A zero-length segment degrades
/// to plain point distance.
pub fn point_to_segment_distance_squared(pt: Point, a: Point, b: Point) -> f64 {
    let len_sq = distance_squared(a, b);
    if len_sq == 0.0 {
        return distance_squared(pt, a);
    }

    let t = ((pt.x - a.x) * (b.x - a.x) + (pt.y - a.y) * (b.y - a.y)) / len_sq;
    let t = t.clamp(0.0, 1.0);

    distance_squared(
        pt,
        Point::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y)),
    )
}

/// Distance from `pt` to the segment `a -> b`.
pub fn point_to_segment_distance(pt: Point, a: Point, b: Point) -> f64 {
    point_to_segment_distance_squared(pt, a, b).sqrt()
}
