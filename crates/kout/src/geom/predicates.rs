//! Orientation-based predicates.
//!
//! One sign convention for the whole crate: `orient(a, b, c)` is the signed
//! doubled area of triangle `abc`, positive when `a → b → c` turns left (CCW).
//! Everything else is phrased through `is_left_turn` / `is_right_turn`.

use nalgebra::Vector2;

use super::types::{Point, Polygon};

/// Signed doubled area of `abc` (`(b - a) × (c - a)`).
#[inline]
pub fn orient(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    (b - a).perp(&(c - a))
}

#[inline]
pub fn is_left_turn(det: f64) -> bool {
    det > 0.0
}

#[inline]
pub fn is_right_turn(det: f64) -> bool {
    det < 0.0
}

/// Euclidean distance.
#[inline]
pub fn distance(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    (p - q).norm()
}

/// `p` strictly inside triangle `abc` (either orientation of `abc`).
pub fn point_in_triangle(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    p: Vector2<f64>,
) -> bool {
    let o1 = orient(a, b, p);
    let o2 = orient(b, c, p);
    let o3 = orient(c, a, p);
    (is_left_turn(o1) && is_left_turn(o2) && is_left_turn(o3))
        || (is_right_turn(o1) && is_right_turn(o2) && is_right_turn(o3))
}

#[inline]
fn opposite_sides(o1: f64, o2: f64) -> bool {
    (is_left_turn(o1) && is_right_turn(o2)) || (is_right_turn(o1) && is_left_turn(o2))
}

/// Open segments `ab` and `uv` cross transversally.
pub fn segments_properly_intersect(
    a: Vector2<f64>,
    b: Vector2<f64>,
    u: Vector2<f64>,
    v: Vector2<f64>,
) -> bool {
    opposite_sides(orient(u, v, a), orient(u, v, b))
        && opposite_sides(orient(a, b, u), orient(a, b, v))
}

/// Segment `uv` properly crosses an edge of `poly` that does not touch `u` or `v`.
pub fn segment_hits_polygon(u: &Point, v: &Point, poly: &Polygon) -> bool {
    poly.edges().any(|(p, q)| {
        let touches = p == u || p == v || q == u || q == v;
        !touches && segments_properly_intersect(p.pos, q.pos, u.pos, v.pos)
    })
}

/// Even-odd test with a horizontal ray from `p` towards `-x`.
///
/// An edge is counted iff exactly one endpoint lies strictly above the line
/// through `p` (half-open rule, so a vertex on the line is counted once) and
/// the edge passes on the `-x` side of `p`, decided by `orient(upper, lower, p)`.
pub fn point_in_polygon(p: Vector2<f64>, poly: &Polygon) -> bool {
    let mut crossings = 0usize;
    for (a, b) in poly.edges() {
        if (a.pos.y > p.y) == (b.pos.y > p.y) {
            continue;
        }
        let (upper, lower) = if a.pos.y > b.pos.y {
            (a.pos, b.pos)
        } else {
            (b.pos, a.pos)
        };
        if is_left_turn(orient(upper, lower, p)) {
            crossings += 1;
        }
    }
    crossings % 2 == 1
}
