//! Boundary-rewriting moves and their validity predicates.
//!
//! | move     | guard            | effect                                   |
//! |----------|------------------|------------------------------------------|
//! | `embed`  | `is_embeddable`  | drop a reflex vertex, polygon grows      |
//! | `insert` | `is_insertable`  | splice an outside point onto an edge     |
//! | `dig`    | `is_digable`     | splice an inside point onto an edge      |
//! | `remove` | `is_removable`   | drop a convex vertex, it becomes outside |
//!
//! Operators do not re-check their guard; callers evaluate the predicate first.
//! Vertices are addressed by their index in the (canonically rotated) polygon.

use nalgebra::Vector2;

use crate::geom::predicates::{
    distance, is_left_turn, is_right_turn, orient, point_in_triangle, segment_hits_polygon,
};
use crate::geom::{Point, PointSet, Polygon};

/// Vertex `i` is reflex, the chord `pred(i) → succ(i)` crosses nothing, and the
/// cut-off triangle holds no point of `out(P)`.
pub fn is_embeddable(poly: &Polygon, i: usize, outside: &[Point]) -> bool {
    let (a, v, b) = (poly.pred(i), poly.vertex(i), poly.succ(i));
    if !is_right_turn(orient(a.pos, v.pos, b.pos)) {
        return false;
    }
    if segment_hits_polygon(a, b, poly) {
        tracing::trace!(vertex = v.rank, "not embeddable: chord crosses boundary");
        return false;
    }
    if outside
        .iter()
        .any(|q| point_in_triangle(a.pos, b.pos, v.pos, q.pos))
    {
        tracing::trace!(vertex = v.rank, "not embeddable: triangle holds an outside point");
        return false;
    }
    true
}

pub fn embed(poly: &Polygon, i: usize) -> Polygon {
    poly.without(i)
}

/// `q ∈ out(P)` lies beyond edge `(p_i, succ(p_i))`, both new edges stay clear of
/// the boundary, and no other outside point falls in the new triangle.
pub fn is_insertable(q: &Point, poly: &Polygon, i: usize, outside: &[Point]) -> bool {
    let (a, b) = (poly.vertex(i), poly.succ(i));
    if !is_left_turn(orient(a.pos, q.pos, b.pos)) {
        return false;
    }
    if segment_hits_polygon(a, q, poly) || segment_hits_polygon(q, b, poly) {
        tracing::trace!(point = q.rank, edge = a.rank, "not insertable: crosses boundary");
        return false;
    }
    if outside
        .iter()
        .filter(|o| *o != q)
        .any(|o| point_in_triangle(a.pos, q.pos, b.pos, o.pos))
    {
        tracing::trace!(point = q.rank, edge = a.rank, "not insertable: traps an outside point");
        return false;
    }
    true
}

pub fn insert(poly: &Polygon, i: usize, q: &Point) -> Polygon {
    poly.with_inserted(i, *q)
}

/// `q ∈ in(P)` lies on the interior side of edge `(p_i, succ(p_i))`, both new
/// edges stay clear of the boundary, and the triangle is empty of `S`.
pub fn is_digable(poly: &Polygon, i: usize, q: &Point, set: &PointSet) -> bool {
    let (a, b) = (poly.vertex(i), poly.succ(i));
    if !is_right_turn(orient(a.pos, q.pos, b.pos)) {
        return false;
    }
    if segment_hits_polygon(a, q, poly) || segment_hits_polygon(q, b, poly) {
        tracing::trace!(point = q.rank, edge = a.rank, "not digable: crosses boundary");
        return false;
    }
    if set
        .iter()
        .filter(|s| *s != q && *s != a && *s != b)
        .any(|s| point_in_triangle(a.pos, q.pos, b.pos, s.pos))
    {
        tracing::trace!(point = q.rank, edge = a.rank, "not digable: triangle not empty");
        return false;
    }
    true
}

pub fn dig(poly: &Polygon, i: usize, q: &Point) -> Polygon {
    poly.with_inserted(i, *q)
}

/// Budget left (`|out(P)| < k`), vertex `i` is convex, the chord crosses
/// nothing, and the cut-off triangle is empty of `S`.
pub fn is_removable(
    poly: &Polygon,
    i: usize,
    outside: &[Point],
    set: &PointSet,
    k: usize,
) -> bool {
    if outside.len() >= k {
        return false;
    }
    let (a, v, b) = (poly.pred(i), poly.vertex(i), poly.succ(i));
    if !is_left_turn(orient(a.pos, v.pos, b.pos)) {
        return false;
    }
    if segment_hits_polygon(a, b, poly) {
        tracing::trace!(vertex = v.rank, "not removable: chord crosses boundary");
        return false;
    }
    if set
        .iter()
        .filter(|s| *s != a && *s != v && *s != b)
        .any(|s| point_in_triangle(a.pos, b.pos, v.pos, s.pos))
    {
        tracing::trace!(vertex = v.rank, "not removable: triangle not empty");
        return false;
    }
    true
}

pub fn remove(poly: &Polygon, i: usize) -> Polygon {
    poly.without(i)
}

/// Distance from `q` to the midpoint of edge `(p_i, succ(p_i))`.
///
/// Only meaningful when `q` is insertable to that edge.
pub fn edge_midpoint_distance(poly: &Polygon, i: usize, q: &Point) -> f64 {
    let mid: Vector2<f64> = (poly.vertex(i).pos + poly.succ(i).pos) * 0.5;
    distance(mid, q.pos)
}

/// Length of edge `(p_i, succ(p_i))`.
#[inline]
pub fn edge_length(poly: &Polygon, i: usize) -> f64 {
    distance(poly.vertex(i).pos, poly.succ(i).pos)
}

/// Indices of all embeddable vertices, in boundary order.
pub fn embeddable_vertices(poly: &Polygon, outside: &[Point]) -> Vec<usize> {
    (0..poly.len())
        .filter(|&i| is_embeddable(poly, i, outside))
        .collect()
}

/// `iout(P)`: outside points insertable to at least one edge.
pub fn insertable_points(poly: &Polygon, outside: &[Point]) -> Vec<Point> {
    outside
        .iter()
        .filter(|q| (0..poly.len()).any(|i| is_insertable(q, poly, i, outside)))
        .copied()
        .collect()
}
