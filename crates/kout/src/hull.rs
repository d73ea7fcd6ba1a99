//! Graham scan; the CCW convex hull is the root of the reverse-search tree.

use std::cmp::Ordering;

use crate::geom::predicates::{distance, is_left_turn, is_right_turn, orient};
use crate::geom::{Point, PointSet, Polygon};

/// Pivot: smallest `x`, ties by smallest `y`.
fn pivot(points: &[Point]) -> Point {
    let mut p0 = points[0];
    for p in &points[1..] {
        if p.x() < p0.x() || (p.x() == p0.x() && p.y() < p0.y()) {
            p0 = *p;
        }
    }
    p0
}

/// `S` sorted CCW around the pivot (pivot first); ties by distance to the pivot.
pub fn sort_around_pivot(set: &PointSet) -> Vec<Point> {
    let p0 = pivot(set.points());
    let mut rest: Vec<Point> = set.iter().filter(|p| **p != p0).copied().collect();
    rest.sort_by(|p, q| {
        let o = orient(p0.pos, p.pos, q.pos);
        if is_left_turn(o) {
            Ordering::Less
        } else if is_right_turn(o) {
            Ordering::Greater
        } else {
            distance(p0.pos, p.pos).total_cmp(&distance(p0.pos, q.pos))
        }
    });
    let mut sorted = Vec::with_capacity(set.len());
    sorted.push(p0);
    sorted.extend(rest);
    sorted
}

/// Convex hull of `S`, counter-clockwise, in canonical rotation.
pub fn convex_hull(set: &PointSet) -> Polygon {
    let mut hull: Vec<Point> = Vec::with_capacity(set.len());
    for p in sort_around_pivot(set) {
        while hull.len() >= 2
            && is_right_turn(orient(hull[hull.len() - 2].pos, hull[hull.len() - 1].pos, p.pos))
        {
            hull.pop();
        }
        hull.push(p);
    }
    tracing::debug!(vertices = hull.len(), points = set.len(), "convex hull");
    Polygon::from_cycle(hull)
}
