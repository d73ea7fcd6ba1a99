//! Canonical parent function.

use crate::geom::{Point, PointSet, Polygon};
use crate::ops::{
    edge_length, edge_midpoint_distance, embed, embeddable_vertices, insert, is_insertable,
};
use crate::partition::outside_points;

/// `larg(P)`: the embeddable vertex with the largest rank, by index.
pub fn largest_embeddable(poly: &Polygon, outside: &[Point]) -> Option<usize> {
    embeddable_vertices(poly, outside)
        .into_iter()
        .max_by_key(|&i| poly.vertex(i).rank)
}

/// `cloe(P, q)`: the insertable edge whose midpoint is closest to `q`.
/// Ties prefer the longer edge, then the earlier edge in boundary order.
pub fn closest_edge(poly: &Polygon, q: &Point, outside: &[Point]) -> Option<usize> {
    let mut best: Option<(usize, f64, f64)> = None;
    for i in 0..poly.len() {
        if !is_insertable(q, poly, i, outside) {
            continue;
        }
        let d = edge_midpoint_distance(poly, i, q);
        let len = edge_length(poly, i);
        let better = match best {
            None => true,
            Some((_, bd, bl)) => d < bd || (d == bd && len > bl),
        };
        if better {
            best = Some((i, d, len));
        }
    }
    best.map(|(i, _, _)| i)
}

/// `clop(P)`: the point of `iout(P)` minimizing `dist(cloe(P, q), q)`, with its edge.
///
/// Distance ties go to the larger `x`, then the larger `y`.
pub fn closest_outside_point(poly: &Polygon, outside: &[Point]) -> Option<(Point, usize)> {
    let mut best: Option<(Point, usize, f64)> = None;
    for q in outside {
        let edge = if let Some(e) = closest_edge(poly, q, outside) {
            e
        } else {
            continue;
        };
        let d = edge_midpoint_distance(poly, edge, q);
        let better = match &best {
            None => true,
            Some((b, _, bd)) => {
                d < *bd || (d == *bd && (q.x() > b.x() || (q.x() == b.x() && q.y() > b.y())))
            }
        };
        if better {
            best = Some((*q, edge, d));
        }
    }
    best.map(|(q, e, _)| (q, e))
}

/// Parent of `poly` in the reverse-search tree; `None` for the root (convex hull).
pub fn parent(poly: &Polygon, set: &PointSet) -> Option<Polygon> {
    let outside = outside_points(set, poly);
    parent_with_outside(poly, &outside)
}

/// Same as [`parent`] with `out(P)` already computed.
pub(crate) fn parent_with_outside(poly: &Polygon, outside: &[Point]) -> Option<Polygon> {
    if let Some(v) = largest_embeddable(poly, outside) {
        return Some(embed(poly, v));
    }
    let (q, edge) = closest_outside_point(poly, outside)?;
    Some(insert(poly, edge, &q))
}
