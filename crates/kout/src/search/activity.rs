//! Activity tests: is a forward move a genuine tree edge?
//!
//! Both tests assume the move's guard (`is_digable` / `is_removable`) holds.

use super::parent::parent_with_outside;
use crate::geom::{Point, PointSet, Polygon};
use crate::ops::{dig, remove};
use crate::partition::outside_points;

fn accept(poly: &Polygon, child: Polygon, set: &PointSet, k: usize) -> Option<Polygon> {
    let outside = outside_points(set, &child);
    if outside.len() > k {
        return None;
    }
    match parent_with_outside(&child, &outside) {
        Some(par) if par == *poly => Some(child),
        _ => None,
    }
}

/// The child `dig(P, p_i, q)` if it lies within budget and its parent is `P`.
pub fn active_dig(
    poly: &Polygon,
    i: usize,
    q: &Point,
    set: &PointSet,
    k: usize,
) -> Option<Polygon> {
    accept(poly, dig(poly, i, q), set, k)
}

/// The child `remove(P, p_j)` if it lies within budget and its parent is `P`.
pub fn active_remove(poly: &Polygon, j: usize, set: &PointSet, k: usize) -> Option<Polygon> {
    accept(poly, remove(poly, j), set, k)
}

pub fn is_active_dig(poly: &Polygon, i: usize, q: &Point, set: &PointSet, k: usize) -> bool {
    active_dig(poly, i, q, set, k).is_some()
}

pub fn is_active_remove(poly: &Polygon, j: usize, set: &PointSet, k: usize) -> bool {
    active_remove(poly, j, set, k).is_some()
}
