//! Inside/outside classification of `S` against a polygon.
//!
//! Boundary vertices belong to neither side. Results keep the input order of
//! `S`, which is also the order the enumerator tries interior points in.
//! Nothing is cached: callers recompute for every candidate polygon.

use crate::geom::predicates::point_in_polygon;
use crate::geom::{Point, PointSet, Polygon};

/// `in(P)` and `out(P)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partition {
    pub inside: Vec<Point>,
    pub outside: Vec<Point>,
}

fn boundary_mask(set: &PointSet, poly: &Polygon) -> Vec<bool> {
    let mut mask = vec![false; set.len()];
    for v in poly.vertices() {
        if let Some(slot) = mask.get_mut(v.rank) {
            *slot = true;
        }
    }
    mask
}

/// Split `S \ P` into points inside and outside `P`.
pub fn partition(set: &PointSet, poly: &Polygon) -> Partition {
    let mask = boundary_mask(set, poly);
    let mut out = Partition::default();
    for p in set.iter().filter(|p| !mask[p.rank]) {
        if point_in_polygon(p.pos, poly) {
            out.inside.push(*p);
        } else {
            out.outside.push(*p);
        }
    }
    out
}

/// `out(P)` only.
pub fn outside_points(set: &PointSet, poly: &Polygon) -> Vec<Point> {
    let mask = boundary_mask(set, poly);
    set.iter()
        .filter(|p| !mask[p.rank] && !point_in_polygon(p.pos, poly))
        .copied()
        .collect()
}

/// `in(P)` only.
pub fn inside_points(set: &PointSet, poly: &Polygon) -> Vec<Point> {
    let mask = boundary_mask(set, poly);
    set.iter()
        .filter(|p| !mask[p.rank] && point_in_polygon(p.pos, poly))
        .copied()
        .collect()
}
