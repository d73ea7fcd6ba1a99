//! Data types: `Point`, `PointSet`, `Polygon`.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

use super::predicates::orient;
use crate::{Error, Result};

/// A point of the input set: coordinates plus canonical rank.
///
/// Equality, hashing and ordering use the rank only. Within one `PointSet`
/// ranks are unique, and with the no-duplicates precondition this agrees with
/// coordinate equality.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub pos: Vector2<f64>,
    pub rank: usize,
}

impl Point {
    #[inline]
    pub fn new(rank: usize, x: f64, y: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
            rank,
        }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
    /// Same coordinates, regardless of rank.
    #[inline]
    pub fn same_position(&self, other: &Point) -> bool {
        self.pos == other.pos
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

/// The canonical order ≺: `p ≺ q` iff `p.rank < q.rank`.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}
impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The fixed input set `S`. Point `i` has rank `i`.
#[derive(Clone, Debug)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Build from `(x, y)` pairs, assigning ranks in input order.
    ///
    /// Fails on fewer than 3 points or non-finite coordinates. General position
    /// is not checked here; see [`PointSet::check_general_position`].
    pub fn new(coords: &[(f64, f64)]) -> Result<Self> {
        Self::from_vectors(coords.iter().map(|&(x, y)| Vector2::new(x, y)))
    }

    pub fn from_vectors<I>(coords: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vector2<f64>>,
    {
        let mut points = Vec::new();
        for (rank, pos) in coords.into_iter().enumerate() {
            if !(pos.x.is_finite() && pos.y.is_finite()) {
                return Err(Error::NonFinite { index: rank });
            }
            points.push(Point { pos, rank });
        }
        if points.len() < 3 {
            return Err(Error::TooFewPoints { got: points.len() });
        }
        Ok(Self { points })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn get(&self, rank: usize) -> Option<&Point> {
        self.points.get(rank)
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Report the first duplicate pair or collinear triple, if any.
    ///
    /// Cubic in `|S|`; meant for validating user input before a run, not for
    /// the hot path.
    pub fn check_general_position(&self) -> Result<()> {
        let pts = &self.points;
        for (i, a) in pts.iter().enumerate() {
            for (j, b) in pts.iter().enumerate().skip(i + 1) {
                if a.same_position(b) {
                    return Err(Error::Duplicate { a: i, b: j });
                }
            }
        }
        for (i, a) in pts.iter().enumerate() {
            for (j, b) in pts.iter().enumerate().skip(i + 1) {
                for (l, c) in pts.iter().enumerate().skip(j + 1) {
                    if orient(a.pos, b.pos, c.pos) == 0.0 {
                        return Err(Error::NotGeneralPosition { a: i, b: j, c: l });
                    }
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Simple polygon as a cyclic vertex sequence (CCW by construction).
///
/// Invariants:
/// - Canonical rotation: the vertex with the smallest rank is at index 0.
/// - Operators never mutate; they build a new `Polygon`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Polygon {
    verts: Vec<Point>,
}

impl Polygon {
    /// Wrap a cyclic sequence, rotating it into canonical position.
    pub fn from_cycle(mut verts: Vec<Point>) -> Self {
        if let Some(first) = verts
            .iter()
            .enumerate()
            .min_by_key(|(_, p)| p.rank)
            .map(|(i, _)| i)
        {
            verts.rotate_left(first);
        }
        Self { verts }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.verts
    }
    #[inline]
    pub fn vertex(&self, i: usize) -> &Point {
        &self.verts[i]
    }
    #[inline]
    pub fn succ_index(&self, i: usize) -> usize {
        (i + 1) % self.verts.len()
    }
    #[inline]
    pub fn pred_index(&self, i: usize) -> usize {
        (i + self.verts.len() - 1) % self.verts.len()
    }
    #[inline]
    pub fn succ(&self, i: usize) -> &Point {
        &self.verts[self.succ_index(i)]
    }
    #[inline]
    pub fn pred(&self, i: usize) -> &Point {
        &self.verts[self.pred_index(i)]
    }

    /// Index of `p` on the boundary, if it is a vertex.
    pub fn position(&self, p: &Point) -> Option<usize> {
        self.verts.iter().position(|v| v == p)
    }
    pub fn contains_vertex(&self, p: &Point) -> bool {
        self.position(p).is_some()
    }

    /// Edges `(p_i, succ(p_i))` in boundary order.
    pub fn edges(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
        (0..self.verts.len()).map(move |i| (&self.verts[i], self.succ(i)))
    }

    /// Vertex ranks in boundary order (handy for logs and tests).
    pub fn ranks(&self) -> Vec<usize> {
        self.verts.iter().map(|p| p.rank).collect()
    }

    /// Shoelace signed area; positive for CCW.
    pub fn signed_area(&self) -> f64 {
        0.5 * self
            .edges()
            .map(|(a, b)| a.pos.perp(&b.pos))
            .sum::<f64>()
    }

    /// Copy with `q` spliced between vertex `i` and its successor.
    pub(crate) fn with_inserted(&self, i: usize, q: Point) -> Polygon {
        let mut verts = Vec::with_capacity(self.verts.len() + 1);
        verts.extend_from_slice(&self.verts[..=i]);
        verts.push(q);
        verts.extend_from_slice(&self.verts[i + 1..]);
        Polygon::from_cycle(verts)
    }

    /// Copy with vertex `i` dropped.
    pub(crate) fn without(&self, i: usize) -> Polygon {
        let mut verts = self.verts.clone();
        verts.remove(i);
        Polygon::from_cycle(verts)
    }
}
