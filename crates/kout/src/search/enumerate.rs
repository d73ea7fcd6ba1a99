//! Depth-first reverse search with an explicit frame stack.

use super::activity::{active_dig, active_remove};
use super::types::EnumCfg;
use crate::geom::{Point, PointSet, Polygon};
use crate::hull::convex_hull;
use crate::ops::{is_digable, is_removable};
use crate::partition::partition;
use crate::{Error, Result};

/// Enumerate every polygon of the reverse-search tree rooted at the hull of `set`.
///
/// Returns polygons in pre-order, hull first. `cfg.k` is clamped to `|S| - 3`.
pub fn enumerate(set: &PointSet, cfg: EnumCfg) -> Result<Vec<Polygon>> {
    let k = cfg.effective_k(set);
    if k < cfg.k {
        tracing::warn!(requested = cfg.k, clamped = k, "budget exceeds |S| - 3");
    }
    tracing::debug!(points = set.len(), k, "reverse search start");
    let polygons = ReverseSearch::new(set, k, cfg.max_polygons).run(convex_hull(set))?;
    tracing::debug!(polygons = polygons.len(), "reverse search done");
    Ok(polygons)
}

/// Entry point on raw coordinates: `k` is validated, then clamped.
pub fn enumerate_at_most_k_out_polygons(points: &[(f64, f64)], k: i64) -> Result<Vec<Polygon>> {
    let set = PointSet::new(points)?;
    let k = usize::try_from(k).map_err(|_| Error::NegativeBudget(k))?;
    enumerate(&set, EnumCfg::with_k(k))
}

/// Position of the next move to try at a node.
#[derive(Clone, Copy, Debug)]
enum Cursor {
    Dig { vertex: usize, point: usize },
    Remove { vertex: usize },
    Done,
}

/// A node on the stack: the polygon, its partition, and the move cursor.
struct Frame {
    poly: Polygon,
    inside: Vec<Point>,
    outside: Vec<Point>,
    cursor: Cursor,
}

impl Frame {
    fn new(set: &PointSet, poly: Polygon) -> Self {
        let part = partition(set, &poly);
        Self {
            poly,
            inside: part.inside,
            outside: part.outside,
            cursor: Cursor::Dig {
                vertex: 0,
                point: 0,
            },
        }
    }

    /// Advance the cursor to the next active move and return its child.
    fn next_child(&mut self, set: &PointSet, k: usize) -> Option<Polygon> {
        loop {
            match self.cursor {
                Cursor::Dig { vertex, .. } if vertex >= self.poly.len() => {
                    self.cursor = Cursor::Remove { vertex: 0 };
                }
                Cursor::Dig { vertex, point } if point >= self.inside.len() => {
                    self.cursor = Cursor::Dig {
                        vertex: vertex + 1,
                        point: 0,
                    };
                }
                Cursor::Dig { vertex, point } => {
                    self.cursor = Cursor::Dig {
                        vertex,
                        point: point + 1,
                    };
                    let q = &self.inside[point];
                    if !is_digable(&self.poly, vertex, q, set) {
                        continue;
                    }
                    if let Some(child) = active_dig(&self.poly, vertex, q, set, k) {
                        return Some(child);
                    }
                }
                Cursor::Remove { vertex } if vertex >= self.poly.len() => {
                    self.cursor = Cursor::Done;
                }
                Cursor::Remove { vertex } => {
                    self.cursor = Cursor::Remove { vertex: vertex + 1 };
                    if !is_removable(&self.poly, vertex, &self.outside, set, k) {
                        continue;
                    }
                    if let Some(child) = active_remove(&self.poly, vertex, set, k) {
                        return Some(child);
                    }
                }
                Cursor::Done => return None,
            }
        }
    }
}

/// Runner carrying shared context and the output list.
struct ReverseSearch<'a> {
    set: &'a PointSet,
    k: usize,
    limit: Option<usize>,
    found: Vec<Polygon>,
    stack: Vec<Frame>,
}

impl<'a> ReverseSearch<'a> {
    fn new(set: &'a PointSet, k: usize, limit: Option<usize>) -> Self {
        Self {
            set,
            k,
            limit,
            found: Vec::new(),
            stack: Vec::new(),
        }
    }

    /// Emit `poly` and push its frame.
    fn enter(&mut self, poly: Polygon) -> Result<()> {
        if let Some(limit) = self.limit {
            if self.found.len() >= limit {
                return Err(Error::NodeLimit { limit });
            }
        }
        self.found.push(poly.clone());
        self.stack.push(Frame::new(self.set, poly));
        Ok(())
    }

    fn run(mut self, root: Polygon) -> Result<Vec<Polygon>> {
        self.enter(root)?;
        while let Some(top) = self.stack.last_mut() {
            match top.next_child(self.set, self.k) {
                Some(child) => {
                    tracing::debug!(
                        depth = self.stack.len(),
                        vertices = child.len(),
                        ranks = ?child.ranks(),
                        "child"
                    );
                    self.enter(child)?;
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        Ok(self.found)
    }
}
