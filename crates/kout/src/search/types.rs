//! Enumeration config and summary statistics.

use std::collections::BTreeMap;

use crate::geom::{PointSet, Polygon};
use crate::partition::partition;

/// Enumeration configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnumCfg {
    /// Outside-point budget. Clamped to `|S| - 3` at run time.
    pub k: usize,
    /// Stop with `Error::NodeLimit` once more than this many polygons would be
    /// emitted. `None` means unbounded.
    pub max_polygons: Option<usize>,
}

impl EnumCfg {
    pub fn with_k(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    /// The budget actually used on `set`: `k` clamped to `|S| - 3`.
    pub fn effective_k(&self, set: &PointSet) -> usize {
        self.k.min(set.len().saturating_sub(3))
    }
}

/// Summary of an enumeration result, as shown to consumers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub points: usize,
    pub polygons: usize,
    /// Polygon count keyed by number of vertices.
    pub by_vertices: BTreeMap<usize, usize>,
    /// Polygon count keyed by `|out(P)|`.
    pub by_outside: BTreeMap<usize, usize>,
    /// Polygon count keyed by `|in(P)|`.
    pub by_inside: BTreeMap<usize, usize>,
}

impl Stats {
    pub fn collect(set: &PointSet, polygons: &[Polygon]) -> Self {
        let mut stats = Stats {
            points: set.len(),
            polygons: polygons.len(),
            ..Stats::default()
        };
        for poly in polygons {
            let part = partition(set, poly);
            *stats.by_vertices.entry(poly.len()).or_default() += 1;
            *stats.by_outside.entry(part.outside.len()).or_default() += 1;
            *stats.by_inside.entry(part.inside.len()).or_default() += 1;
        }
        stats
    }

    /// Largest `|out(P)|` seen, if any polygon was collected.
    pub fn max_outside(&self) -> Option<usize> {
        self.by_outside.keys().next_back().copied()
    }
}
