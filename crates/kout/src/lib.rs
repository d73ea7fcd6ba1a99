//! Reverse-search enumeration of k-out polygons.
//!
//! Given a fixed planar point set `S` and a budget `k`, enumerate every simple
//! polygon with vertices in `S` that leaves at most `k` points of `S` strictly
//! outside. The search walks an implicit tree rooted at the convex hull; each
//! candidate child is accepted only when the canonical parent function maps it
//! back to the current node, so every polygon is produced exactly once.
//!
//! Layout
//! - `geom`: points with canonical rank, point sets, polygons, predicates.
//! - `partition`, `hull`: inside/outside classification and the root polygon.
//! - `ops`: embed / insert / dig / remove with their validity predicates.
//! - `search`: parent function, activity tests, explicit-stack enumerator.
//! - `rand`: reproducible random point sets in general position.
//!
//! Conventions
//! - `orient(a, b, c) > 0` is a left (counter-clockwise) turn; polygons are CCW.
//! - Input must be in general position (no duplicates, no collinear triples).
//!   This is a precondition, not a checked error; see
//!   [`PointSet::check_general_position`] for an opt-in validator.

pub mod api;
mod error;
pub mod geom;
pub mod hull;
pub mod ops;
pub mod partition;
pub mod rand;
pub mod search;

pub use error::{Error, Result};
pub use geom::{Point, PointSet, Polygon};
pub use search::{enumerate, enumerate_at_most_k_out_polygons, EnumCfg, Stats};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::predicates::{is_left_turn, is_right_turn, orient};
    pub use crate::geom::{Point, PointSet, Polygon};
    pub use crate::hull::convex_hull;
    pub use crate::partition::{partition, Partition};
    pub use crate::rand::{random_point_set, RandomCfg, ReplayToken};
    pub use crate::search::{enumerate, enumerate_at_most_k_out_polygons, parent, EnumCfg, Stats};
    pub use crate::{Error, Result};
    pub use nalgebra::Vector2 as Vec2;
}
