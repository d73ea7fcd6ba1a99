//! Planar points, point sets and polygons, plus the orientation-based predicates.
//!
//! Purpose
//! - `Point` couples coordinates with the canonical rank ≺ (its index in the
//!   input sequence). Identity is the rank; coordinates are never re-sorted.
//! - `PointSet` is the validated, read-only input `S`.
//! - `Polygon` is an immutable cyclic vertex sequence, CCW, stored in canonical
//!   rotation (smallest rank first) so sequence equality is cyclic equality.
//!
//! Conventions
//! - `predicates::orient(a, b, c) > 0` is a left turn. Every other predicate in
//!   the crate is written in terms of `orient`, `is_left_turn`, `is_right_turn`.
//! - Collinear triples are outside the contract (general position); the
//!   predicates return `false` on an exact zero rather than branching on it.

pub mod predicates;
mod types;

pub use types::{Point, PointSet, Polygon};
