//! Reverse search over k-out polygons.
//!
//! Purpose
//! - `parent` maps every non-root polygon to a canonical simpler one: embed the
//!   largest embeddable vertex (under ≺), otherwise insert the closest
//!   insertable outside point into its closest edge. The convex hull has none.
//! - `active_dig` / `active_remove` accept a forward move from `P` only if the
//!   child's parent, computed from the child alone, is exactly `P`.
//! - `enumerate` walks the implicit tree depth-first from the hull with an
//!   explicit frame stack, emitting each polygon once, on entry.
//!
//! Output order
//! - Pre-order. Among siblings: dig moves first (vertices in boundary order,
//!   interior points in input order), then remove moves (boundary order).
//!
//! Layout
//! - `types.rs` (config and stats), `parent.rs`, `activity.rs`, `enumerate.rs`.

mod activity;
mod enumerate;
mod parent;
mod types;

pub use activity::{active_dig, active_remove, is_active_dig, is_active_remove};
pub use enumerate::{enumerate, enumerate_at_most_k_out_polygons};
pub use parent::{closest_edge, closest_outside_point, largest_embeddable, parent};
pub use types::{EnumCfg, Stats};

#[cfg(test)]
mod tests;
