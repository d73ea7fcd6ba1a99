//! Curated surface for hosts (UI layers, the CLI, experiments).
//!
//! Hosts supply a point set, call `enumerate`, and index into the returned
//! list; statistics panels call `partition` on a selected polygon directly.

// Input and data types
pub use crate::geom::{Point, PointSet, Polygon};
pub use crate::rand::{random_point_set, random_points, Bounds2, RandomCfg, ReplayToken};
// Predicates
pub use crate::geom::predicates::{
    distance, is_left_turn, is_right_turn, orient, point_in_polygon, point_in_triangle,
    segment_hits_polygon, segments_properly_intersect,
};
// Partition and hull
pub use crate::hull::convex_hull;
pub use crate::partition::{inside_points, outside_points, partition, Partition};
// Moves
pub use crate::ops::{
    dig, edge_midpoint_distance, embed, embeddable_vertices, insert, insertable_points,
    is_digable, is_embeddable, is_insertable, is_removable, remove,
};
// Reverse search
pub use crate::search::{
    enumerate, enumerate_at_most_k_out_polygons, is_active_dig, is_active_remove, parent,
    EnumCfg, Stats,
};
pub use crate::{Error, Result};
