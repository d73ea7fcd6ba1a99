//! Reverse-search tests: hand-checked scenarios, a brute-force oracle on small
//! random sets, and property tests.

use std::collections::{HashMap, HashSet};

use nalgebra::Vector2;
use proptest::prelude::*;

use super::*;
use crate::geom::predicates::segments_properly_intersect;
use crate::geom::{Point, PointSet, Polygon};
use crate::hull::convex_hull;
use crate::ops::{dig, embed, embeddable_vertices, is_digable, is_removable};
use crate::partition::{outside_points, partition};
use crate::rand::{random_point_set, Bounds2, RandomCfg, ReplayToken};
use crate::Error;

fn pentagon() -> PointSet {
    PointSet::new(&[(0.0, 0.0), (4.0, -1.0), (6.0, 3.0), (2.0, 6.0), (-2.0, 3.0)]).unwrap()
}

// Square corners 0..3, interior point 4.
fn square_with_center() -> PointSet {
    PointSet::new(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (1.0, 2.0)]).unwrap()
}

fn grid_set(count: usize, seed: u64) -> PointSet {
    let cfg = RandomCfg {
        count,
        bounds: Bounds2::new(Vector2::new(0.0, 0.0), Vector2::new(12.0, 12.0)),
        ..RandomCfg::default()
    };
    random_point_set(cfg, ReplayToken::new(seed)).unwrap()
}

fn poly(set: &PointSet, ranks: &[usize]) -> Polygon {
    Polygon::from_cycle(ranks.iter().map(|&r| set.points()[r]).collect())
}

fn permutations(items: &[Point]) -> Vec<Vec<Point>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

fn is_simple(cycle: &[Point]) -> bool {
    let m = cycle.len();
    for i in 0..m {
        for j in i + 1..m {
            if j == i + 1 || (i == 0 && j == m - 1) {
                continue;
            }
            let (a, b) = (cycle[i].pos, cycle[(i + 1) % m].pos);
            let (u, v) = (cycle[j].pos, cycle[(j + 1) % m].pos);
            if segments_properly_intersect(a, b, u, v) {
                return false;
            }
        }
    }
    true
}

/// Every simple polygon over subsets of `S` with at most `k` outside points.
fn brute_force(set: &PointSet, k: usize) -> HashSet<Polygon> {
    let n = set.len();
    let pts = set.points();
    let mut found = HashSet::new();
    for mask in 0u32..(1 << n) {
        if mask.count_ones() < 3 {
            continue;
        }
        let chosen: Vec<Point> = (0..n).filter(|i| mask & (1 << i) != 0).map(|i| pts[i]).collect();
        for tail in permutations(&chosen[1..]) {
            let mut cycle = vec![chosen[0]];
            cycle.extend(tail);
            if !is_simple(&cycle) {
                continue;
            }
            let mut p = Polygon::from_cycle(cycle.clone());
            if p.signed_area() < 0.0 {
                cycle.reverse();
                p = Polygon::from_cycle(cycle);
            }
            if outside_points(set, &p).len() <= k {
                found.insert(p);
            }
        }
    }
    found
}

#[test]
fn convex_pentagon_with_zero_budget_yields_only_itself() {
    let s = pentagon();
    let res = enumerate(&s, EnumCfg::with_k(0)).unwrap();
    assert_eq!(res, vec![convex_hull(&s)]);
    assert_eq!(res[0].len(), 5);
}

#[test]
fn square_with_center_and_budget_one() {
    let s = square_with_center();
    let res = enumerate(&s, EnumCfg::with_k(1)).unwrap();
    let hull = convex_hull(&s);
    assert_eq!(res[0], hull);
    assert_eq!(hull.ranks(), vec![0, 1, 2, 3]);

    // the interior point dug onto each of the four edges
    for dug in [
        &[0, 4, 1, 2, 3][..],
        &[0, 1, 4, 2, 3],
        &[0, 1, 2, 4, 3],
        &[0, 1, 2, 3, 4],
    ] {
        assert!(res.contains(&poly(&s, dug)), "missing {dug:?}");
    }
    // triangles keeping the center inside leave exactly one corner out
    assert!(res.contains(&poly(&s, &[0, 2, 3])));
    assert!(res.contains(&poly(&s, &[0, 1, 3])));
    // the triangle that leaves both the center and a corner out is excluded
    assert!(!res.contains(&poly(&s, &[0, 1, 2])));

    for p in &res {
        assert!(outside_points(&s, p).len() <= 1);
    }
    // 5 polygons with nothing outside, 8 quadrilaterals and 2 triangles with one
    assert_eq!(res.len(), 15);
}

#[test]
fn far_point_with_zero_budget_must_stay_on_boundary() {
    // Triangle with a point far outside the hull of the rest; it is a hull vertex.
    let s = PointSet::new(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0), (1.0, 1.0), (9.0, 8.0)]).unwrap();
    let res = enumerate(&s, EnumCfg::with_k(0)).unwrap();
    let far = s.points()[4];
    for p in &res {
        assert!(outside_points(&s, p).is_empty());
        assert!(p.contains_vertex(&far));
    }
}

#[test]
fn budget_is_clamped_to_three_vertices() {
    let s = square_with_center();
    let wide = enumerate(&s, EnumCfg::with_k(50)).unwrap();
    let tight = enumerate(&s, EnumCfg::with_k(2)).unwrap();
    assert_eq!(wide, tight);
    assert!(wide.iter().any(|p| p.len() == 3));
    assert_eq!(EnumCfg::with_k(50).effective_k(&s), 2);
    assert_eq!(EnumCfg::with_k(1).effective_k(&s), 1);
}

#[test]
fn raw_entry_point_validates_input() {
    let pts = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (1.0, 2.0)];
    assert_eq!(
        enumerate_at_most_k_out_polygons(&pts, -1).unwrap_err(),
        Error::NegativeBudget(-1)
    );
    assert_eq!(
        enumerate_at_most_k_out_polygons(&pts[..2], 0).unwrap_err(),
        Error::TooFewPoints { got: 2 }
    );
    let res = enumerate_at_most_k_out_polygons(&pts, 1).unwrap();
    assert_eq!(res.len(), 15);
}

#[test]
fn node_limit_is_reported() {
    let s = square_with_center();
    let cfg = EnumCfg {
        k: 1,
        max_polygons: Some(4),
    };
    assert_eq!(enumerate(&s, cfg).unwrap_err(), Error::NodeLimit { limit: 4 });
    let cfg = EnumCfg {
        k: 1,
        max_polygons: Some(15),
    };
    assert_eq!(enumerate(&s, cfg).unwrap().len(), 15);
}

#[test]
fn hull_has_no_parent() {
    for seed in 0..10 {
        let s = grid_set(6, seed);
        assert_eq!(parent(&convex_hull(&s), &s), None);
    }
}

#[test]
fn canonical_embed_inverts_dig() {
    let s = square_with_center();
    let hull = convex_hull(&s);
    let q = s.points()[4];
    for i in 0..hull.len() {
        assert!(is_digable(&hull, i, &q, &s));
        let child = dig(&hull, i, &q);
        let out = outside_points(&s, &child);
        let v = largest_embeddable(&child, &out).unwrap();
        assert_eq!(embed(&child, v), hull);
        assert_eq!(parent(&child, &s), Some(hull.clone()));
        assert!(is_active_dig(&hull, i, &q, &s, 0));
    }
}

#[test]
fn remove_activity_depends_on_the_insertion_rule() {
    let s = square_with_center();
    // center dug onto edge 0-1; dropping corner 0 gives a child whose parent
    // re-inserts 0 elsewhere, so the move is not a tree edge
    let p = poly(&s, &[0, 4, 1, 2, 3]);
    let part = partition(&s, &p);
    assert!(is_removable(&p, 0, &part.outside, &s, 1));
    assert!(!is_active_remove(&p, 0, &s, 1));
    // center dug onto edge 3-0; dropping corner 0 is a tree edge
    let p = poly(&s, &[0, 1, 2, 3, 4]);
    assert!(is_active_remove(&p, 0, &s, 1));
    assert_eq!(active_remove(&p, 0, &s, 1), Some(poly(&s, &[1, 2, 3, 4])));
}

#[test]
fn closest_point_prefers_nearest_edge_midpoint() {
    let s = square_with_center();
    let child = poly(&s, &[1, 2, 3, 4]);
    let out = outside_points(&s, &child);
    assert_eq!(out.len(), 1);
    assert!(embeddable_vertices(&child, &out).is_empty());
    // 0 is insertable to edges (3, 4) and (4, 1); midpoint of (4, 1) is closer
    assert_eq!(closest_edge(&child, &out[0], &out), Some(3));
    let (q, e) = closest_outside_point(&child, &out).unwrap();
    assert_eq!((q.rank, e), (0, 3));
    assert_eq!(parent(&child, &s), Some(poly(&s, &[0, 1, 2, 3, 4])));
}

#[test]
fn closest_edge_tie_goes_to_longer_edge() {
    // (7, 9) is sqrt(65) from the midpoints of both (6,0)-(6,2) and (6,2)-(0,2)
    let s = PointSet::new(&[(0.0, 0.0), (6.0, 0.0), (6.0, 2.0), (0.0, 2.0), (7.0, 9.0)]).unwrap();
    let rect = poly(&s, &[0, 1, 2, 3]);
    let out = outside_points(&s, &rect);
    let q = s.points()[4];
    assert_eq!(out, vec![q]);
    assert!(crate::ops::is_insertable(&q, &rect, 1, &out));
    assert!(crate::ops::is_insertable(&q, &rect, 2, &out));
    assert_eq!(closest_edge(&rect, &q, &out), Some(2));
    assert_eq!(parent(&rect, &s), Some(poly(&s, &[0, 1, 2, 4, 3])));
}

#[test]
fn closest_point_tie_goes_to_larger_x_then_larger_y() {
    let square = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];

    // below and above: both 1 away from their edge midpoints, same x
    let mut pts = square.to_vec();
    pts.extend([(2.0, -1.0), (2.0, 5.0)]);
    let s = PointSet::new(&pts).unwrap();
    let sq = poly(&s, &[0, 1, 2, 3]);
    let out = outside_points(&s, &sq);
    assert_eq!(out.len(), 2);
    let (q, e) = closest_outside_point(&sq, &out).unwrap();
    assert_eq!((q.rank, e), (5, 2));
    assert_eq!(parent(&sq, &s), Some(poly(&s, &[0, 1, 2, 5, 3])));

    // left and right: the larger x wins before y is looked at
    let mut pts = square.to_vec();
    pts.extend([(5.0, 2.0), (-1.0, 2.0)]);
    let s = PointSet::new(&pts).unwrap();
    let sq = poly(&s, &[0, 1, 2, 3]);
    let out = outside_points(&s, &sq);
    let (q, e) = closest_outside_point(&sq, &out).unwrap();
    assert_eq!((q.rank, e), (4, 1));

    // scanning order does not matter
    let reversed: Vec<Point> = out.iter().rev().copied().collect();
    let (q, _) = closest_outside_point(&sq, &reversed).unwrap();
    assert_eq!(q.rank, 4);
}

#[test]
fn matches_brute_force_on_small_sets() {
    for seed in 0..12 {
        let s = grid_set(6, seed);
        for k in 0..=3 {
            let res = enumerate(&s, EnumCfg::with_k(k)).unwrap();
            let got: HashSet<Polygon> = res.iter().cloned().collect();
            assert_eq!(got.len(), res.len(), "duplicates for seed {seed}, k {k}");
            assert_eq!(got, brute_force(&s, k), "seed {seed}, k {k}");
        }
    }
}

#[test]
fn stats_histograms_add_up() {
    let s = square_with_center();
    let res = enumerate(&s, EnumCfg::with_k(1)).unwrap();
    let st = Stats::collect(&s, &res);
    assert_eq!(st.points, 5);
    assert_eq!(st.polygons, 15);
    assert_eq!(st.by_outside.get(&0), Some(&5));
    assert_eq!(st.by_outside.get(&1), Some(&10));
    assert_eq!(st.by_vertices.get(&3), Some(&2));
    assert_eq!(st.by_vertices.get(&4), Some(&9));
    assert_eq!(st.by_vertices.get(&5), Some(&4));
    assert_eq!(st.by_inside.values().sum::<usize>(), 15);
    assert_eq!(st.max_outside(), Some(1));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn reverse_search_invariants(count in 4usize..=7, seed in any::<u64>(), k in 0usize..=2) {
        let s = grid_set(count, seed);
        let res = enumerate(&s, EnumCfg::with_k(k)).unwrap();
        let hull = convex_hull(&s);

        // root first, nothing outside it
        prop_assert_eq!(&res[0], &hull);
        prop_assert!(outside_points(&s, &hull).is_empty());

        // pre-order position of each polygon
        let index: HashMap<&Polygon, usize> = res.iter().enumerate().map(|(i, p)| (p, i)).collect();
        prop_assert_eq!(index.len(), res.len());

        for (i, p) in res.iter().enumerate() {
            prop_assert!(p.signed_area() > 0.0);
            prop_assert!(outside_points(&s, p).len() <= k);
            if i == 0 {
                continue;
            }
            let par = parent(p, &s);
            prop_assert!(par.is_some());
            let j = index.get(par.as_ref().unwrap()).copied();
            prop_assert!(j.is_some());
            // the parent was emitted earlier, so it is reached by a shorter path
            prop_assert!(j.unwrap() < i);
        }
    }

    #[test]
    fn predicates_are_deterministic(count in 4usize..=7, seed in any::<u64>()) {
        let s = grid_set(count, seed);
        let hull = convex_hull(&s);
        let part = partition(&s, &hull);
        for i in 0..hull.len() {
            for q in &part.inside {
                prop_assert_eq!(is_digable(&hull, i, q, &s), is_digable(&hull, i, q, &s));
            }
            prop_assert_eq!(
                is_removable(&hull, i, &part.outside, &s, 1),
                is_removable(&hull, i, &part.outside, &s, 1)
            );
        }
        prop_assert_eq!(parent(&hull, &s), parent(&hull, &s));
    }
}
