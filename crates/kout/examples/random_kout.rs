//! Enumerate k-out polygons of a random preset and print a short summary.
//!
//! Usage:
//!   cargo run -p kout --example random_kout -- [count] [k] [seed]

use kout::rand::{random_point_set, RandomCfg, ReplayToken};
use kout::{enumerate, EnumCfg, Stats};

fn main() {
    let mut args = std::env::args().skip(1);
    let count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(8);
    let k: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);

    let cfg = RandomCfg {
        count,
        ..RandomCfg::default()
    };
    let set = match random_point_set(cfg, ReplayToken::new(seed)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("random_kout: {e}");
            return;
        }
    };
    let polygons = match enumerate(&set, EnumCfg::with_k(k)) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("random_kout: {e}");
            return;
        }
    };
    let stats = Stats::collect(&set, &polygons);
    println!("points={} k={} polygons={}", stats.points, k, stats.polygons);
    for (v, n) in &stats.by_vertices {
        println!("  {v:>3} vertices: {n}");
    }
    for (o, n) in &stats.by_outside {
        println!("  {o:>3} outside:  {n}");
    }
    if let Some(first) = polygons.first() {
        println!("root (hull) ranks: {:?}", first.ranks());
    }
}
