//! Random point sets in general position (reproducible).
//!
//! Model
//! - Draw points uniformly in an axis-aligned box, optionally snapped to the
//!   integer grid, and reject any draw that duplicates an accepted point or is
//!   collinear with two of them. Integer coordinates keep `orient` exact.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG, so
//!   the `index`-th preset of a seed can be regenerated on its own.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::predicates::orient;
use crate::geom::PointSet;
use crate::{Error, Result};

/// Axis-aligned sampling box (inclusive).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Bounds2 {
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        Self {
            min: min.inf(&max),
            max: min.sup(&max),
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomCfg {
    pub count: usize,
    pub bounds: Bounds2,
    /// Snap coordinates to integers.
    pub integer_grid: bool,
    /// Rejected draws allowed per point before giving up.
    pub max_attempts: usize,
}

impl Default for RandomCfg {
    fn default() -> Self {
        Self {
            count: 8,
            bounds: Bounds2::new(Vector2::new(0.0, 0.0), Vector2::new(640.0, 480.0)),
            integer_grid: true,
            max_attempts: 1000,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn draw<R: Rng>(rng: &mut R, b: &Bounds2, integer_grid: bool) -> Vector2<f64> {
    let mut x = rng.gen_range(b.min.x..=b.max.x);
    let mut y = rng.gen_range(b.min.y..=b.max.y);
    if integer_grid {
        x = x.round().clamp(b.min.x.ceil(), b.max.x.floor());
        y = y.round().clamp(b.min.y.ceil(), b.max.y.floor());
    }
    Vector2::new(x, y)
}

fn compatible(accepted: &[Vector2<f64>], c: Vector2<f64>) -> bool {
    for (i, a) in accepted.iter().enumerate() {
        if *a == c {
            return false;
        }
        for b in &accepted[i + 1..] {
            if orient(*a, *b, c) == 0.0 {
                return false;
            }
        }
    }
    true
}

/// Draw `cfg.count` coordinates in general position.
pub fn random_points(cfg: RandomCfg, tok: ReplayToken) -> Result<Vec<Vector2<f64>>> {
    if cfg.count < 3 {
        return Err(Error::TooFewPoints { got: cfg.count });
    }
    let mut rng = tok.to_std_rng();
    let mut pts: Vec<Vector2<f64>> = Vec::with_capacity(cfg.count);
    while pts.len() < cfg.count {
        let mut attempts = 0usize;
        loop {
            let c = draw(&mut rng, &cfg.bounds, cfg.integer_grid);
            if compatible(&pts, c) {
                pts.push(c);
                break;
            }
            attempts += 1;
            if attempts >= cfg.max_attempts {
                return Err(Error::SamplingFailed { attempts });
            }
        }
    }
    Ok(pts)
}

/// Same as [`random_points`], wrapped as a `PointSet`.
pub fn random_point_set(cfg: RandomCfg, tok: ReplayToken) -> Result<PointSet> {
    PointSet::from_vectors(random_points(cfg, tok)?)
}
