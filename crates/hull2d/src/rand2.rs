//! Reproducible random point sets.
//!
//! Purpose
//! - Feed the CLI, benchmarks, and tests with deterministic inputs: every draw is
//!   keyed by a replay token `(seed, index)`, never by ambient entropy.
//!
//! Model
//! - `uniform_points`: uniform in the padded canvas rectangle.
//! - `circular_points`: uniform angles on the largest circle inside the padded
//!   rectangle, so every point is a hull vertex (worst case for gift wrapping).
//!
//! Code cross-refs: `hull::PointSet`

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point2;
use crate::hull::PointSet;

/// Error type for the samplers.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    TooFewPoints { got: usize },
    InvalidCanvas { reason: String },
}

impl SampleError {
    fn canvas(reason: impl Into<String>) -> Self {
        Self::InvalidCanvas {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { got } => {
                write!(f, "at least 3 points must be sampled, requested {got}")
            }
            Self::InvalidCanvas { reason } => write!(f, "invalid canvas: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Canvas the points are drawn in: `[padding, width - padding] × [padding, height - padding]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCfg {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            padding: 40.0,
        }
    }
}

impl SampleCfg {
    pub fn validate(&self) -> Result<(), SampleError> {
        if !(200.0..=1920.0).contains(&self.width) {
            return Err(SampleError::canvas(format!(
                "width {} outside [200, 1920]",
                self.width
            )));
        }
        if !(200.0..=1080.0).contains(&self.height) {
            return Err(SampleError::canvas(format!(
                "height {} outside [200, 1080]",
                self.height
            )));
        }
        if !(self.padding >= 0.0
            && self.padding < self.width / 2.0
            && self.padding < self.height / 2.0)
        {
            return Err(SampleError::canvas(format!(
                "padding {} must be in [0, min(width, height) / 2)",
                self.padding
            )));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
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

fn check(n: usize, cfg: &SampleCfg) -> Result<(), SampleError> {
    if n < 3 {
        return Err(SampleError::TooFewPoints { got: n });
    }
    cfg.validate()
}

fn into_point_set(points: Vec<Point2>) -> Result<PointSet, SampleError> {
    let got = points.len();
    PointSet::new(points).map_err(|_| SampleError::TooFewPoints { got })
}

/// `n` points uniform in the padded canvas.
pub fn uniform_points(n: usize, cfg: SampleCfg, tok: ReplayToken) -> Result<PointSet, SampleError> {
    check(n, &cfg)?;
    let mut rng = tok.to_std_rng();
    let (x0, x1) = (cfg.padding, cfg.width - cfg.padding);
    let (y0, y1) = (cfg.padding, cfg.height - cfg.padding);
    let points = (0..n)
        .map(|_| Point2::new(rng.gen_range(x0..x1), rng.gen_range(y0..y1)))
        .collect();
    into_point_set(points)
}

/// `n` points at uniform random angles on the largest circle inside the padded canvas.
pub fn circular_points(
    n: usize,
    cfg: SampleCfg,
    tok: ReplayToken,
) -> Result<PointSet, SampleError> {
    check(n, &cfg)?;
    let mut rng = tok.to_std_rng();
    let center = Point2::new(cfg.width / 2.0, cfg.height / 2.0);
    let radius = (cfg.width.min(cfg.height) / 2.0 - cfg.padding).max(1.0);
    let points = (0..n)
        .map(|_| {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            center + Point2::new(th.cos(), th.sin()) * radius
        })
        .collect();
    into_point_set(points)
}
