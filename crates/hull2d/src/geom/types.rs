//! Point alias and the configuration passed to every hull construction.
//!
//! - `HullCfg`: carries the geometric tolerance plus the hybrid merge knobs.
//! - `TangentSearch`: how the hybrid merge locates a candidate on a partition hull.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

/// A point in the plane. Identity beyond coordinates does not exist.
pub type Point2 = Vector2<f64>;

/// Tolerance for point identity and collinearity decisions.
pub const DEFAULT_EPS: f64 = 1e-6;

/// Candidate lookup on a partition hull the current point does not belong to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TangentSearch {
    /// Binary search for the tangent vertex, then a local climb to the exact winner.
    #[default]
    Binary,
    /// Full scan of the partition hull.
    Linear,
}

impl TangentSearch {
    pub fn as_str(&self) -> &'static str {
        match self {
            TangentSearch::Binary => "binary",
            TangentSearch::Linear => "linear",
        }
    }
}

impl fmt::Display for TangentSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TangentSearch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "binary" => Ok(TangentSearch::Binary),
            "linear" => Ok(TangentSearch::Linear),
            other => Err(format!("unknown tangent search '{other}' (expected binary|linear)")),
        }
    }
}

/// Hull configuration.
///
/// `eps` is the only geometric tolerance: coordinate differences below it make two
/// points identical, and orientation magnitudes below it make three points
/// collinear.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    pub eps: f64,
    pub tangent: TangentSearch,
    /// Build per-partition hulls on the rayon pool. Output is identical either way.
    pub parallel_partitions: bool,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            eps: DEFAULT_EPS,
            tangent: TangentSearch::Binary,
            parallel_partitions: false,
        }
    }
}

impl HullCfg {
    #[inline]
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }
    #[inline]
    pub fn with_tangent(mut self, tangent: TangentSearch) -> Self {
        self.tangent = tangent;
        self
    }
    #[inline]
    pub fn with_parallel_partitions(mut self, parallel: bool) -> Self {
        self.parallel_partitions = parallel;
        self
    }
}
