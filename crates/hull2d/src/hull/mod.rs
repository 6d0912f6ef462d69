//! Convex hull constructions.
//!
//! Purpose
//! - Three algorithms behind one contract: an ordered point sequence in, the
//!   counter-clockwise hull boundary (starting at the entry point) out.
//! - Callers pick an algorithm by `HullKind` and get a `Hull`; the per-algorithm
//!   types stay public for callers that need their extra surface (partition
//!   diagnostics of `HybridHull`).
//!
//! Code cross-refs: `geom::{is_better_candidate, turn, points_eq}`, `HullCfg`

mod angular;
mod gift_wrap;
mod hybrid;
mod partition;
mod point_set;
mod tangent;

use std::fmt;
use std::str::FromStr;

use crate::geom::{HullCfg, Point2};

pub use angular::{angular_scan, AngularScanHull};
pub use gift_wrap::{gift_wrap, GiftWrapHull};
pub use hybrid::HybridHull;
pub use partition::{partition_plan, PartitionPlan};
pub use point_set::PointSet;

/// Errors surfaced by hull construction and diagnostics queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// Input has fewer points than the algorithm requires.
    TooFewPoints { needed: usize, got: usize },
    /// Partition query beyond the computed partition count.
    PartitionIndex { index: usize, count: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::TooFewPoints { needed, got } => write!(
                f,
                "convex hull needs at least {needed} points, got {got}"
            ),
            HullError::PartitionIndex { index, count } => write!(
                f,
                "partition index {index} out of range ({count} partitions)"
            ),
        }
    }
}

impl std::error::Error for HullError {}

/// Available algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HullKind {
    AngularScan,
    GiftWrapping,
    Hybrid,
}

impl HullKind {
    pub const ALL: [HullKind; 3] = [
        HullKind::GiftWrapping,
        HullKind::AngularScan,
        HullKind::Hybrid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HullKind::AngularScan => "angular-scan",
            HullKind::GiftWrapping => "gift-wrapping",
            HullKind::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for HullKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HullKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "angular-scan" | "angular" | "graham" => Ok(HullKind::AngularScan),
            "gift-wrapping" | "gift" | "jarvis" => Ok(HullKind::GiftWrapping),
            "hybrid" | "chan" => Ok(HullKind::Hybrid),
            other => Err(format!(
                "unknown hull algorithm '{other}' (expected angular-scan|gift-wrapping|hybrid)"
            )),
        }
    }
}

/// Read-only view shared by all hull results.
pub trait ConvexHull {
    /// Boundary vertices, counter-clockwise from the entry point.
    fn hull(&self) -> &[Point2];

    fn kind(&self) -> HullKind;

    #[inline]
    fn size(&self) -> usize {
        self.hull().len()
    }
}

/// A computed hull, tagged by the algorithm that produced it.
#[derive(Clone, Debug)]
pub enum Hull {
    AngularScan(AngularScanHull),
    GiftWrapping(GiftWrapHull),
    Hybrid(HybridHull),
}

impl Hull {
    /// Run `kind` over `points`. Only the hybrid method rejects inputs below three points.
    pub fn compute(kind: HullKind, points: &[Point2], cfg: HullCfg) -> Result<Hull, HullError> {
        Ok(match kind {
            HullKind::AngularScan => Hull::AngularScan(AngularScanHull::new(points, cfg)),
            HullKind::GiftWrapping => Hull::GiftWrapping(GiftWrapHull::new(points, cfg)),
            HullKind::Hybrid => Hull::Hybrid(HybridHull::new(points, cfg)?),
        })
    }

    /// Partition diagnostics, available for the hybrid method only.
    pub fn partitions(&self) -> Option<&HybridHull> {
        match self {
            Hull::Hybrid(h) => Some(h),
            _ => None,
        }
    }

    /// Consume the result and keep only the boundary.
    pub fn into_points(self) -> Vec<Point2> {
        match self {
            Hull::AngularScan(h) => h.into_points(),
            Hull::GiftWrapping(h) => h.into_points(),
            Hull::Hybrid(h) => h.into_points(),
        }
    }
}

impl ConvexHull for Hull {
    fn hull(&self) -> &[Point2] {
        match self {
            Hull::AngularScan(h) => h.hull(),
            Hull::GiftWrapping(h) => h.hull(),
            Hull::Hybrid(h) => h.hull(),
        }
    }

    fn kind(&self) -> HullKind {
        match self {
            Hull::AngularScan(h) => h.kind(),
            Hull::GiftWrapping(h) => h.kind(),
            Hull::Hybrid(h) => h.kind(),
        }
    }
}

#[cfg(test)]
mod tests;
