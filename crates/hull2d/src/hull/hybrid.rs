//! Hybrid partitioned hull (Chan-style merge with fixed partition sizing).
//!
//! Steps
//! - Below six points: angular scan over the whole input, no partitions.
//! - Slice the input into contiguous partitions (`partition_plan`) and build an
//!   angular-scan hull per partition; partitions are independent, optionally on
//!   the rayon pool.
//! - Entry point: lowest first vertex over all partition hulls.
//! - Wrap: from the current vertex, each partition offers one candidate (the
//!   cyclic successor on its own hull, or the tangent vertex on a foreign hull);
//!   the best candidate under `is_better_candidate` is appended until the entry
//!   point comes around again.
//!
//! Cost: O(n log m) for the partition hulls plus O(h · (k + log m)) for the merge,
//! k partitions of size m.

use std::ops::Range;

use rayon::prelude::*;

use crate::geom::{is_better_candidate, lowest_cmp, points_eq, HullCfg, Point2};

use super::angular::angular_scan;
use super::partition::{partition_plan, PartitionPlan, MIN_PARTITION};
use super::tangent::wrap_candidate;
use super::{ConvexHull, HullError, HullKind};

/// One contiguous slice of the input and its angular-scan hull.
#[derive(Clone, Debug)]
struct Partition {
    range: Range<usize>,
    hull: Vec<Point2>,
}

/// Vertex address: (partition, index on that partition's hull).
type Vertex = (usize, usize);

/// Hybrid hull result plus partition diagnostics.
#[derive(Clone, Debug)]
pub struct HybridHull {
    points: Vec<Point2>,
    plan: Option<PartitionPlan>,
    partitions: Vec<Partition>,
    hull: Vec<Point2>,
}

impl HybridHull {
    /// Fails with `TooFewPoints` below three points.
    pub fn new(points: &[Point2], cfg: HullCfg) -> Result<Self, HullError> {
        if points.len() < MIN_PARTITION {
            return Err(HullError::TooFewPoints {
                needed: MIN_PARTITION,
                got: points.len(),
            });
        }
        let points = points.to_vec();
        let Some(plan) = partition_plan(points.len()) else {
            let hull = angular_scan(&points, cfg.eps);
            tracing::debug!(n = points.len(), h = hull.len(), "hybrid bypass: angular scan");
            return Ok(Self {
                points,
                plan: None,
                partitions: Vec::new(),
                hull,
            });
        };

        let partitions = build_partitions(&points, plan, cfg);
        let hull = merge(&partitions, points.len(), cfg);
        tracing::debug!(
            n = points.len(),
            partition_size = plan.size,
            partitions = plan.count,
            h = hull.len(),
            "hybrid hull merged"
        );
        Ok(Self {
            points,
            plan: Some(plan),
            partitions,
            hull,
        })
    }

    /// Partition sizing used, `None` when the input bypassed partitioning.
    #[inline]
    pub fn plan(&self) -> Option<PartitionPlan> {
        self.plan
    }

    #[inline]
    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    /// Input points of partition `idx`.
    pub fn partition(&self, idx: usize) -> Result<&[Point2], HullError> {
        let part = self.get(idx)?;
        Ok(&self.points[part.range.clone()])
    }

    /// Angular-scan hull of partition `idx`, starting at that partition's lowest point.
    pub fn partition_hull(&self, idx: usize) -> Result<&[Point2], HullError> {
        Ok(&self.get(idx)?.hull)
    }

    /// All partition hulls in partition order.
    pub fn partition_hulls(&self) -> impl Iterator<Item = &[Point2]> + '_ {
        self.partitions.iter().map(|p| p.hull.as_slice())
    }

    pub fn into_points(self) -> Vec<Point2> {
        self.hull
    }

    fn get(&self, idx: usize) -> Result<&Partition, HullError> {
        self.partitions.get(idx).ok_or(HullError::PartitionIndex {
            index: idx,
            count: self.partitions.len(),
        })
    }
}

impl ConvexHull for HybridHull {
    fn hull(&self) -> &[Point2] {
        &self.hull
    }

    fn kind(&self) -> HullKind {
        HullKind::Hybrid
    }
}

fn build_partitions(points: &[Point2], plan: PartitionPlan, cfg: HullCfg) -> Vec<Partition> {
    let ranges: Vec<Range<usize>> = plan.ranges(points.len()).collect();
    let build = |range: Range<usize>| {
        let hull = angular_scan(&points[range.clone()], cfg.eps);
        Partition { range, hull }
    };
    if cfg.parallel_partitions {
        ranges.into_par_iter().map(build).collect()
    } else {
        ranges.into_iter().map(build).collect()
    }
}

/// Entry vertex: the lowest first vertex among the partition hulls.
fn entry_vertex(partitions: &[Partition], eps: f64) -> Option<Vertex> {
    let mut best: Option<Vertex> = None;
    for (k, part) in partitions.iter().enumerate() {
        let Some(first) = part.hull.first() else {
            continue;
        };
        match best {
            Some((bk, bi)) if lowest_cmp(first, &partitions[bk].hull[bi], eps).is_ge() => {}
            _ => best = Some((k, 0)),
        }
    }
    best
}

/// Wrap around the partition hulls; at most `max_steps` vertices are emitted.
fn merge(partitions: &[Partition], max_steps: usize, cfg: HullCfg) -> Vec<Point2> {
    let eps = cfg.eps;
    let vertex = |(k, i): Vertex| partitions[k].hull[i];
    let Some(entry) = entry_vertex(partitions, eps) else {
        return Vec::new();
    };
    let entry_point = vertex(entry);

    let mut hull = Vec::new();
    let mut current = entry;
    for _ in 0..max_steps {
        let here = vertex(current);
        hull.push(here);

        let mut best: Option<Vertex> = None;
        for (k, part) in partitions.iter().enumerate() {
            let m = part.hull.len();
            let idx = if k == current.0 {
                // Own hull: the cyclic successor, unless the hull is a single point.
                Some((current.1 + 1) % m).filter(|&i| !points_eq(part.hull[i], here, eps))
            } else {
                wrap_candidate(&part.hull, here, eps, cfg.tangent)
            };
            let Some(idx) = idx else {
                continue;
            };
            match best {
                Some(b) if !is_better_candidate(part.hull[idx], vertex(b), here, eps) => {}
                _ => best = Some((k, idx)),
            }
        }

        let Some(next) = best else {
            break;
        };
        if points_eq(vertex(next), entry_point, eps) {
            break;
        }
        current = next;
    }
    hull
}
