//! Angular scan (Graham scan).
//!
//! Sort by polar angle around the entry point using the cross-product sign, then
//! keep only strict left turns on a stack. O(n log n).
//!
//! Points on one ray from the entry point (collinear within eps) enter the scan
//! nearest first, so the farthest of them is the one left on the stack.

use std::cmp::Ordering;

use crate::geom::{
    distance_squared, entry_index, orientation, points_eq, turn, HullCfg, Point2, Turn,
};

use super::{ConvexHull, HullKind};

/// Angular-scan hull result.
#[derive(Clone, Debug)]
pub struct AngularScanHull {
    hull: Vec<Point2>,
}

impl AngularScanHull {
    /// Inputs of fewer than three points come back unchanged.
    pub fn new(points: &[Point2], cfg: HullCfg) -> Self {
        Self {
            hull: angular_scan(points, cfg.eps),
        }
    }

    pub fn into_points(self) -> Vec<Point2> {
        self.hull
    }
}

impl ConvexHull for AngularScanHull {
    fn hull(&self) -> &[Point2] {
        &self.hull
    }

    fn kind(&self) -> HullKind {
        HullKind::AngularScan
    }
}

/// Polar order around `pivot`; ties on the same ray go nearest first.
///
/// Uses the exact cross-product sign so the order stays a strict weak order;
/// eps-collinear runs are fixed up afterwards by `order_rays`.
fn polar_cmp(pivot: Point2, a: &Point2, b: &Point2) -> Ordering {
    let o = orientation(pivot, *a, *b);
    if o > 0.0 {
        Ordering::Less
    } else if o < 0.0 {
        Ordering::Greater
    } else {
        distance_squared(pivot, *a).total_cmp(&distance_squared(pivot, *b))
    }
}

/// Reorder each run of points collinear with `pivot` (within `eps`, same side)
/// nearest first. The exact sort may leave such a run in any order.
fn order_rays(pivot: Point2, sorted: &mut [Point2], eps: f64) {
    let same_ray = |a: Point2, b: Point2| {
        turn(pivot, a, b, eps) == Turn::Collinear && (a - pivot).dot(&(b - pivot)) > 0.0
    };
    let mut start = 0;
    while start < sorted.len() {
        let head = sorted[start];
        let mut end = start + 1;
        while end < sorted.len() && same_ray(head, sorted[end]) {
            end += 1;
        }
        if end - start > 1 {
            sorted[start..end].sort_by(|a, b| {
                distance_squared(pivot, *a).total_cmp(&distance_squared(pivot, *b))
            });
        }
        start = end;
    }
}

/// Counter-clockwise hull starting at the entry point.
///
/// Points equal to the entry point (within `eps`) are dropped before sorting, and
/// equal neighbours collapse during the scan, so the boundary never repeats a point.
pub fn angular_scan(points: &[Point2], eps: f64) -> Vec<Point2> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let Some(pivot_idx) = entry_index(points, eps) else {
        return Vec::new();
    };
    let pivot = points[pivot_idx];

    let mut rest: Vec<Point2> = points
        .iter()
        .copied()
        .filter(|p| !points_eq(*p, pivot, eps))
        .collect();
    rest.sort_by(|a, b| polar_cmp(pivot, a, b));
    order_rays(pivot, &mut rest, eps);

    let mut hull: Vec<Point2> = Vec::with_capacity(rest.len() + 1);
    hull.push(pivot);
    for p in rest {
        while hull.len() >= 2 {
            let top = hull[hull.len() - 1];
            let below = hull[hull.len() - 2];
            if points_eq(top, p, eps) || turn(below, top, p, eps) != Turn::Left {
                hull.pop();
            } else {
                break;
            }
        }
        hull.push(p);
    }
    // A last vertex (nearly) on the closing edge back to the pivot is not a corner.
    while hull.len() >= 3
        && turn(hull[hull.len() - 2], hull[hull.len() - 1], pivot, eps) != Turn::Left
    {
        hull.pop();
    }
    debug_assert!(hull.len() <= points.len());
    hull
}
