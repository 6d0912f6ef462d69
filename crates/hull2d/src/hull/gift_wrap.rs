//! Gift wrapping (Jarvis march).
//!
//! From the entry point, repeatedly scan every point and keep the most clockwise
//! one (`is_better_candidate`), until the entry point comes around again. O(n·h).
//! Doubles as the reference result the hybrid method is checked against.

use crate::geom::{entry_index, is_better_candidate, points_eq, HullCfg, Point2};

use super::{ConvexHull, HullKind};

/// Gift-wrapping hull result.
#[derive(Clone, Debug)]
pub struct GiftWrapHull {
    hull: Vec<Point2>,
}

impl GiftWrapHull {
    /// Inputs of fewer than three points come back unchanged.
    pub fn new(points: &[Point2], cfg: HullCfg) -> Self {
        Self {
            hull: gift_wrap(points, cfg.eps),
        }
    }

    pub fn into_points(self) -> Vec<Point2> {
        self.hull
    }
}

impl ConvexHull for GiftWrapHull {
    fn hull(&self) -> &[Point2] {
        &self.hull
    }

    fn kind(&self) -> HullKind {
        HullKind::GiftWrapping
    }
}

/// Counter-clockwise hull starting at the entry point.
///
/// Selection tracks indices into the borrowed input; nothing is reordered.
/// At most `points.len()` wrapping steps run.
pub fn gift_wrap(points: &[Point2], eps: f64) -> Vec<Point2> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let Some(entry) = entry_index(points, eps) else {
        return Vec::new();
    };
    let entry_point = points[entry];

    let mut hull = Vec::new();
    let mut current = entry;
    for _ in 0..points.len() {
        let here = points[current];
        hull.push(here);

        let mut next: Option<usize> = None;
        for (i, &p) in points.iter().enumerate() {
            if points_eq(p, here, eps) {
                continue;
            }
            match next {
                Some(j) if !is_better_candidate(p, points[j], here, eps) => {}
                _ => next = Some(i),
            }
        }
        // Every remaining point coincides with `here`.
        let Some(next) = next else {
            break;
        };
        if points_eq(points[next], entry_point, eps) {
            break;
        }
        current = next;
    }
    debug_assert!(hull.len() <= points.len());
    hull
}
