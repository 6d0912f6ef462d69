//! Wrapping candidate on a partition hull seen from an outside point.
//!
//! The partition hull is counter-clockwise, so from a point `p` outside it the
//! vertex directions rise to a single most-clockwise vertex and fall again. That
//! vertex (with the farther-collinear tie-break of `is_better_candidate`) is the
//! candidate the merge compares across partitions.
//!
//! `Binary` locates the tangent in O(log m) and then climbs along neighbours while
//! one of them is better, so the returned vertex is exact even when the binary
//! search is thrown off by near-collinear input.

use crate::geom::{is_better_candidate, orientation, points_eq, Point2, TangentSearch};

/// Index of the best wrapping candidate on `hull` as seen from `p`.
///
/// Vertices equal to `p` are never returned; `None` if every vertex equals `p`.
pub(crate) fn wrap_candidate(
    hull: &[Point2],
    p: Point2,
    eps: f64,
    search: TangentSearch,
) -> Option<usize> {
    let m = hull.len();
    if m < 3 || search == TangentSearch::Linear {
        return linear(hull, p, eps);
    }
    let start = binary(hull, p, eps).unwrap_or(0);
    climb(hull, p, eps, start)
}

/// Full scan over the hull vertices.
fn linear(hull: &[Point2], p: Point2, eps: f64) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &q) in hull.iter().enumerate() {
        if points_eq(q, p, eps) {
            continue;
        }
        match best {
            Some(j) if !is_better_candidate(q, hull[j], p, eps) => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Binary search for the most-clockwise vertex as seen from `p`.
///
/// `above(i, j)`: vertex `j` lies strictly counter-clockwise of `p → i`.
/// An edge `i → i+1` "rises" when `i+1` is more clockwise than `i`.
fn binary(hull: &[Point2], p: Point2, eps: f64) -> Option<usize> {
    let m = hull.len();
    let at = |i: usize| hull[i % m];
    let above = |i: usize, j: usize| orientation(p, at(i), at(j)) > eps;
    let below = |i: usize, j: usize| orientation(p, at(i), at(j)) < -eps;
    // `i` is the tangent when edge i falls and edge i-1 did not fall into it.
    let is_tangent = |i: usize| below(i + 1, i) && !above(i + m - 1, i);

    if is_tangent(0) {
        return Some(0);
    }
    let (mut a, mut b) = (0usize, m);
    while b - a > 1 {
        let c = (a + b) / 2;
        let falls_c = below(c + 1, c);
        if falls_c && !above(c - 1, c) {
            return Some(c % m);
        }
        let rises_a = above(a + 1, a);
        if rises_a {
            if falls_c || above(a, c) {
                b = c;
            } else {
                a = c;
            }
        } else if falls_c && below(a, c) {
            b = c;
        } else {
            a = c;
        }
    }
    [a % m, b % m].into_iter().find(|&i| is_tangent(i))
}

/// Move to a better neighbour until neither neighbour improves.
///
/// Bounded by one lap around the hull.
fn climb(hull: &[Point2], p: Point2, eps: f64, start: usize) -> Option<usize> {
    let m = hull.len();
    let mut cur = start;
    if points_eq(hull[cur], p, eps) {
        cur = (cur + 1) % m;
        if points_eq(hull[cur], p, eps) {
            return linear(hull, p, eps);
        }
    }
    for _ in 0..m {
        let prev = (cur + m - 1) % m;
        let next = (cur + 1) % m;
        let here = hull[cur];
        let better =
            |j: usize| !points_eq(hull[j], p, eps) && is_better_candidate(hull[j], here, p, eps);
        if better(next) {
            cur = next;
        } else if better(prev) {
            cur = prev;
        } else {
            return Some(cur);
        }
    }
    tracing::trace!(start, m, "tangent climb exhausted; falling back to linear scan");
    linear(hull, p, eps)
}
