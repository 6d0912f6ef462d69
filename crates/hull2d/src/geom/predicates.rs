use std::cmp::Ordering;

use super::types::Point2;

/// Turn direction of three ordered points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Collinear,
    Right,
}

/// Signed cross product of `b - a` and `c - a`.
/// Positive when `a → b → c` turns counter-clockwise.
#[inline]
pub fn orientation(a: Point2, b: Point2, c: Point2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Classify `orientation(a, b, c)`; magnitudes below `eps` are collinear.
#[inline]
pub fn turn(a: Point2, b: Point2, c: Point2, eps: f64) -> Turn {
    let o = orientation(a, b, c);
    if o.abs() < eps {
        Turn::Collinear
    } else if o > 0.0 {
        Turn::Left
    } else {
        Turn::Right
    }
}

#[inline]
pub fn distance_squared(a: Point2, b: Point2) -> f64 {
    let d = a - b;
    d.x * d.x + d.y * d.y
}

/// Coordinate-wise equality up to `eps`.
#[inline]
pub fn points_eq(a: Point2, b: Point2, eps: f64) -> bool {
    (a.x - b.x).abs() < eps && (a.y - b.y).abs() < eps
}

/// Entry-point order: lower y first, then lower x.
///
/// y values within `eps` of each other tie and fall through to x; exact y only
/// breaks the tie when x is equal as well. The eps tie is not transitive, so this
/// drives linear minimum scans, never a sort.
#[inline]
pub fn lowest_cmp(a: &Point2, b: &Point2, eps: f64) -> Ordering {
    if (a.y - b.y).abs() < eps {
        a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
    } else {
        a.y.total_cmp(&b.y)
    }
}

/// Index of the entry point (first minimum under `lowest_cmp`), `None` if empty.
pub fn entry_index(points: &[Point2], eps: f64) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in points.iter().enumerate() {
        match best {
            Some(j) if lowest_cmp(p, &points[j], eps) != Ordering::Less => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Wrapping selection rule shared by gift wrapping and the hybrid merge.
///
/// Hulls wrap counter-clockwise, so `candidate` beats `best` when it lies strictly
/// to the right of the ray `pivot → best`. Within `eps` of collinear, the point
/// farther from `pivot` wins, which keeps collinear middle points off the hull.
#[inline]
pub fn is_better_candidate(candidate: Point2, best: Point2, pivot: Point2, eps: f64) -> bool {
    match turn(pivot, best, candidate, eps) {
        Turn::Right => true,
        Turn::Left => false,
        Turn::Collinear => distance_squared(pivot, candidate) > distance_squared(pivot, best),
    }
}
