use crate::geom::Point2;

use super::HullError;

/// Minimum number of points accepted by `PointSet`.
const MIN_POINTS: usize = 3;

/// Validated input sequence: at least three points, order preserved.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    points: Vec<Point2>,
}

impl PointSet {
    pub fn new(points: Vec<Point2>) -> Result<Self, HullError> {
        if points.len() < MIN_POINTS {
            return Err(HullError::TooFewPoints {
                needed: MIN_POINTS,
                got: points.len(),
            });
        }
        Ok(Self { points })
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2> {
        self.points.iter()
    }

    /// Shift every point by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        let shift = Point2::new(dx, dy);
        for p in &mut self.points {
            *p += shift;
        }
    }

    pub fn into_vec(self) -> Vec<Point2> {
        self.points
    }
}

impl TryFrom<Vec<Point2>> for PointSet {
    type Error = HullError;

    fn try_from(points: Vec<Point2>) -> Result<Self, Self::Error> {
        PointSet::new(points)
    }
}

impl AsRef<[Point2]> for PointSet {
    fn as_ref(&self) -> &[Point2] {
        &self.points
    }
}
