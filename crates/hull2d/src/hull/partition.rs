//! Partition sizing for the hybrid hull.
//!
//! Policy
//! - The partition size is a fixed fraction (20%) of the input, floored, never
//!   below three. It does not depend on the final hull size.
//! - The size grows until the remainder is either zero or at least three, so no
//!   partition ever holds one or two points.

use std::ops::Range;

/// Inputs below this size skip partitioning entirely.
pub(crate) const BYPASS_BELOW: usize = 6;
/// Smallest partition that still yields a usable sub-hull.
pub(crate) const MIN_PARTITION: usize = 3;

/// Outcome of partition sizing for `n` points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartitionPlan {
    /// Points per partition (all but possibly the last).
    pub size: usize,
    /// Size of the trailing partition, or 0 when `size` divides `n`.
    pub remainder: usize,
    /// Number of partitions.
    pub count: usize,
}

impl PartitionPlan {
    /// Contiguous index ranges, the last one absorbing the remainder.
    pub fn ranges(self, n: usize) -> impl Iterator<Item = Range<usize>> {
        let size = self.size;
        (0..self.count).map(move |k| {
            let start = k * size;
            start..(start + size).min(n)
        })
    }
}

/// Partition plan for `n` points; `None` below the bypass threshold.
pub fn partition_plan(n: usize) -> Option<PartitionPlan> {
    if n < BYPASS_BELOW {
        return None;
    }
    let mut size = (n * 2 / 10).max(MIN_PARTITION);
    let mut remainder = n % size;
    while remainder != 0 && remainder < MIN_PARTITION {
        size += 1;
        remainder = n % size;
    }
    let count = n / size + usize::from(remainder != 0);
    Some(PartitionPlan {
        size,
        remainder,
        count,
    })
}
