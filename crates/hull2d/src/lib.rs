//! Planar convex hulls.
//!
//! Three interchangeable constructions over the same input/output contract:
//! - gift wrapping (Jarvis march), O(n·h);
//! - angular scan (Graham scan), O(n log n);
//! - hybrid partitioned hull: angular-scan hulls per contiguous partition, merged
//!   by a wrapping pass that jumps onto each partition hull via tangent search.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; identity and collinearity go through the
//!   eps-aware predicates in [`geom`], with eps carried by [`HullCfg`].
//! - Every hull is counter-clockwise and starts at the entry point (lowest y, then
//!   lowest x).

pub mod geom;
pub mod hull;
pub mod rand2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{HullCfg, Point2, TangentSearch, DEFAULT_EPS};
pub use hull::{ConvexHull, Hull, HullError, HullKind, PointSet};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{
        distance_squared, is_better_candidate, orientation, points_eq, turn, HullCfg, Point2,
        TangentSearch, Turn, DEFAULT_EPS,
    };
    pub use crate::hull::{
        angular_scan, gift_wrap, partition_plan, AngularScanHull, ConvexHull, GiftWrapHull, Hull,
        HullError, HullKind, HybridHull, PartitionPlan, PointSet,
    };
    pub use crate::rand2::{circular_points, uniform_points, ReplayToken, SampleCfg, SampleError};
    pub use nalgebra::Vector2 as Vec2;
}
