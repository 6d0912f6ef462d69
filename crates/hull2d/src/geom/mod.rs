//! Planar geometry primitives shared by every hull algorithm.
//!
//! Purpose
//! - One point type (`Point2`), one tolerance carrier (`HullCfg`), and the small
//!   set of eps-aware predicates the algorithms are built from.
//! - Keep all eps decisions here so the three algorithms agree on which of several
//!   collinear or coincident points survives onto the hull.
//!
//! Code cross-refs: `hull::{gift_wrap, angular_scan, HybridHull}`

mod predicates;
mod types;

pub use predicates::{
    distance_squared, entry_index, is_better_candidate, lowest_cmp, orientation, points_eq, turn,
    Turn,
};
pub use types::{HullCfg, Point2, TangentSearch, DEFAULT_EPS};
