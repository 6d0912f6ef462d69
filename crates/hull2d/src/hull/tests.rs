use super::*;
use crate::geom::{
    lowest_cmp, orientation, points_eq, HullCfg, Point2, TangentSearch, DEFAULT_EPS,
};
use crate::rand2::{circular_points, uniform_points, ReplayToken, SampleCfg};
use nalgebra::vector;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn all_hulls(points: &[Point2], cfg: HullCfg) -> [Vec<Point2>; 3] {
    [
        gift_wrap(points, cfg.eps),
        angular_scan(points, cfg.eps),
        HybridHull::new(points, cfg).unwrap().into_points(),
    ]
}

fn assert_convex_ccw(hull: &[Point2]) {
    let h = hull.len();
    if h < 3 {
        return;
    }
    for i in 0..h {
        let o = orientation(hull[i], hull[(i + 1) % h], hull[(i + 2) % h]);
        assert!(o > 0.0, "non-convex turn at {i}: {o}");
    }
}

fn assert_contains_all(hull: &[Point2], points: &[Point2]) {
    let h = hull.len();
    if h < 3 {
        return;
    }
    for q in points {
        for i in 0..h {
            let o = orientation(hull[i], hull[(i + 1) % h], *q);
            assert!(o >= -1e-6, "point {q:?} outside edge {i}: {o}");
        }
    }
}

fn random_points(n: usize, seed: u64) -> Vec<Point2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| vector![rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0)])
        .collect()
}

#[test]
fn square_with_interior_point() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
        vector![2.0, 2.0],
    ];
    let expected = vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
    ];
    for hull in all_hulls(&pts, HullCfg::default()) {
        assert_eq!(hull, expected);
    }
}

#[test]
fn three_collinear_points_drop_the_middle() {
    let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]];
    for hull in all_hulls(&pts, HullCfg::default()) {
        assert_eq!(hull, vec![vector![0.0, 0.0], vector![2.0, 0.0]]);
    }
}

#[test]
fn twenty_points_match_gift_wrapping() {
    let pts = uniform_points(20, SampleCfg::default(), ReplayToken::new(2024, 0))
        .unwrap()
        .into_vec();
    let cfg = HullCfg::default();
    let hybrid = HybridHull::new(&pts, cfg).unwrap();
    assert!(hybrid.partition_count() >= 3);
    assert_eq!(hybrid.hull(), gift_wrap(&pts, cfg.eps).as_slice());
}

#[test]
fn points_within_eps_count_once() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
        vector![4.0 + 1e-7, 4.0],
        vector![1.0, 1.0],
        vector![2.0, 1.0],
        vector![1.0, 2.0],
    ];
    let corners = [
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
    ];
    for hull in all_hulls(&pts, HullCfg::default()) {
        assert_eq!(hull.len(), 4, "{hull:?}");
        for (got, want) in hull.iter().zip(corners.iter()) {
            assert!(points_eq(*got, *want, DEFAULT_EPS), "{got:?} vs {want:?}");
        }
    }
    // A lone near-duplicate pair is still a single vertex.
    let pair = vec![
        vector![1.0, 1.0],
        vector![1.0 + 1e-7, 1.0],
        vector![1.0, 1.0 + 5e-7],
    ];
    assert_eq!(gift_wrap(&pair, DEFAULT_EPS).len(), 1);
    assert_eq!(angular_scan(&pair, DEFAULT_EPS).len(), 1);
}

#[test]
fn near_collinear_points_across_partitions() {
    // Two partitions of four; (1, 1e-9) shares the bottom ray with (2, 0) within eps.
    let pts = vec![
        vector![0.0, 0.0],
        vector![1.0, 1e-9],
        vector![2.0, 0.0],
        vector![1.0, 0.5],
        vector![0.0, 2.0],
        vector![2.0, 2.0],
        vector![1.0, 1.0],
        vector![1.5, 1.5],
    ];
    let expected = vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 2.0],
    ];
    let hybrid = HybridHull::new(&pts, HullCfg::default()).unwrap();
    assert_eq!(hybrid.partition_count(), 2);
    assert_eq!(
        hybrid.partition_hull(0).unwrap(),
        [vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 0.5]].as_slice()
    );
    for hull in all_hulls(&pts, HullCfg::default()) {
        assert_eq!(hull, expected);
    }
}

#[test]
fn random_sets_agree_across_algorithms() {
    for (seed, n) in [(1u64, 6usize), (2, 7), (3, 50), (4, 333), (5, 1000), (6, 2500)] {
        let pts = random_points(n, seed);
        let [gift, angular, hybrid] = all_hulls(&pts, HullCfg::default());
        assert_eq!(gift, angular, "seed={seed} n={n}");
        assert_eq!(gift, hybrid, "seed={seed} n={n}");
        assert_convex_ccw(&gift);
        assert_contains_all(&gift, &pts);
    }
}

#[test]
fn circle_puts_every_point_on_the_hull() {
    let pts = circular_points(60, SampleCfg::default(), ReplayToken::new(9, 9))
        .unwrap()
        .into_vec();
    let [gift, angular, hybrid] = all_hulls(&pts, HullCfg::default());
    assert_eq!(gift.len(), 60);
    assert_eq!(gift, angular);
    assert_eq!(gift, hybrid);
}

#[test]
fn hybrid_tangent_modes_and_parallel_agree() {
    let pts = random_points(1500, 77);
    let base = HybridHull::new(&pts, HullCfg::default()).unwrap();
    let linear = HybridHull::new(&pts, HullCfg::default().with_tangent(TangentSearch::Linear))
        .unwrap();
    let parallel =
        HybridHull::new(&pts, HullCfg::default().with_parallel_partitions(true)).unwrap();
    assert_eq!(base.hull(), linear.hull());
    assert_eq!(base.hull(), parallel.hull());
    for k in 0..base.partition_count() {
        assert_eq!(base.partition_hull(k), parallel.partition_hull(k));
    }
}

#[test]
fn repeated_runs_are_identical() {
    let pts = random_points(400, 11);
    for kind in HullKind::ALL {
        let a = Hull::compute(kind, &pts, HullCfg::default()).unwrap();
        let b = Hull::compute(kind, &pts, HullCfg::default()).unwrap();
        assert_eq!(a.hull(), b.hull(), "{kind}");
        assert_eq!(a.kind(), kind);
    }
}

#[test]
fn hybrid_partition_diagnostics() {
    let pts = random_points(103, 5);
    let hybrid = HybridHull::new(&pts, HullCfg::default()).unwrap();
    let plan = hybrid.plan().unwrap();
    assert_eq!(plan, partition_plan(103).unwrap());
    assert_eq!(hybrid.partition_count(), plan.count);

    let mut rebuilt = Vec::new();
    for k in 0..hybrid.partition_count() {
        let part = hybrid.partition(k).unwrap();
        assert!(part.len() >= 3);
        rebuilt.extend_from_slice(part);
        let sub = hybrid.partition_hull(k).unwrap();
        assert_eq!(sub, angular_scan(part, DEFAULT_EPS).as_slice());
        // Sub-hull starts at the partition's lowest point.
        for p in part {
            assert!(lowest_cmp(&sub[0], p, DEFAULT_EPS).is_le());
        }
    }
    assert_eq!(rebuilt, pts);
    assert_eq!(hybrid.partition_hulls().count(), plan.count);

    let count = hybrid.partition_count();
    assert_eq!(
        hybrid.partition(count),
        Err(HullError::PartitionIndex {
            index: count,
            count
        })
    );
    assert!(hybrid.partition_hull(count + 5).is_err());
}

#[test]
fn hybrid_bypasses_small_inputs() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![3.0, 1.0],
        vector![1.0, 3.0],
        vector![1.0, 1.0],
        vector![2.0, 0.5],
    ];
    let hybrid = HybridHull::new(&pts, HullCfg::default()).unwrap();
    assert_eq!(hybrid.partition_count(), 0);
    assert_eq!(hybrid.plan(), None);
    assert_eq!(hybrid.hull(), angular_scan(&pts, DEFAULT_EPS).as_slice());
    assert!(matches!(
        hybrid.partition(0),
        Err(HullError::PartitionIndex { index: 0, count: 0 })
    ));
}

#[test]
fn too_few_points_are_rejected() {
    let two = vec![vector![0.0, 0.0], vector![1.0, 1.0]];
    assert_eq!(
        HybridHull::new(&two, HullCfg::default()).err(),
        Some(HullError::TooFewPoints { needed: 3, got: 2 })
    );
    assert!(Hull::compute(HullKind::Hybrid, &two, HullCfg::default()).is_err());
    // The other algorithms pass degenerate input through.
    let gift = Hull::compute(HullKind::GiftWrapping, &two, HullCfg::default()).unwrap();
    assert_eq!(gift.hull(), two.as_slice());
    assert_eq!(PointSet::new(two).err(), Some(HullError::TooFewPoints { needed: 3, got: 2 }));
}

#[test]
fn hull_enum_surface() {
    let pts = random_points(64, 3);
    let hull = Hull::compute(HullKind::Hybrid, &pts, HullCfg::default()).unwrap();
    assert!(hull.partitions().is_some());
    assert_eq!(hull.size(), hull.hull().len());
    assert!(hull.size() <= pts.len());
    let gift = Hull::compute(HullKind::GiftWrapping, &pts, HullCfg::default()).unwrap();
    assert!(gift.partitions().is_none());
    assert_eq!(gift.size(), hull.size());
    assert_eq!(gift.into_points(), hull.into_points());
}

#[test]
fn kind_names_round_trip() {
    for kind in HullKind::ALL {
        assert_eq!(kind.to_string().parse::<HullKind>(), Ok(kind));
    }
    assert_eq!("jarvis".parse::<HullKind>(), Ok(HullKind::GiftWrapping));
    assert_eq!("Graham".parse::<HullKind>(), Ok(HullKind::AngularScan));
    assert_eq!("chan".parse::<HullKind>(), Ok(HullKind::Hybrid));
    assert!("quickhull".parse::<HullKind>().is_err());
}

#[test]
fn point_set_translate() {
    let mut set = PointSet::new(vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![0.0, 1.0],
    ])
    .unwrap();
    set.translate(2.0, -1.0);
    assert_eq!(set.as_slice()[1], vector![3.0, -1.0]);
    assert_eq!(set.len(), 3);
    assert!(!set.is_empty());
}

fn float_points() -> impl Strategy<Value = Vec<Point2>> {
    prop::collection::vec((0.0f64..1000.0, 0.0f64..1000.0), 3..200)
        .prop_map(|v| v.into_iter().map(|(x, y)| vector![x, y]).collect())
}

fn grid_points() -> impl Strategy<Value = Vec<Point2>> {
    prop::collection::vec((0i32..12, 0i32..12), 3..120).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| vector![f64::from(x), f64::from(y)])
            .collect()
    })
}

/// Distinct grid cells nudged by less than 1e-9: every orientation that is zero on
/// the grid stays inside eps, every other one stays far outside it.
fn jittered_grid_points() -> impl Strategy<Value = Vec<Point2>> {
    prop::collection::btree_set((0i32..12, 0i32..12), 3..80)
        .prop_flat_map(|cells| {
            let n = cells.len();
            (
                Just(cells.into_iter().collect::<Vec<_>>()),
                prop::collection::vec((-1e-9f64..1e-9, -1e-9f64..1e-9), n),
            )
        })
        .prop_map(|(cells, jitter)| {
            cells
                .into_iter()
                .zip(jitter)
                .map(|((x, y), (dx, dy))| vector![f64::from(x) + dx, f64::from(y) + dy])
                .collect::<Vec<Point2>>()
        })
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_float_hulls_agree(pts in float_points()) {
        let [gift, angular, hybrid] = all_hulls(&pts, HullCfg::default());
        prop_assert_eq!(&gift, &angular);
        prop_assert_eq!(&gift, &hybrid);
        prop_assert!(gift.len() <= pts.len());
        assert_convex_ccw(&gift);
        assert_contains_all(&gift, &pts);
    }

    #[test]
    fn prop_grid_hulls_agree(pts in grid_points()) {
        // Many duplicates and collinear runs; integer predicates are exact.
        let [gift, angular, hybrid] = all_hulls(&pts, HullCfg::default());
        prop_assert_eq!(&gift, &angular);
        prop_assert_eq!(&gift, &hybrid);
        let linear = HybridHull::new(&pts, HullCfg::default().with_tangent(TangentSearch::Linear))
            .unwrap();
        prop_assert_eq!(linear.hull(), gift.as_slice());
        assert_convex_ccw(&gift);
        assert_contains_all(&gift, &pts);
    }

    #[test]
    fn prop_jittered_grid_hulls_agree(pts in jittered_grid_points()) {
        let [gift, angular, hybrid] = all_hulls(&pts, HullCfg::default());
        prop_assert_eq!(&gift, &angular);
        prop_assert_eq!(&gift, &hybrid);
        let linear = HybridHull::new(&pts, HullCfg::default().with_tangent(TangentSearch::Linear))
            .unwrap();
        prop_assert_eq!(linear.hull(), gift.as_slice());
        assert_convex_ccw(&gift);
        assert_contains_all(&gift, &pts);
    }
}
