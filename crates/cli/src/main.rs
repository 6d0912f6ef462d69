use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hull2d::prelude::*;
use polars::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "hull-cli")]
#[command(about = "Sample point sets, compute convex hulls, and time the hull algorithms")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Write a reproducible point sample as an x,y table
    Sample {
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Place the points on a circle instead of the padded rectangle
        #[arg(long)]
        circular: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Compute one hull and write its vertices (counter-clockwise from the lowest point)
    Hull {
        /// gift-wrapping | angular-scan | hybrid (aliases: jarvis, graham, chan)
        #[arg(long)]
        algo: HullKind,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = DEFAULT_EPS)]
        eps: f64,
        /// Hybrid tangent search: binary | linear
        #[arg(long, default_value_t = TangentSearch::Binary)]
        tangent: TangentSearch,
        /// Build hybrid partition hulls on the rayon pool
        #[arg(long)]
        parallel: bool,
    },
    /// Time all three algorithms over sampled inputs and write a timings table
    Bench {
        #[arg(long, value_delimiter = ',', default_value = "100,1000,10000")]
        sizes: Vec<usize>,
        #[arg(long, default_value_t = 5)]
        trials: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        circular: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Sample {
            n,
            seed,
            circular,
            out,
        } => sample(n, seed, circular, &out),
        Action::Hull {
            algo,
            input,
            out,
            eps,
            tangent,
            parallel,
        } => {
            let cfg = HullCfg::default()
                .with_eps(eps)
                .with_tangent(tangent)
                .with_parallel_partitions(parallel);
            hull(algo, &input, &out, cfg).map(|_| ())
        }
        Action::Bench {
            sizes,
            trials,
            seed,
            circular,
            out,
        } => bench(&sizes, trials, seed, circular, &out).map(|_| ()),
        Action::Report => report(),
    }
}

fn draw(n: usize, circular: bool, tok: ReplayToken) -> Result<PointSet> {
    let cfg = SampleCfg::default();
    let set = if circular {
        circular_points(n, cfg, tok)
    } else {
        uniform_points(n, cfg, tok)
    };
    set.with_context(|| format!("sampling {n} points"))
}

#[derive(Serialize)]
struct SampleParams {
    n: usize,
    seed: u64,
    circular: bool,
    width: f64,
    height: f64,
    padding: f64,
}

fn sample(n: usize, seed: u64, circular: bool, out: &Path) -> Result<()> {
    tracing::info!(n, seed, circular, out = %out.display(), "sample");
    let set = draw(n, circular, ReplayToken::new(seed, 0))?;
    io::write_points(out, set.as_slice())?;
    let canvas = SampleCfg::default();
    let params = SampleParams {
        n,
        seed,
        circular,
        width: canvas.width,
        height: canvas.height,
        padding: canvas.padding,
    };
    write_sidecar(out, Payload::new("sample", serde_json::to_value(params)?))?;
    Ok(())
}

#[derive(Serialize)]
struct HullParams {
    algo: String,
    input: String,
    eps: f64,
    tangent: String,
    parallel: bool,
    n: usize,
    hull_size: usize,
    partition_size: Option<usize>,
    partitions: Option<usize>,
}

fn hull(algo: HullKind, input: &Path, out: &Path, cfg: HullCfg) -> Result<Hull> {
    tracing::info!(%algo, input = %input.display(), out = %out.display(), "hull");
    let points = io::read_points(input)?;
    let start = Instant::now();
    let result = Hull::compute(algo, &points, cfg)
        .with_context(|| format!("{algo} hull of {}", input.display()))?;
    let elapsed_us = micros(start);

    let plan = result.partitions().and_then(|h| h.plan());
    if let Some(hybrid) = result.partitions() {
        for (k, sub) in hybrid.partition_hulls().enumerate() {
            tracing::debug!(partition = k, vertices = sub.len(), "partition hull");
        }
    }
    tracing::info!(
        n = points.len(),
        h = result.size(),
        elapsed_us,
        partition_size = plan.map(|p| p.size),
        partitions = plan.map(|p| p.count),
        "hull computed"
    );

    io::write_points(out, result.hull())?;
    let params = HullParams {
        algo: algo.to_string(),
        input: input.display().to_string(),
        eps: cfg.eps,
        tangent: cfg.tangent.to_string(),
        parallel: cfg.parallel_partitions,
        n: points.len(),
        hull_size: result.size(),
        partition_size: plan.map(|p| p.size),
        partitions: plan.map(|p| p.count),
    };
    write_sidecar(out, Payload::new("hull", serde_json::to_value(params)?))?;
    Ok(result)
}

/// One timed row of the `bench` table.
#[derive(Clone, Debug, PartialEq)]
struct Timing {
    n: usize,
    trial: u64,
    gift_wrapping_us: u64,
    angular_scan_us: u64,
    hybrid_us: u64,
    hull_size: usize,
}

fn timed(kind: HullKind, points: &[Point2], cfg: HullCfg) -> Result<(u64, usize)> {
    let start = Instant::now();
    let result = Hull::compute(kind, points, cfg)?;
    Ok((micros(start), result.size()))
}

fn micros(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}

fn timings_frame(rows: &[Timing]) -> Result<DataFrame> {
    let col_u64 = |f: fn(&Timing) -> u64| rows.iter().map(f).collect::<Vec<u64>>();
    Ok(df!(
        "n" => col_u64(|r| r.n as u64),
        "trial" => col_u64(|r| r.trial),
        "gift_wrapping_us" => col_u64(|r| r.gift_wrapping_us),
        "angular_scan_us" => col_u64(|r| r.angular_scan_us),
        "hybrid_us" => col_u64(|r| r.hybrid_us),
        "hull_size" => col_u64(|r| r.hull_size as u64)
    )?)
}

#[derive(Serialize)]
struct BenchParams<'a> {
    sizes: &'a [usize],
    trials: u64,
    seed: u64,
    circular: bool,
    mismatches: usize,
}

fn bench(
    sizes: &[usize],
    trials: u64,
    seed: u64,
    circular: bool,
    out: &Path,
) -> Result<Vec<Timing>> {
    tracing::info!(?sizes, trials, seed, circular, out = %out.display(), "bench");
    let cfg = HullCfg::default();
    let mut rows = Vec::new();
    let mut mismatches = 0usize;
    for &n in sizes {
        for trial in 0..trials {
            let tok = ReplayToken::new(seed, ((n as u64) << 16) | trial);
            let set = draw(n, circular, tok)?;
            let pts = set.as_slice();
            let (gift_us, gift_h) = timed(HullKind::GiftWrapping, pts, cfg)?;
            let (angular_us, angular_h) = timed(HullKind::AngularScan, pts, cfg)?;
            let (hybrid_us, hybrid_h) = timed(HullKind::Hybrid, pts, cfg)?;
            if angular_h != gift_h || hybrid_h != gift_h {
                mismatches += 1;
                tracing::warn!(n, trial, gift_h, angular_h, hybrid_h, "hull sizes disagree");
            }
            tracing::debug!(n, trial, gift_us, angular_us, hybrid_us, h = gift_h, "trial");
            rows.push(Timing {
                n,
                trial,
                gift_wrapping_us: gift_us,
                angular_scan_us: angular_us,
                hybrid_us,
                hull_size: gift_h,
            });
        }
    }

    let mut df = timings_frame(&rows)?;
    io::write_frame(out, &mut df)?;
    let params = BenchParams {
        sizes,
        trials,
        seed,
        circular,
        mismatches,
    };
    write_sidecar(out, Payload::new("bench", serde_json::to_value(params)?))?;
    if mismatches > 0 {
        bail!("{mismatches} trial(s) produced hull sizes that disagree with gift wrapping");
    }
    Ok(rows)
}

fn report() -> Result<()> {
    let algos: Vec<&str> = HullKind::ALL.iter().map(|k| k.as_str()).collect();
    let defaults = HullCfg::default();
    let doc = provenance::document(
        "report",
        serde_json::json!({
            "algorithms": algos,
            "eps": defaults.eps,
            "tangent": defaults.tangent.as_str(),
        }),
        Vec::new(),
    );
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
