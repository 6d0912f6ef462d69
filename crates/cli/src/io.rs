//! Point tables on disk: `x,y` columns as CSV, or Parquet when the path ends in `.parquet`.

use anyhow::{anyhow, Context, Result};
use hull2d::{Point2, Vec2};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

fn is_parquet(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "parquet")
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Read the `x` and `y` columns; integer columns are widened to f64.
pub fn read_points(path: &Path) -> Result<Vec<Point2>> {
    let lf = if is_parquet(path) {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())
    } else {
        LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()
    }
    .with_context(|| format!("opening {}", path.display()))?;
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, pair)| match pair {
            (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
            _ => Err(anyhow!("{}: missing coordinate in row {row}", path.display())),
        })
        .collect()
}

pub fn points_frame(points: &[Point2]) -> Result<DataFrame> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    Ok(df!("x" => xs, "y" => ys)?)
}

pub fn write_frame(path: &Path, df: &mut DataFrame) -> Result<()> {
    ensure_parent(path)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if is_parquet(path) {
        ParquetWriter::new(&mut file)
            .finish(df)
            .with_context(|| format!("writing {}", path.display()))?;
    } else {
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(df)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

pub fn write_points(path: &Path, points: &[Point2]) -> Result<()> {
    let mut df = points_frame(points)?;
    write_frame(path, &mut df)
}
