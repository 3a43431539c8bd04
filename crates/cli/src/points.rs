//! Point-set input/output for the CLI: CSV via polars, JSON reports via serde.

use anyhow::{Context, Result};
use hull2::{HullAlgorithm, Line, Point};
use polars::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;

/// Read points from a CSV file with numeric `x` and `y` columns (header required).
pub fn read_points_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let xs = column_f64(&df, "x")?;
    let ys = column_f64(&df, "y")?;
    Ok(xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| Point::new(x, y))
        .collect())
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    column
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("empty `{name}` value in row {row}")))
        .collect()
}

/// Write points as a two-column `x,y` CSV (replayable through `read_points_csv`).
pub fn write_points_csv(path: &Path, points: &[Point]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x()).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y()).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// JSON summary of one hull computation.
#[derive(Debug, Serialize)]
pub struct HullReport {
    pub algo: String,
    pub seed: Option<u64>,
    pub points: Vec<[f64; 2]>,
    pub hull: Vec<[f64; 2]>,
    pub edges: Vec<[[f64; 2]; 2]>,
}

impl HullReport {
    pub fn new(
        algo: HullAlgorithm,
        seed: Option<u64>,
        points: &[Point],
        hull: &[Point],
        edges: &[Line],
    ) -> Self {
        Self {
            algo: algo.name().to_string(),
            seed,
            points: points.iter().copied().map(xy).collect(),
            hull: hull.iter().copied().map(xy).collect(),
            edges: edges
                .iter()
                .map(|e| [xy(e.start()), xy(e.end())])
                .collect(),
        }
    }
}

#[inline]
fn xy(p: Point) -> [f64; 2] {
    [p.x(), p.y()]
}

/// Serialize `value` as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
