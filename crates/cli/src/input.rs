//! Point-set loading: columns `x` and `y` from CSV (with header) or Parquet.

use std::path::Path;

use anyhow::{bail, Context, Result};
use kout::PointSet;
use polars::prelude::*;

fn scan(path: &Path) -> Result<LazyFrame> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()?,
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        _ => bail!("unsupported input {} (expected .csv or .parquet)", path.display()),
    };
    Ok(lf)
}

/// Read `(x, y)` pairs in file order; row order becomes the canonical rank.
pub fn read_points(path: &Path) -> Result<Vec<(f64, f64)>> {
    let df = scan(path)?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading columns x,y from {}", path.display()))?;
    tracing::info!(rows = df.height(), path = %path.display(), "input points");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push((x, y)),
            _ => bail!("row {row} of {} has a missing coordinate", path.display()),
        }
    }
    Ok(out)
}

/// Load and validate: at least 3 finite points, in general position.
pub fn load_point_set(path: &Path) -> Result<PointSet> {
    let coords = read_points(path)?;
    let set = PointSet::new(&coords)
        .with_context(|| format!("building point set from {}", path.display()))?;
    set.check_general_position()
        .with_context(|| format!("{} is not in general position", path.display()))?;
    Ok(set)
}
