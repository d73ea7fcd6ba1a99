use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kout::rand::{random_point_set, RandomCfg, ReplayToken};
use kout::{enumerate, EnumCfg, PointSet, Stats};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Enumerate k-out polygons of a planar point set")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Enumerate over points read from a .csv/.parquet file with columns x,y
    Enumerate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = 0)]
        k: usize,
        /// Abort once more than this many polygons would be produced
        #[arg(long)]
        max_polygons: Option<usize>,
        /// Write the summary here (plus a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Enumerate over a reproducible random preset
    Random {
        #[arg(long, default_value_t = 8)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        k: usize,
        #[arg(long)]
        max_polygons: Option<usize>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

/// What gets printed and optionally written. Polygons themselves are not
/// serialized; only counts and the hull.
#[derive(Serialize, Debug)]
struct Summary {
    points: usize,
    k_requested: usize,
    k_effective: usize,
    polygons: usize,
    hull: Vec<usize>,
    by_vertices: BTreeMap<usize, usize>,
    by_outside: BTreeMap<usize, usize>,
    by_inside: BTreeMap<usize, usize>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Enumerate {
            input,
            k,
            max_polygons,
            out,
        } => run_file(&input, k, max_polygons, out),
        Action::Random {
            count,
            seed,
            k,
            max_polygons,
            out,
        } => run_random(count, seed, k, max_polygons, out),
        Action::Report => report(),
    }
}

fn summarize(set: &PointSet, cfg: EnumCfg) -> Result<Summary> {
    let polygons = enumerate(set, cfg).context("enumerating k-out polygons")?;
    let stats = Stats::collect(set, &polygons);
    Ok(Summary {
        points: stats.points,
        k_requested: cfg.k,
        k_effective: cfg.effective_k(set),
        polygons: stats.polygons,
        hull: polygons.first().map(|p| p.ranks()).unwrap_or_default(),
        by_vertices: stats.by_vertices,
        by_outside: stats.by_outside,
        by_inside: stats.by_inside,
    })
}

fn emit(summary: &Summary, out: Option<&Path>, payload: provenance::Payload) -> Result<()> {
    let text = serde_json::to_string_pretty(summary)?;
    println!("{text}");
    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating output dir {}", parent.display()))?;
            }
        }
        std::fs::write(out, text.as_bytes())
            .with_context(|| format!("writing {}", out.display()))?;
        let prov = provenance::write_sidecar(out, payload)?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "summary written");
    }
    Ok(())
}

fn run_file(input: &Path, k: usize, max_polygons: Option<usize>, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(input = %input.display(), k, max_polygons = ?max_polygons, "enumerate");
    let set = input::load_point_set(input)?;
    let summary = summarize(&set, EnumCfg { k, max_polygons })?;
    tracing::info!(polygons = summary.polygons, "done");
    let payload = provenance::Payload::new(json!({
        "input": input.to_string_lossy(),
        "k": k,
        "max_polygons": max_polygons,
    }));
    emit(&summary, out.as_deref(), payload)
}

fn run_random(
    count: usize,
    seed: u64,
    k: usize,
    max_polygons: Option<usize>,
    out: Option<PathBuf>,
) -> Result<()> {
    tracing::info!(count, seed, k, max_polygons = ?max_polygons, "random");
    let cfg = RandomCfg {
        count,
        ..RandomCfg::default()
    };
    let set = random_point_set(cfg, ReplayToken::new(seed)).context("drawing random preset")?;
    let summary = summarize(&set, EnumCfg { k, max_polygons })?;
    tracing::info!(polygons = summary.polygons, "done");
    let payload = provenance::Payload::new(json!({
        "count": count,
        "k": k,
        "max_polygons": max_polygons,
    }))
    .with_seed(seed);
    emit(&summary, out.as_deref(), payload)
}

fn report() -> Result<()> {
    let doc = provenance::document(&[], &provenance::Payload::new(json!({})));
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
