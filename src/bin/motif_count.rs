use anyhow::{bail, Context, Result};
use clap::Parser;
use halo_motif::{CountConfig, CountReport, CsrGraph, OverflowPolicy, RootList, Scheduler};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "motif_count")]
#[command(about = "Per-vertex clique pattern counts over an undirected edge list", long_about = None)]
struct Cli {
    /// Edge list: one `u v` pair per line, `#` or `%` starts a comment line
    edges: PathBuf,

    /// JSON file with a `CountConfig`; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Worker pool size
    #[arg(long)]
    workers: Option<usize>,

    /// Degree at or above which roots are counted cooperatively
    #[arg(long)]
    threshold: Option<usize>,

    /// Scratch buffer capacity per worker
    #[arg(long)]
    capacity: Option<usize>,

    /// Fail instead of truncating when a scratch buffer overflows
    #[arg(long, default_value_t = false)]
    fail_on_overflow: bool,

    /// Record per-root elapsed time
    #[arg(long, default_value_t = false)]
    instrument: bool,

    /// Print every root's count instead of the summary
    #[arg(long, default_value_t = false)]
    per_root: bool,
}

#[derive(Serialize)]
struct Summary {
    vertices: usize,
    roots: usize,
    total: u64,
    cooperative_roots: usize,
    edges_processed: u64,
    millis: u128,
}

#[derive(Serialize)]
struct PerRoot<'a> {
    roots: &'a [u32],
    #[serde(flatten)]
    report: &'a CountReport,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CountConfig::from_json_file(path)?,
        None => CountConfig::default(),
    };
    if let Some(workers) = cli.workers {
        config.workers = workers;
    }
    if let Some(threshold) = cli.threshold {
        config.degree_threshold = threshold;
    }
    if let Some(capacity) = cli.capacity {
        config.scratch_capacity = capacity;
    }
    if cli.fail_on_overflow {
        config.overflow = OverflowPolicy::Fail;
    }
    config.instrument |= cli.instrument;

    let graph = load_edge_list(&cli.edges)?;
    let roots = RootList::by_degree(&graph);

    let start = Instant::now();
    let report = Scheduler::new(config).run(&graph, &roots)?;
    let millis = start.elapsed().as_millis();

    let out = if cli.per_root {
        serde_json::to_string_pretty(&PerRoot {
            roots: roots.as_slice(),
            report: &report,
        })?
    } else {
        serde_json::to_string_pretty(&Summary {
            vertices: graph.vertex_count(),
            roots: roots.len(),
            total: report.total(),
            cooperative_roots: report.cooperative_roots,
            edges_processed: report.edges_processed,
            millis,
        })?
    };
    println!("{out}");

    Ok(())
}

fn load_edge_list(path: &Path) -> Result<CsrGraph> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read edge list {}", path.display()))?;

    let mut edges = Vec::new();
    let mut max_id = None;
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('%') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(u), Some(v)) = (fields.next(), fields.next()) else {
            bail!("{}:{}: expected `u v`", path.display(), line_no + 1);
        };
        let u: u32 = u
            .parse()
            .with_context(|| format!("{}:{}: bad vertex id {u:?}", path.display(), line_no + 1))?;
        let v: u32 = v
            .parse()
            .with_context(|| format!("{}:{}: bad vertex id {v:?}", path.display(), line_no + 1))?;
        max_id = max_id.max(Some(u.max(v)));
        edges.push((u, v));
    }

    let vertices = max_id.map_or(0, |m| m as usize + 1);
    CsrGraph::from_edges(vertices, &edges).context("Failed to build graph")
}
