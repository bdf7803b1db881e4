use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "mazegraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Benchmark both graph backends and compare them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

/// Backends in report column order; the first is the comparison baseline.
const BACKENDS: &[&str] = &["adj_list", "adj_mat"];

const BENCH_TARGET: &str = "graph_benchmark";

/// The subset of criterion's `benchmark.json` the report needs.
#[derive(Deserialize)]
struct BenchmarkId {
    group_id: String,
    function_id: Option<String>,
    value_str: Option<String>,
    throughput: Option<Throughput>,
}

#[derive(Deserialize)]
struct Throughput {
    #[serde(rename = "Elements")]
    elements: Option<f64>,
}

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// workload -> backend -> ops/s
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running {BENCH_TARGET}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.arg("bench").arg("--bench").arg(BENCH_TARGET);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to run bench {BENCH_TARGET}"))?;
    if !status.success() {
        anyhow::bail!("Benchmark {BENCH_TARGET} failed");
    }
    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(report_path, render_report(&results))
        .with_context(|| format!("Failed to write {}", report_path.display()))?;

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn render_report(results: &Results) -> String {
    use std::fmt::Write;

    let mut out = String::from("# Graph Backend Benchmark Report\n\n");
    out.push_str("| Workload |");
    for backend in BACKENDS {
        let _ = write!(out, " {backend} (cells/s) | vs {} |", BACKENDS[0]);
    }
    out.push_str("\n|---|");
    for _ in BACKENDS {
        out.push_str("---|---|");
    }
    out.push('\n');

    for (workload, by_backend) in results {
        let _ = write!(out, "| {workload} |");
        let baseline = by_backend.get(BACKENDS[0]).copied().unwrap_or(0.0);
        for backend in BACKENDS {
            match by_backend.get(*backend) {
                Some(&ops) => {
                    let rel = if baseline > 0.0 { ops / baseline } else { 0.0 };
                    let _ = write!(out, " {} | **{rel:.2}x** |", format_ops(ops));
                }
                None => out.push_str(" N/A | - |"),
            }
        }
        out.push('\n');
    }
    out
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks criterion's output tree and records the latest run of every
/// benchmark. Layout: `<group>/<function>/<value>/new/{benchmark,estimates}.json`.
fn collect_results(dir: &Path, results: &mut Results) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("new") {
            collect_results(&path, results)?;
            continue;
        }

        let bench_json = path.join("benchmark.json");
        let estimates_json = path.join("estimates.json");
        let (Ok(bench), Ok(estimates)) = (
            fs::read_to_string(&bench_json),
            fs::read_to_string(&estimates_json),
        ) else {
            continue;
        };

        let id: BenchmarkId = serde_json::from_str(&bench)
            .with_context(|| format!("Malformed {}", bench_json.display()))?;
        let estimates: Estimates = serde_json::from_str(&estimates)
            .with_context(|| format!("Malformed {}", estimates_json.display()))?;

        let time_ns = estimates.mean.point_estimate;
        if time_ns <= 0.0 {
            continue;
        }
        let elements = id.throughput.and_then(|t| t.elements).unwrap_or(1.0);
        let workload = match id.value_str {
            Some(value) => format!("{}/{value}", id.group_id),
            None => id.group_id,
        };
        let backend = id.function_id.unwrap_or_default();

        results
            .entry(workload)
            .or_default()
            .insert(backend, elements * 1e9 / time_ns);
    }
    Ok(())
}
