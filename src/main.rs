//! Scoring CLI: run retrieval metrics over a JSON file of eval cases, one result line per case.

use anyhow::{Context, Result};
use clap::Parser;
use ragmetrics::eval::{report_cases, METRIC_NAMES};
use ragmetrics::{resolve_metrics, EvalCase, MetricsConfig};
use std::path::PathBuf;

/// Score retrieval results per case.
#[derive(Parser, Debug)]
#[command(name = "ragmetrics", version)]
struct Args {
    /// Path to eval cases JSON (array of {query, expected_ids, retrieved_ids}).
    #[arg(long, default_value = "eval_cases.json")]
    cases: PathBuf,

    /// Comma-separated metric names.
    #[arg(long, value_delimiter = ',', default_value = "hit_rate,mrr,ndcg")]
    metrics: Vec<String>,

    /// Config file (default: $RAGMETRICS_CONFIG or ./ragmetrics.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr, results to stdout
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "info")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => MetricsConfig::from_path(path)?,
        None => MetricsConfig::load_or_default()?,
    };
    let metrics = resolve_metrics(args.metrics.as_slice(), &config)
        .with_context(|| format!("Available metrics: {}", METRIC_NAMES.join(", ")))?;

    let cases_json = std::fs::read_to_string(&args.cases)
        .with_context(|| format!("Failed to read {}", args.cases.display()))?;
    let cases: Vec<EvalCase> = serde_json::from_str(&cases_json).context("Invalid cases JSON")?;

    log::info!("Scoring {} cases with {} metrics", cases.len(), metrics.len());

    let mut invalid = 0_usize;
    for (line, valid) in report_cases(&cases, &metrics) {
        if !valid {
            invalid += 1;
            log::warn!("case {}: {}", line["case"], line["error"]);
        }
        println!("{}", line);
    }

    if invalid > 0 {
        log::warn!("{} of {} cases were invalid", invalid, cases.len());
        std::process::exit(1);
    }
    Ok(())
}
