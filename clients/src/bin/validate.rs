//! `dcat-validate` — Validates a DCAT-AP-CZ catalog and prints the report.
//!
//! The catalog URL may point to a SPARQL endpoint, a Turtle document or a
//! JSON-LD document; content negotiation decides which.
//!
//! **Usage:**
//! ```text
//! dcat-validate [--config <toml>] [--concurrency <n>] [--timeout-ms <n>] [--keep-issues] [--compact] <URL>
//! ```
//!
//! The report is written to stdout as JSON and logs go to stderr
//! (`RUST_LOG`, default `info`). Exits non-zero when the report level is
//! `error` or `critical`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::Write;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use dcat_validator::{CatalogValidator, Level, TracingProgress, ValidatorConfig};
use tracing_subscriber::EnvFilter;

/// Validate a DCAT-AP-CZ open data catalog.
#[derive(Parser)]
#[command(
    name = "dcat-validate",
    about = "Validate a DCAT-AP-CZ catalog and print a severity-ranked report"
)]
struct Args {
    /// Catalog URL: SPARQL endpoint, Turtle or JSON-LD document.
    url: String,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Datasets validated at the same time (overrides the configuration).
    #[arg(long)]
    concurrency: Option<usize>,

    /// Whole-request timeout in milliseconds (overrides the configuration).
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Keep issue lists in the output instead of levels and counts only.
    #[arg(long)]
    keep_issues: bool,

    /// Print the JSON on one line.
    #[arg(long)]
    compact: bool,
}

fn load_config(args: &Args) -> Result<ValidatorConfig> {
    let mut config = match &args.config {
        Some(path) => ValidatorConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ValidatorConfig::default(),
    };
    if let Some(concurrency) = args.concurrency {
        config.dataset_concurrency = concurrency;
    }
    if let Some(timeout) = args.timeout_ms {
        config.request_timeout_ms = timeout;
    }
    config.validate().context("Invalid command-line options")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&args)?;
    let validator = CatalogValidator::from_config(config).context("Failed to set up the validator")?;
    let mut report = validator.validate_catalog(&args.url, &TracingProgress).await;

    let level = report.level;
    if !args.keep_issues {
        report.strip_issues();
    }
    let json = if args.compact {
        serde_json::to_string(&report)
    } else {
        serde_json::to_string_pretty(&report)
    }
    .context("Failed to serialize the report")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("Failed to write the report")?;
    stdout.flush().context("Failed to write the report")?;

    if level >= Level::Error {
        tracing::info!(level = level.as_str(), "catalog did not pass");
        process::exit(1);
    }
    Ok(())
}
