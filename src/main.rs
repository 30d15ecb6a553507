//! Founder-Scout main entry point
//!
//! This is the command-line interface for the Founder-Scout enricher.

use anyhow::Context;
use clap::Parser;
use founder_scout::config::{load_config_with_hash, Config};
use founder_scout::crawler::{Enricher, ProgressReporter};
use founder_scout::output::{default_output_path, export_csv, print_summary, BatchSummary};
use founder_scout::ScoutError;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::future::Future;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Founder-Scout: a startup directory enricher
///
/// Fetches the public company listing, visits each company's detail page to
/// find its founders and their LinkedIn profiles, and writes one CSV row per
/// founder.
#[derive(Parser, Debug)]
#[command(name = "founder-scout")]
#[command(version)]
#[command(about = "Enrich startup listings with founder names and LinkedIn profiles", long_about = None)]
struct Cli {
    /// Maximum number of companies to enrich
    #[arg(short, long, default_value_t = 500)]
    limit: usize,

    /// Output CSV path (default: <prefix>_YYYYMMDD_HHMMSS.csv)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match interruptible(run(cli), tokio::signal::ctrl_c()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_interrupted(&e) => {
            tracing::info!("Enrichment interrupted by user");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!("Enrichment failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Races `work` against `interrupt`, failing with `ScoutError::Interrupted`
/// when the interrupt resolves first
async fn interruptible<T, W, I>(work: W, interrupt: I) -> anyhow::Result<T>
where
    W: Future<Output = anyhow::Result<T>>,
    I: Future,
{
    tokio::select! {
        result = work => result,
        _ = interrupt => Err(ScoutError::Interrupted.into()),
    }
}

fn is_interrupted(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<ScoutError>(),
        Some(ScoutError::Interrupted)
    )
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("founder_scout=info,warn"),
            1 => EnvFilter::new("founder_scout=debug,info"),
            2 => EnvFilter::new("founder_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the configuration file, or the built-in defaults when none is given
fn load_configuration(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::info!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);
    Ok(config)
}

/// Progress bar over enrichment units
struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    fn new(total: usize, hidden: bool) -> Self {
        let bar = if hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total as u64)
        };

        if let Ok(style) = ProgressStyle::with_template(
            "{msg} [{bar:40.cyan/blue}] {pos}/{len} ({elapsed_precise}, eta {eta})",
        ) {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.set_message("Enriching companies");

        Self { bar }
    }
}

impl ProgressReporter for BarProgress {
    fn unit_done(&self, completed: usize, _total: usize) {
        self.bar.set_position(completed as u64);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// Runs a complete enrichment: listing, detail pages, export, summary
async fn run(cli: Cli) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_configuration(cli.config.as_deref())?;

    tracing::info!("Starting founder enrichment (limit: {})", cli.limit);

    let enricher = Enricher::new(&config).context("failed to build HTTP client")?;

    // Without a listing there is nothing to enrich
    let mut companies = enricher
        .fetch_listing()
        .await
        .context("failed to fetch company listing")?;
    companies.truncate(cli.limit);
    tracing::info!("Selected {} companies for enrichment", companies.len());

    let progress = BarProgress::new(companies.len(), cli.quiet);
    let batch = enricher.enrich_all(companies, &progress).await;

    let output_path = cli
        .output
        .unwrap_or_else(|| default_output_path(&config.output, &chrono::Local::now()));
    export_csv(&batch.companies, &output_path)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    let summary = BatchSummary::from_batch(&batch);
    if !cli.quiet {
        print_summary(&summary, start.elapsed(), &output_path);
    }

    Ok(())
}
