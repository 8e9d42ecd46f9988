//! Command-line interface for kb-stress
//!
//! # Usage Examples
//!
//! ## Harness run
//! ```bash
//! # Load 5000 synthetic papers into a JSONL store, then probe and audit it
//! kb-stress run --records 5000 --batch-size 250 \
//!   --store jsonl --store-path /tmp/kb.jsonl \
//!   --seed 42 --no-confirm
//!
//! # Read-side checks only, with a JSON report
//! kb-stress run --test-only --store jsonl --store-path /tmp/kb.jsonl \
//!   --report-json report.json
//!
//! # Everything from a YAML file
//! kb-stress run --config harness.yaml --no-confirm
//! ```
//!
//! ## Standalone generation
//! ```bash
//! kb-stress generate --records 10000 --seed 7 --output papers.jsonl
//! ```
//!
//! ## Exit codes
//! - 0: healthy (score >= 70)
//! - 1: issues detected, unreachable store, declined or cancelled load, failed run
//! - 2: critical (score < 50)

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use stress_core::KnowledgeStore;
use stress_framework::{
    format_generation_stats, format_partial_results, format_table, HarnessConfig, HarnessError,
    HarnessOutcome, HarnessPipeline, StageSelection, StoreConfig,
};
use stress_generator::{GenerationStats, RecordGenerator};
use stress_populate::PopulateArgs;
use stress_store::JsonlStore;
use stress_verify::{ConnectivityCheck, ProbeArgs};
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser)]
#[command(name = "kb-stress")]
#[command(about = "Load generator and health harness for research-paper knowledge bases")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load synthetic papers into a store, probe it and score its health
    Run {
        #[command(flatten)]
        populate: PopulateArgs,

        #[command(flatten)]
        probe: ProbeArgs,

        /// Start loading without asking for confirmation
        #[arg(long)]
        no_confirm: bool,

        /// Store to run against
        #[arg(long, value_enum, default_value = "memory", env = "KB_STRESS_STORE")]
        store: StoreKind,

        /// Path of the JSONL store file (required with --store jsonl)
        #[arg(long, value_name = "PATH", env = "KB_STRESS_STORE_PATH")]
        store_path: Option<PathBuf>,

        /// YAML harness configuration; replaces the sizing and store flags
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Also write the final report as JSON
        #[arg(long, value_name = "PATH")]
        report_json: Option<PathBuf>,
    },

    /// Generate synthetic papers into a JSONL file without running the harness
    Generate {
        /// Number of records to generate
        #[arg(long, short = 'r', default_value = "1000")]
        records: usize,

        /// Random seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Output JSONL file (must not exist)
        #[arg(long, value_name = "PATH")]
        output: PathBuf,

        /// Number of research fields listed in the summary
        #[arg(long, default_value = "10")]
        top_fields: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StoreKind {
    /// Fresh in-memory store, discarded at exit
    #[value(name = "memory")]
    Memory,
    /// JSON-Lines file
    #[value(name = "jsonl")]
    Jsonl,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match run().await {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

async fn run() -> anyhow::Result<i32> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            populate,
            probe,
            no_confirm,
            store,
            store_path,
            config,
            report_json,
        } => {
            let config = match config {
                Some(path) => HarnessConfig::from_file(&path)
                    .with_context(|| format!("Failed to load harness config from {path:?}"))?,
                None => HarnessConfig::new()
                    .with_records(populate.records)
                    .with_batch_size(populate.batch_size)
                    .with_test_queries(probe.test_queries)
                    .with_store(store_config(store, store_path)?),
            };
            let config = apply_overrides(config, &populate, &probe);

            run_harness(config, no_confirm, report_json).await
        }
        Commands::Generate {
            records,
            seed,
            output,
            top_fields,
        } => {
            run_generate(records, seed, output, top_fields)?;
            Ok(0)
        }
    }
}

fn store_config(kind: StoreKind, path: Option<PathBuf>) -> anyhow::Result<StoreConfig> {
    match (kind, path) {
        (StoreKind::Memory, _) => Ok(StoreConfig::Memory),
        (StoreKind::Jsonl, Some(path)) => Ok(StoreConfig::Jsonl { path }),
        (StoreKind::Jsonl, None) => bail!("--store jsonl requires --store-path"),
    }
}

/// Flags that apply on top of a config file as well.
fn apply_overrides(
    mut config: HarnessConfig,
    populate: &PopulateArgs,
    probe: &ProbeArgs,
) -> HarnessConfig {
    if populate.seed.is_some() {
        config.seed = populate.seed;
    }
    if probe.test_only {
        config.stages = StageSelection {
            load: false,
            ..config.stages
        };
    }
    config
}

async fn run_harness(
    config: HarnessConfig,
    no_confirm: bool,
    report_json: Option<PathBuf>,
) -> anyhow::Result<i32> {
    config.validate().context("Invalid harness configuration")?;

    let mut store = config.store.open();

    if config.stages.load && !no_confirm {
        // Only ask once the store is known to answer.
        if let Err(e) = ConnectivityCheck.run(store.as_ref()) {
            eprintln!("Error: {e}");
            return Ok(HarnessOutcome::ConnectivityFailed.exit_code());
        }
        if !confirm_load(&config)? {
            println!("Aborted, nothing was written.");
            return Ok(HarnessOutcome::Cancelled.exit_code());
        }
    }

    let cancel = setup_shutdown_handler();
    let pipeline = HarnessPipeline::new(config);

    let result = tokio::task::spawn_blocking(move || pipeline.run(store.as_mut(), &cancel))
        .await
        .context("Harness task failed")?;

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            if let HarnessError::Cancelled { completed, .. } = &e {
                println!("{}", format_partial_results(completed));
            }
            eprintln!("Error: {e}");
            return Ok(HarnessOutcome::from_error(&e).exit_code());
        }
    };

    println!("{}", format_table(&report));

    if let Some(path) = report_json {
        report
            .write_json(&path)
            .with_context(|| format!("Failed to write report to {path:?}"))?;
        info!("Report written to {:?}", path);
    }

    Ok(HarnessOutcome::Completed(report.status()).exit_code())
}

fn confirm_load(config: &HarnessConfig) -> anyhow::Result<bool> {
    let estimate = PopulateArgs {
        records: config.records,
        batch_size: config.batch_size,
        seed: config.seed,
    };
    println!(
        "About to load {} records in {} batches (estimated {:.0} minutes).",
        config.records,
        estimate.total_batches(),
        estimate.estimated_minutes()
    );
    print!("Continue? [y/N] ");
    io::stdout().flush()?;

    // End of input counts as a decline.
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

/// Sets up a shutdown signal handler
fn setup_shutdown_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();

    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");

        info!("Received interrupt signal (Ctrl+C), stopping after the current batch");
        trigger.cancel();
    });

    token
}

fn run_generate(
    records: usize,
    seed: Option<u64>,
    output: PathBuf,
    top_fields: usize,
) -> anyhow::Result<()> {
    if output.exists() {
        bail!("Output file {output:?} already exists");
    }

    let mut generator = RecordGenerator::new(seed);
    let mut store = JsonlStore::new(&output);
    let mut stats = GenerationStats::default();

    for record in generator.records(records) {
        stats.observe(&record);
        store
            .write(record)
            .with_context(|| format!("Failed to write to {output:?}"))?;
    }

    info!("Wrote {} records to {:?}", stats.total_records, output);
    println!("{}", format_generation_stats(&stats, top_fields));
    println!("Seed: {}", generator.seed());
    Ok(())
}
