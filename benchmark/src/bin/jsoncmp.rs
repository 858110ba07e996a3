// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! CLI tool to compare JSON libraries and print a ranked text report.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use jsoncmp_benchmark::alloc::CountingAllocator;
use jsoncmp_benchmark::fixtures::prepare_input;
use jsoncmp_benchmark::{
    adapters, BenchmarkHarness, Ranker, SuiteDriver, SystemInfo, TextReporter,
};
use jsoncmp_core::{BenchConfig, BenchError, ConfigLoader, Suite};
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

#[derive(Parser)]
#[command(name = "jsoncmp")]
#[command(author, version, about = "Compare Rust JSON libraries on the same workload")]
struct Args {
    /// JSON sample to benchmark with
    file: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Suites to run, by operation name (all if not specified)
    #[arg(short, long = "suite")]
    suites: Vec<String>,

    /// Minimum duration of a measured round, in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    min_time_ms: Option<u64>,

    /// Run in quick mode (100ms rounds)
    #[arg(long)]
    quick: bool,

    /// Directory for generated log files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = load_config(&args)?;
    let suites = select_suites(&config, &args.suites)?;

    let input = prepare_input(&config, &suites)?;
    let registry = adapters::registry()?;
    let harness = BenchmarkHarness::from_config(&config.runner);
    let driver = SuiteDriver::new(&registry, &input, &harness);
    let ranker = Ranker::new(config.report.bar_unit);

    tracing::info!(
        sample = %input.sample_path().display(),
        bytes = input.sample_len(),
        adapters = registry.len(),
        suites = suites.len(),
        "Starting benchmarks"
    );

    let mut reporter = TextReporter::new(io::stdout().lock());
    let mut failed = false;
    for suite in &suites {
        let run = driver.run(suite);
        failed |= run.has_failures();
        let chart = ranker.rank(&run);
        reporter.write_suite(&run, &chart)?;
    }

    if let Some(first) = suites.first() {
        reporter.write_legend(first.reference.as_str())?;
    }
    if let Some(info) = SystemInfo::collect() {
        reporter.write_system_info(&info)?;
    }
    reporter.finish()?.flush()?;

    if failed {
        tracing::warn!("At least one benchmark failed");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Defaults, then the YAML file, then command line flags.
fn load_config(args: &Args) -> anyhow::Result<BenchConfig> {
    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_file(path)?,
        None => BenchConfig::default(),
    };

    if let Some(file) = &args.file {
        config.sample = file.clone();
    }
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(ms) = args.min_time_ms {
        config.runner.min_time = Duration::from_millis(ms);
    }
    if args.quick {
        config.runner.min_time = Duration::from_millis(100);
    }

    Ok(config)
}

/// Configured suites, narrowed to `names` when any are given.
fn select_suites(config: &BenchConfig, names: &[String]) -> Result<Vec<Suite>, BenchError> {
    if names.is_empty() {
        return Ok(config.suites.clone());
    }

    names
        .iter()
        .map(|name| {
            config
                .suite(name)
                .cloned()
                .ok_or_else(|| BenchError::UnknownSuite { name: name.clone() })
        })
        .collect()
}
