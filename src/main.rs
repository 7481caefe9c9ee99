//! Baseliner - pinned-commit baseline builder
//!
//! CLI entry point.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use baseliner::cli::Cli;
use baseliner::config::Config;
use baseliner::pipeline::{self, BaselineRequest};

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("baseliner")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Setup tracing subscriber - write to log file, not stdout/stderr
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("baseliner.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

/// Merge CLI overrides onto config defaults.
fn resolve_request(cli: &Cli, config: &Config) -> BaselineRequest {
    BaselineRequest {
        commit: cli.commit.clone().unwrap_or_else(|| config.baseline.commit.clone()),
        target: cli.target.clone().unwrap_or_else(|| config.baseline.target.clone()),
        out: cli.out.clone().unwrap_or_else(|| config.baseline.out.clone()),
        worktree_dir: cli.worktree_dir.clone(),
        worktree_base: config.git.worktree_base.clone(),
        clean: !cli.no_clean && config.build.clean,
        build_program: config.build.program.clone(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let request = resolve_request(&cli, &config);

    info!(
        commit = %request.commit,
        target = %request.target,
        out = %request.out,
        "baseliner starting"
    );

    let start = std::env::current_dir().context("Failed to get current directory")?;

    tokio::select! {
        result = pipeline::run(&start, &request) => {
            let report = result?;
            println!("Built {} from {}", report.out_path.display(), report.commit);
            Ok(())
        }
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Interrupted");
            std::process::exit(130);
        }
    }
}
