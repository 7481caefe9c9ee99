//! CLI definitions

use clap::Parser;
use std::path::PathBuf;

/// Build a baseline binary from a pinned commit into a separate output name
#[derive(Parser, Debug)]
#[command(
    name = "baseliner",
    about = "Build a baseline binary from a pinned commit into a separate output name",
    version
)]
pub struct Cli {
    /// Git commit to build (defaults to the pinned baseline commit)
    #[arg(long)]
    pub commit: Option<String>,

    /// Build target in the baseline worktree
    #[arg(long)]
    pub target: Option<String>,

    /// Output binary name in the repo root
    #[arg(long)]
    pub out: Option<String>,

    /// Worktree directory (default: <worktree-base>/<out>_<commit8>)
    #[arg(long)]
    pub worktree_dir: Option<PathBuf>,

    /// Skip the clean step in the baseline worktree
    #[arg(long)]
    pub no_clean: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
