//! Baseline build pipeline
//!
//! Wires the stages in strict sequence: repository inspection, worktree
//! setup, build, publication. The first failing stage aborts the run;
//! nothing is retried and partially created state (a registered but
//! unbuilt worktree) is left behind for reuse on the next attempt.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use tracing::{debug, info};

use crate::builder::Builder;
use crate::publish;
use crate::repo;
use crate::worktree::WorktreeManager;

/// A fully resolved baseline build request
#[derive(Debug, Clone)]
pub struct BaselineRequest {
    /// Commit to build
    pub commit: String,

    /// Build target to run in the worktree
    pub target: String,

    /// Output binary name in the repo root
    pub out: String,

    /// Explicit worktree directory, overriding the derived path
    pub worktree_dir: Option<PathBuf>,

    /// Directory under the repo root holding derived worktrees
    pub worktree_base: PathBuf,

    /// Run the clean step before building
    pub clean: bool,

    /// Build tool executable
    pub build_program: String,
}

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct Report {
    /// Path of the published binary
    pub out_path: PathBuf,

    /// Commit it was built from
    pub commit: String,
}

/// Derive the worktree directory for an (output name, commit) pair.
fn derive_worktree_dir(root: &Path, base: &Path, out: &str, commit: &str) -> PathBuf {
    let commit8: String = commit.chars().take(8).collect();
    root.join(base).join(format!("{}_{}", out, commit8))
}

/// Run the full pipeline from `start` (any directory inside the target
/// repository). Returns the published output path and source commit.
pub async fn run(start: &Path, request: &BaselineRequest) -> Result<Report> {
    debug!(?start, ?request, "pipeline::run: called");

    repo::ensure_repository(start).await?;
    let root = repo::discover_root(start).await?;

    let worktree_dir = match &request.worktree_dir {
        Some(dir) => std::path::absolute(dir)
            .wrap_err_with(|| format!("Failed to resolve worktree dir {}", dir.display()))?,
        None => derive_worktree_dir(&root, &request.worktree_base, &request.out, &request.commit),
    };
    debug!(?worktree_dir, "pipeline::run: resolved worktree directory");

    let manager = WorktreeManager::new(&root);
    manager.ensure(&worktree_dir, &request.commit).await?;

    let builder = Builder::new(request.build_program.clone());
    builder
        .build(&worktree_dir, &request.target, request.clean)
        .await?;

    let out_path = root.join(&request.out);
    publish::publish(&worktree_dir, &request.target, &out_path)?;

    info!(commit = %request.commit, out = %out_path.display(), "baseline build complete");

    Ok(Report {
        out_path,
        commit: request.commit.clone(),
    })
}
