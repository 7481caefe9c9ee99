//! Worktree manager for materializing detached checkouts of pinned commits

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

/// Error types for worktree operations
#[derive(Debug, Error)]
pub enum WorktreeError {
    #[error("Failed to create worktree: {0}")]
    CreateFailed(String),

    #[error("Git command failed: {0}")]
    GitError(String),
}

/// Manager for git worktrees of a single repository
pub struct WorktreeManager {
    repo_root: PathBuf,
}

impl WorktreeManager {
    /// Create a manager for the repository at `repo_root`
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        let repo_root = repo_root.into();
        debug!(?repo_root, "WorktreeManager::new: called");
        Self { repo_root }
    }

    /// List the registered worktree paths of the repository.
    ///
    /// Parsed from the `worktree <path>` records of
    /// `git worktree list --porcelain`. The main checkout appears first.
    pub async fn list(&self) -> Result<Vec<PathBuf>, WorktreeError> {
        debug!("WorktreeManager::list: called");

        let output = Command::new("git")
            .args(["worktree", "list", "--porcelain"])
            .current_dir(&self.repo_root)
            .output()
            .await
            .map_err(|e| WorktreeError::GitError(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(WorktreeError::GitError(stderr.to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let paths: Vec<PathBuf> = stdout
            .lines()
            .filter_map(|line| line.strip_prefix("worktree "))
            .map(PathBuf::from)
            .collect();

        debug!(count = paths.len(), "WorktreeManager::list: returning paths");
        Ok(paths)
    }

    /// Check whether `dir` is already a registered worktree.
    pub async fn exists(&self, dir: &Path) -> Result<bool, WorktreeError> {
        debug!(?dir, "WorktreeManager::exists: called");
        let exists = self.list().await?.iter().any(|p| p == dir);
        debug!(%exists, "WorktreeManager::exists: result");
        Ok(exists)
    }

    /// Ensure a detached worktree of `commit` exists at `dir`.
    ///
    /// Reuse is by path, not by commit: a worktree already registered at
    /// `dir` is taken as-is, even if it was created from a different
    /// commit than the one requested now.
    pub async fn ensure(&self, dir: &Path, commit: &str) -> Result<(), WorktreeError> {
        debug!(?dir, %commit, "WorktreeManager::ensure: called");

        if let Some(parent) = dir.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                WorktreeError::CreateFailed(format!(
                    "Failed to create parent directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        if self.exists(dir).await? {
            debug!(?dir, "WorktreeManager::ensure: worktree already registered, reusing");
            return Ok(());
        }

        let dir_str = dir.display().to_string();
        println!("+ git worktree add --detach {} {}", dir_str, commit);

        let status = Command::new("git")
            .args(["worktree", "add", "--detach", &dir_str, commit])
            .current_dir(&self.repo_root)
            .status()
            .await
            .map_err(|e| WorktreeError::GitError(e.to_string()))?;

        if !status.success() {
            return Err(WorktreeError::CreateFailed(format!(
                "git worktree add exited with {} for {}",
                status, dir_str
            )));
        }

        info!(dir = %dir_str, %commit, "created detached worktree");
        Ok(())
    }
}
