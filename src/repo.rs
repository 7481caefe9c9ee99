//! Repository inspection via git

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Errors from repository inspection
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not a git repository (or git not available): {path}")]
    NotARepository { path: PathBuf },
}

/// Verify that `root` is inside a git work tree.
///
/// A failure to invoke git at all is reported the same way as not being
/// in a repository.
pub async fn ensure_repository(root: &Path) -> Result<(), RepoError> {
    debug!(?root, "ensure_repository: called");

    let output = Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .current_dir(root)
        .output()
        .await
        .map_err(|_| RepoError::NotARepository {
            path: root.to_path_buf(),
        })?;

    if !output.status.success() {
        debug!(?root, "ensure_repository: git rev-parse failed");
        return Err(RepoError::NotARepository {
            path: root.to_path_buf(),
        });
    }

    let inside = String::from_utf8_lossy(&output.stdout).trim() == "true";
    if !inside {
        return Err(RepoError::NotARepository {
            path: root.to_path_buf(),
        });
    }

    debug!(?root, "ensure_repository: inside work tree");
    Ok(())
}

/// Resolve the root of the repository enclosing `start`.
pub async fn discover_root(start: &Path) -> Result<PathBuf, RepoError> {
    debug!(?start, "discover_root: called");

    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(start)
        .output()
        .await
        .map_err(|_| RepoError::NotARepository {
            path: start.to_path_buf(),
        })?;

    if !output.status.success() {
        return Err(RepoError::NotARepository {
            path: start.to_path_buf(),
        });
    }

    let root = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
    debug!(?root, "discover_root: resolved");
    Ok(root)
}
