//! Artifact publication into the caller's repository root

use std::path::{Path, PathBuf};

use filetime::FileTime;
use thiserror::Error;
use tracing::{debug, info};

/// Errors from artifact publication
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Expected build output not found: {path}")]
    ArtifactNotFound { path: PathBuf },

    #[error("Failed to copy {from} to {to}: {source}")]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Copy the built artifact for `target` out of `worktree_dir` to
/// `out_path` and mark the copy executable.
///
/// The artifact is expected at `<worktree_dir>/<target>`; a missing file
/// there means the build tool's output naming does not match the target
/// and the run fails.
pub fn publish(worktree_dir: &Path, target: &str, out_path: &Path) -> Result<(), PublishError> {
    debug!(?worktree_dir, %target, ?out_path, "publish: called");

    let built = worktree_dir.join(target);
    if !built.exists() {
        return Err(PublishError::ArtifactNotFound { path: built });
    }

    copy_with_times(&built, out_path).map_err(|e| PublishError::CopyFailed {
        from: built.clone(),
        to: out_path.to_path_buf(),
        source: e,
    })?;

    set_executable(out_path);

    info!(from = %built.display(), to = %out_path.display(), "published artifact");
    Ok(())
}

/// Copy `from` to `to`, carrying the modification time over.
fn copy_with_times(from: &Path, to: &Path) -> std::io::Result<()> {
    std::fs::copy(from, to)?;
    let meta = std::fs::metadata(from)?;
    filetime::set_file_mtime(to, FileTime::from_last_modification_time(&meta))?;
    Ok(())
}

/// Add execute bits for owner, group, and other. Best effort: a chmod
/// failure never fails the run.
#[cfg(unix)]
fn set_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Ok(meta) = std::fs::metadata(path) {
        let mut perms = meta.permissions();
        perms.set_mode(perms.mode() | 0o111);
        let _ = std::fs::set_permissions(path, perms);
    }
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) {}
