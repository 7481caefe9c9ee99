//! Baseliner - pinned-commit baseline builder
//!
//! Builds a binary artifact from a fixed, historical commit of the
//! enclosing git repository and publishes it under a distinct name in
//! the repo root, so a binary built from the current tree can be
//! compared against a known-good revision without a second clone.
//!
//! The whole tool is one pipeline: ensure a detached worktree of the
//! pinned commit, run the build tool in it, copy the artifact out, mark
//! it executable.
//!
//! # Modules
//!
//! - [`repo`] - Repository inspection via git
//! - [`worktree`] - Detached worktree creation and reuse
//! - [`builder`] - External build tool invocation
//! - [`publish`] - Artifact copy and permission handling
//! - [`pipeline`] - The orchestrating run
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod builder;
pub mod cli;
pub mod config;
pub mod pipeline;
pub mod publish;
pub mod repo;
pub mod worktree;

// Re-export commonly used types
pub use builder::{BuildError, Builder};
pub use config::{BaselineConfig, BuildConfig, Config, DEFAULT_BASELINE_COMMIT, GitConfig};
pub use pipeline::{BaselineRequest, Report};
pub use publish::PublishError;
pub use repo::RepoError;
pub use worktree::{WorktreeError, WorktreeManager};
