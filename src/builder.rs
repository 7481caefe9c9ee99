//! Build invocation inside the baseline worktree

use std::path::Path;
use std::process::ExitStatus;

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

/// Errors from the external build tool
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("`{program} clean` failed with {status}")]
    CleanFailed { program: String, status: ExitStatus },

    #[error("`{program} {target}` failed with {status}")]
    TargetFailed {
        program: String,
        target: String,
        status: ExitStatus,
    },

    #[error("Failed to invoke {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Runs the external build tool in a worktree.
///
/// Console output of the tool passes straight through; only the exit
/// status is inspected.
pub struct Builder {
    program: String,
}

impl Builder {
    /// Create a builder invoking `program` (typically `make`)
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        debug!(%program, "Builder::new: called");
        Self { program }
    }

    /// Build `target` in `dir`, preceded by a clean step unless skipped.
    pub async fn build(&self, dir: &Path, target: &str, clean: bool) -> Result<(), BuildError> {
        debug!(?dir, %target, %clean, "Builder::build: called");

        if clean {
            let status = self.run(dir, "clean").await?;
            if !status.success() {
                return Err(BuildError::CleanFailed {
                    program: self.program.clone(),
                    status,
                });
            }
        }

        let status = self.run(dir, target).await?;
        if !status.success() {
            return Err(BuildError::TargetFailed {
                program: self.program.clone(),
                target: target.to_string(),
                status,
            });
        }

        info!(%target, "build finished");
        Ok(())
    }

    /// Run `<program> <arg>` in `dir` with inherited stdio.
    async fn run(&self, dir: &Path, arg: &str) -> Result<ExitStatus, BuildError> {
        println!("+ {} {}", self.program, arg);

        Command::new(&self.program)
            .arg(arg)
            .current_dir(dir)
            .status()
            .await
            .map_err(|e| BuildError::Spawn {
                program: self.program.clone(),
                source: e,
            })
    }
}
