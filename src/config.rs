//! Configuration types and loading

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

/// Commit pinned as the known-good baseline when none is given
pub const DEFAULT_BASELINE_COMMIT: &str = "d2c185e1f1335047e6ee3fd5046a09399dd4f515";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Baseline revision and naming defaults
    pub baseline: BaselineConfig,

    /// Git worktree layout
    pub git: GitConfig,

    /// Build tool settings
    pub build: BuildConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .baseliner.yml
        let local_config = PathBuf::from(".baseliner.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/baseliner/baseliner.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("baseliner").join("baseliner.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Baseline revision and naming defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineConfig {
    /// Commit to build when `--commit` is not given
    pub commit: String,

    /// Build target in the baseline worktree
    pub target: String,

    /// Output binary name in the repo root
    pub out: String,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            commit: DEFAULT_BASELINE_COMMIT.to_string(),
            target: "dllama".to_string(),
            out: "dllama_0".to_string(),
        }
    }
}

/// Git worktree layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Directory under the repo root where derived worktrees live
    #[serde(rename = "worktree-base")]
    pub worktree_base: PathBuf,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            worktree_base: PathBuf::from(".worktrees"),
        }
    }
}

/// Build tool settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Build tool executable
    pub program: String,

    /// Run `<program> clean` before building
    pub clean: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            program: "make".to_string(),
            clean: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.baseline.commit, DEFAULT_BASELINE_COMMIT);
        assert_eq!(config.baseline.target, "dllama");
        assert_eq!(config.baseline.out, "dllama_0");
        assert_eq!(config.git.worktree_base, PathBuf::from(".worktrees"));
        assert_eq!(config.build.program, "make");
        assert!(config.build.clean);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
baseline:
  commit: abc12345beef
  target: server
  out: server_base

git:
  worktree-base: .baselines

build:
  program: ninja
  clean: false
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.baseline.commit, "abc12345beef");
        assert_eq!(config.baseline.target, "server");
        assert_eq!(config.baseline.out, "server_base");
        assert_eq!(config.git.worktree_base, PathBuf::from(".baselines"));
        assert_eq!(config.build.program, "ninja");
        assert!(!config.build.clean);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
baseline:
  target: server
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // Specified value
        assert_eq!(config.baseline.target, "server");

        // Defaults for unspecified
        assert_eq!(config.baseline.commit, DEFAULT_BASELINE_COMMIT);
        assert_eq!(config.build.program, "make");
        assert!(config.build.clean);
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("baseliner.yml");
        std::fs::write(&path, "baseline:\n  out: custom_out\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.baseline.out, "custom_out");
    }

    #[test]
    fn test_load_explicit_file_missing_fails() {
        let result = Config::load(Some(&PathBuf::from("/no/such/config.yml")));
        assert!(result.is_err());
    }
}
