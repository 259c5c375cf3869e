//! Configuration loading for DhruvaPick

use crate::error::{DhruvaPickError, Result};
use serde::Deserialize;
use std::path::Path;
use vastu_pick::PlannerConfig;

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "dhruva-pick.toml";

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PickConfig {
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which tour solver(s) to run for every selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SolverKind {
    /// Exact Held-Karp ("optimal" paths)
    HeldKarp,
    /// Request order ("naive" paths)
    InOrder,
    /// Both, one record each
    Both,
}

/// Item selection settings
#[derive(Clone, Debug, Deserialize)]
pub struct SelectionConfig {
    /// Items picked per path (default: 10)
    #[serde(default = "default_items_per_path")]
    pub items_per_path: usize,

    /// RNG seed; random selection differs per run when unset
    #[serde(default)]
    pub seed: Option<u64>,

    /// Number of selections to plan (default: 1)
    #[serde(default = "default_path_count")]
    pub path_count: usize,

    /// Tour solver (default: held-karp)
    #[serde(default = "default_solver")]
    pub solver: SolverKind,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            items_per_path: default_items_per_path(),
            seed: None,
            path_count: default_path_count(),
            solver: default_solver(),
        }
    }
}

/// Output configuration
#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    /// Path of the pick-path JSON file
    #[serde(default = "default_pick_path_file")]
    pub pick_path_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pick_path_file: default_pick_path_file(),
        }
    }
}

/// Logging configuration
#[derive(Clone, Debug, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "dhruva_pick=debug,vastu_pick=info".
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_items_per_path() -> usize {
    10
}
fn default_path_count() -> usize {
    1
}
fn default_solver() -> SolverKind {
    SolverKind::HeldKarp
}
fn default_pick_path_file() -> String {
    "pick-paths.json".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl PickConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DhruvaPickError::Config(format!("Failed to read config file: {}", e)))?;
        let config: PickConfig = toml::from_str(&content)?;
        config.planner.validate()?;
        Ok(config)
    }

    /// Load `path` if given, else the default file if present, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }
}
