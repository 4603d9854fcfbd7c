//! Harness configuration: defaults plus an optional JSON config file
//! discovered from the working directory.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up when discovering configuration.
pub const CONFIG_FILE_NAME: &str = ".suite-runner.json";

/// Fixed, well-known default location for engine-native output.
pub const DEFAULT_OUTPUT_DIR: &str = "/tmp/test-results/test-results";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Human-readable name of the single execution plan.
    pub suite_name: String,
    /// Name of the plan's single test group. Also used as the group's
    /// inclusion filter.
    pub group_name: String,
    /// Namespace prefix test units are collected under.
    pub namespace: String,
    /// Directory the engine writes its results document into.
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suite_name: "Full Integration Test".to_string(),
            group_name: "all-tests".to_string(),
            namespace: "itest::tests".to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Config {
    /// Look for a config file in `dir` or any of its ancestors.
    pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
        dir.ancestors()
            .map(|p| p.join(CONFIG_FILE_NAME))
            .find(|p| p.exists())
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Configuration discovered from `dir` or its ancestors, falling
    /// back to defaults when no config file exists.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        match Self::find_config_file(dir) {
            Some(config_path) => Self::load_from_file(&config_path),
            None => Ok(Self::default()),
        }
    }

    /// Configuration discovered from the current directory. An
    /// unreadable working directory is a harness fault and propagates;
    /// it does not silently become a default run.
    pub fn load() -> Result<Self> {
        Self::load_from_dir(&std::env::current_dir()?)
    }
}
