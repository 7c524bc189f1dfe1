//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::model::DEFAULT_CAPACITY_WATTS;
use crate::quality::Thresholds;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".ups-quality.yaml",
    ".ups-quality.yml",
    "ups-quality.yaml",
    "ups-quality.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/ups-quality/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path.filter(|p| p.exists()) {
        return Some(path.to_path_buf());
    }

    let cwd = std::env::current_dir().ok();
    let git_root = find_git_root();
    let user_dir = dirs::config_dir().map(|d| d.join("ups-quality"));
    let home = dirs::home_dir();

    [cwd, git_root, user_dir, home]
        .into_iter()
        .flatten()
        .find_map(|dir| find_config_in_dir(&dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml_ng::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults are taken from `other`, so a
    /// CLI layer built from `AppConfig::default()` overrides just what the
    /// user passed.
    #[allow(clippy::float_cmp)]
    pub fn merge(&mut self, other: &Self) {
        if other.analysis.capacity_watts != DEFAULT_CAPACITY_WATTS {
            self.analysis.capacity_watts = other.analysis.capacity_watts;
        }
        if other.analysis.detailed {
            self.analysis.detailed = true;
        }
        if other.analysis.thresholds != Thresholds::default() {
            self.analysis.thresholds = other.analysis.thresholds.clone();
        }

        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.compact {
            self.output.compact = true;
        }

        if other.behavior.min_score.is_some() {
            self.behavior.min_score = other.behavior.min_score;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# UPS Power Quality Configuration
# Place this file at .ups-quality.yaml in your project root or ~/.config/ups-quality/

{}",
        serde_yaml_ng::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# UPS Power Quality Configuration File
# =====================================
#
# This file configures ups-quality behavior. Place it at:
#   - .ups-quality.yaml in your project root
#   - ~/.config/ups-quality/ups-quality.yaml for global config
#
# CLI arguments always override file settings.

# Analysis configuration
analysis:
  # Rated capacity (W) for polls that do not carry capacity_watts
  capacity_watts: 1000
  # Attach voltage and load detail to each result
  detailed: false
  # Rule thresholds; comparisons are strict
  thresholds:
    undervoltage: 200
    overvoltage: 250
    high_load: 80
    moderate_load: 60
    low_load: 20
    high_temperature: 35
    frequency_min: 49
    frequency_max: 51
    voltage_difference: 10

# Output configuration
output:
  # Output file path (omit for stdout)
  # file: analysis.json
  # Single-line JSON
  compact: false

# Behavior flags
behavior:
  # Exit with code 1 when any result scores below this
  # min_score: 70
  # Suppress non-essential output
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
