//! Configuration types for ups-quality.

use crate::model::DEFAULT_CAPACITY_WATTS;
use crate::quality::Thresholds;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// File settings are loaded first; CLI arguments are layered on top with
/// [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Analysis settings (capacity, thresholds, detail)
    pub analysis: AnalysisConfig,
    /// Output configuration (file, formatting)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the rated capacity used when a poll omits one.
    pub fn capacity_watts(mut self, watts: f64) -> Self {
        self.config.analysis.capacity_watts = watts;
        self
    }

    /// Attach voltage and load detail to every result.
    pub fn detailed(mut self, enabled: bool) -> Self {
        self.config.analysis.detailed = enabled;
        self
    }

    /// Replace the rule thresholds.
    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.config.analysis.thresholds = thresholds;
        self
    }

    /// Set the output file path.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Emit single-line JSON.
    pub fn compact(mut self, enabled: bool) -> Self {
        self.config.output.compact = enabled;
        self
    }

    /// Fail when any result scores below this.
    pub fn min_score(mut self, score: f64) -> Self {
        self.config.behavior.min_score = Some(score);
        self
    }

    /// Suppress non-essential output.
    pub fn quiet(mut self, enabled: bool) -> Self {
        self.config.behavior.quiet = enabled;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section Configurations
// ============================================================================

/// How polls are evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Rated capacity in watts for polls that do not state one
    pub capacity_watts: f64,
    /// Include voltage and load detail in each result
    pub detailed: bool,
    /// Rule thresholds
    pub thresholds: Thresholds,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            capacity_watts: DEFAULT_CAPACITY_WATTS,
            detailed: false,
            thresholds: Thresholds::default(),
        }
    }
}

/// Where and how results are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Single-line JSON instead of pretty-printed
    pub compact: bool,
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 when a result scores below this (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    /// Suppress non-essential output
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.analysis.capacity_watts, 1000.0);
        assert!(!config.analysis.detailed);
        assert_eq!(config.analysis.thresholds.undervoltage, 200.0);
        assert_eq!(config.output.file, None);
        assert_eq!(config.behavior.min_score, None);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .capacity_watts(1500.0)
            .detailed(true)
            .compact(true)
            .min_score(70.0)
            .build();
        assert_eq!(config.analysis.capacity_watts, 1500.0);
        assert!(config.analysis.detailed);
        assert!(config.output.compact);
        assert_eq!(config.behavior.min_score, Some(70.0));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: AppConfig =
            serde_yaml_ng::from_str("analysis:\n  thresholds:\n    high_load: 90\n").unwrap();
        assert_eq!(config.analysis.thresholds.high_load, 90.0);
        assert_eq!(config.analysis.thresholds.moderate_load, 60.0);
        assert_eq!(config.analysis.capacity_watts, 1000.0);
    }
}
