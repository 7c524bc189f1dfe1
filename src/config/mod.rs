//! Configuration for ups-quality.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```
//! use ups_quality::config::{AppConfig, Validatable};
//!
//! let config = AppConfig::builder()
//!     .capacity_watts(1500.0)
//!     .detailed(true)
//!     .min_score(70.0)
//!     .build();
//! assert!(config.is_valid());
//! ```
//!
//! # Configuration File
//!
//! Place a `.ups-quality.yaml` file in your project root or `~/.config/ups-quality/`:
//!
//! ```yaml
//! analysis:
//!   capacity_watts: 1500
//!   thresholds:
//!     high_load: 85
//! behavior:
//!   min_score: 70
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{AnalysisConfig, AppConfig, AppConfigBuilder, BehaviorConfig, OutputConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    CONFIG_FILE_NAMES, ConfigFileError, discover_config_file, generate_example_config,
    generate_full_example_config, load_config_file, load_or_default,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.ups-quality.yaml` config files. It can be used by editors for
/// validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
