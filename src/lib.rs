//! **Power-quality analysis for UPS units monitored over SNMP.**
//!
//! `ups-quality` turns one poll of a UPS (a loose mapping of metric names to
//! raw SNMP responses such as `PowerNet-MIB::upsAdvInputLineVoltage.0 =
//! INTEGER: 228`) into a structured assessment: detected issues, alert tags,
//! a decoded operating state, a 0-100 quality score, and recommendations.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the [`SnmpValue`] scalar, metric sets and the
//!   [`MonitoringData`] input record, plus UPS state decoding.
//! - **[`parsers`]**: normalization of raw SNMP response text.
//! - **[`quality`]**: threshold rules, scoring, grading and recommendations.
//! - **[`pipeline`]**: the [`PowerQualityAnalyzer`] that runs a poll end to
//!   end and produces an [`AnalysisResult`].
//! - **[`config`]**: YAML configuration discovery, validation and merging.
//!
//! ## Getting Started
//!
//! ```
//! use serde_json::json;
//! use ups_quality::PowerQualityAnalyzer;
//!
//! let result = PowerQualityAnalyzer::new().analyze_value(&json!({
//!     "ups_host": "ups-01",
//!     "capacity_watts": 1500,
//!     "snmp_data": {
//!         "input_voltage": "PowerNet-MIB::upsAdvInputLineVoltage.0 = INTEGER: 180",
//!         "ups_basic_state": "PowerNet-MIB::upsBasicOutputStatus.0 = INTEGER: 3",
//!         "output_load": "PowerNet-MIB::upsAdvOutputLoad.0 = INTEGER: 45"
//!     }
//! }));
//!
//! assert_eq!(result.alerts, ["LOW_VOLTAGE", "ON_BATTERY"]);
//! assert_eq!(result.quality_score, 65.0);
//! assert_eq!(result.ups_state_description, "On Battery");
//! ```
//!
//! Malformed input never panics or errors: it yields a degraded result with
//! an `ANALYSIS_FAILED` alert and the error message.
//!
//! ## Command-Line Interface (CLI)
//!
//! The `ups-quality` binary wraps the library; see `ups-quality --help`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Readings are bounded; state codes are truncated on purpose
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod quality;

// Re-export main types for convenience
pub use config::{AnalysisConfig, AppConfig, AppConfigBuilder, BehaviorConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use error::{InputErrorKind, Result, UpsQualityError};
pub use model::{
    MetricKey, MonitoringData, NormalizedMetricSet, RawMetricSet, SnmpValue, UpsState,
    decode_state,
};
pub use parsers::{extract_numeric, normalize};
pub use pipeline::{AnalysisResult, Clock, FixedClock, PowerQualityAnalyzer, SystemClock};
pub use quality::{
    Alert, Issue, IssueCategory, QualityEvaluator, QualityGrade, Thresholds, recommend, score,
};
