//! Configuration validation for ups-quality.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AnalysisConfig, AppConfig, BehaviorConfig, OutputConfig};
use crate::quality::Thresholds;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.analysis.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for AnalysisConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !(self.capacity_watts.is_finite() && self.capacity_watts > 0.0) {
            errors.push(ConfigError::new(
                "analysis.capacity_watts",
                format!("Capacity must be positive, got {}", self.capacity_watts),
            ));
        }
        errors.extend(
            self.thresholds
                .validate()
                .into_iter()
                .map(|e| ConfigError::new(format!("analysis.{}", e.field), e.message)),
        );
        errors
    }
}

impl Validatable for Thresholds {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let ordered = [
            ("undervoltage", self.undervoltage, "overvoltage", self.overvoltage),
            ("low_load", self.low_load, "moderate_load", self.moderate_load),
            ("moderate_load", self.moderate_load, "high_load", self.high_load),
            ("frequency_min", self.frequency_min, "frequency_max", self.frequency_max),
        ];
        for (low_name, low, high_name, high) in ordered {
            if low >= high {
                errors.push(ConfigError::new(
                    format!("thresholds.{low_name}"),
                    format!("{low_name} ({low}) must be below {high_name} ({high})"),
                ));
            }
        }

        for (name, value) in [
            ("low_load", self.low_load),
            ("moderate_load", self.moderate_load),
            ("high_load", self.high_load),
        ] {
            if !(0.0..=100.0).contains(&value) {
                errors.push(ConfigError::new(
                    format!("thresholds.{name}"),
                    format!("Load threshold must be between 0 and 100, got {value}"),
                ));
            }
        }

        if self.voltage_difference < 0.0 {
            errors.push(ConfigError::new(
                "thresholds.voltage_difference",
                format!(
                    "Voltage difference must not be negative, got {}",
                    self.voltage_difference
                ),
            ));
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(parent) = self.file.as_deref().and_then(std::path::Path::parent) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }
        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(score) = self.min_score {
            if !(0.0..=100.0).contains(&score) {
                errors.push(ConfigError::new(
                    "behavior.min_score",
                    format!("Minimum score must be between 0 and 100, got {score}"),
                ));
            }
        }
        errors
    }
}

// ============================================================================
// Tests
// ============================================================================
