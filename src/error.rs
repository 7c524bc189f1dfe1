//! Unified error types for ups-quality.
//!
//! Evaluation itself never fails: these errors describe input that could not
//! be turned into [`MonitoringData`](crate::model::MonitoringData). The
//! analyzer folds them into a degraded result; file and configuration
//! problems around it are reported by the CLI layer.

use thiserror::Error;

/// Main error type for ups-quality operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum UpsQualityError {
    /// Input document could not be decoded
    #[error("Invalid input: {context}")]
    Input {
        context: String,
        #[source]
        source: InputErrorKind,
    },
}

/// Specific input error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InputErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid value for '{field}': {message}")]
    InvalidShape { field: String, message: String },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for ups-quality operations
pub type Result<T> = std::result::Result<T, UpsQualityError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl UpsQualityError {
    /// Create an input error with context
    pub fn input(context: impl Into<String>, source: InputErrorKind) -> Self {
        Self::Input {
            context: context.into(),
            source,
        }
    }

    /// Message including the underlying cause, suitable for a single line
    #[must_use]
    pub fn detailed_message(&self) -> String {
        match self {
            Self::Input { context, source } => format!("{context}: {source}"),
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<serde_json::Error> for UpsQualityError {
    fn from(err: serde_json::Error) -> Self {
        Self::input(
            "JSON deserialization",
            InputErrorKind::InvalidJson(err.to_string()),
        )
    }
}
