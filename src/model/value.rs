//! Scalar values carried by SNMP metric sets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single SNMP metric value, raw or normalized.
///
/// Serialized untagged so that JSON numbers and strings map directly onto
/// the variants: `228` is `Integer`, `50.1` is `Float`, `"..."` is `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnmpValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl SnmpValue {
    /// Build a text value
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Whether the value is already numeric
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Numeric value as `f64`, without inspecting text
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    /// Borrow the text, if this is a text value
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for SnmpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => f.write_str(&format_reading(*v)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for SnmpValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for SnmpValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for SnmpValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SnmpValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Render a measured reading, always keeping a fractional part (`180.0`).
#[must_use]
pub fn format_reading(value: f64) -> String {
    format!("{value:?}")
}

/// Render a rated quantity, dropping the fraction when it is integral (`1000`).
#[must_use]
pub fn format_quantity(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
