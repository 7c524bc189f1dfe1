//! Power-quality limits applied by the evaluator.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Limits for each power-quality rule.
///
/// All comparisons are strict: a reading equal to a limit does not trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Thresholds {
    /// Input voltage below this is undervoltage (V)
    pub undervoltage: f64,
    /// Input voltage above this is overvoltage (V)
    pub overvoltage: f64,
    /// Output load above this is high (%)
    pub high_load: f64,
    /// Output load above this is moderate (%)
    pub moderate_load: f64,
    /// Output load below this suggests an oversized unit (%)
    pub low_load: f64,
    /// Battery temperature above this is high (°C)
    pub high_temperature: f64,
    /// Lowest acceptable input frequency (Hz)
    pub frequency_min: f64,
    /// Highest acceptable input frequency (Hz)
    pub frequency_max: f64,
    /// Largest acceptable input/output voltage difference (V)
    pub voltage_difference: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            undervoltage: 200.0,
            overvoltage: 250.0,
            high_load: 80.0,
            moderate_load: 60.0,
            low_load: 20.0,
            high_temperature: 35.0,
            frequency_min: 49.0,
            frequency_max: 51.0,
            voltage_difference: 10.0,
        }
    }
}

impl Thresholds {
    /// Whether a frequency lies outside the acceptable band
    #[must_use]
    pub fn frequency_out_of_band(&self, hz: f64) -> bool {
        hz < self.frequency_min || hz > self.frequency_max
    }
}
