//! UPS basic operational state (`upsBasicStateOutputState` style codes).

use super::value::SnmpValue;
use crate::parsers::extract_numeric;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Description used when no state code could be read at all.
pub const STATE_UNKNOWN: &str = "State Unknown";

/// Operational state reported by the UPS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpsState {
    Unknown,
    NormalOperation,
    OnBattery,
    SmartBoost,
    TimedSleeping,
    SoftwareBypass,
    Off,
    Rebooting,
    SwitchedBypass,
    HardwareFailureBypass,
    SleepingUntilPowerRestored,
    SmartTrim,
}

impl UpsState {
    /// Map a numeric state code; codes outside 1-12 are not part of the table.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            1 => Self::Unknown,
            2 => Self::NormalOperation,
            3 => Self::OnBattery,
            4 => Self::SmartBoost,
            5 => Self::TimedSleeping,
            6 => Self::SoftwareBypass,
            7 => Self::Off,
            8 => Self::Rebooting,
            9 => Self::SwitchedBypass,
            10 => Self::HardwareFailureBypass,
            11 => Self::SleepingUntilPowerRestored,
            12 => Self::SmartTrim,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::Unknown => 1,
            Self::NormalOperation => 2,
            Self::OnBattery => 3,
            Self::SmartBoost => 4,
            Self::TimedSleeping => 5,
            Self::SoftwareBypass => 6,
            Self::Off => 7,
            Self::Rebooting => 8,
            Self::SwitchedBypass => 9,
            Self::HardwareFailureBypass => 10,
            Self::SleepingUntilPowerRestored => 11,
            Self::SmartTrim => 12,
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::NormalOperation => "Normal Operation",
            Self::OnBattery => "On Battery",
            Self::SmartBoost => "Smart Boost (Low Voltage Compensation)",
            Self::TimedSleeping => "Timed Sleeping",
            Self::SoftwareBypass => "Software Bypass",
            Self::Off => "Off",
            Self::Rebooting => "Rebooting",
            Self::SwitchedBypass => "Switched Bypass",
            Self::HardwareFailureBypass => "Hardware Failure Bypass",
            Self::SleepingUntilPowerRestored => "Sleeping Until Power Restored",
            Self::SmartTrim => "Smart Trim (High Voltage Compensation)",
        }
    }

    /// Whether the UPS is boosting or trimming the input voltage
    #[must_use]
    pub const fn is_compensating(&self) -> bool {
        matches!(self, Self::SmartBoost | Self::SmartTrim)
    }
}

impl fmt::Display for UpsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Read a state code out of a metric value, truncating toward zero.
#[must_use]
pub fn state_code(value: Option<&SnmpValue>) -> Option<i64> {
    // `as` saturates on overflow and maps NaN to 0
    extract_numeric(value).map(|n| n.trunc() as i64)
}

/// Human-readable description of a state metric.
#[must_use]
pub fn decode_state(value: Option<&SnmpValue>) -> String {
    match state_code(value) {
        Some(code) => UpsState::from_code(code).map_or_else(
            || format!("Unknown State ({code})"),
            |state| state.description().to_string(),
        ),
        None => STATE_UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_codes() {
        assert_eq!(
            decode_state(Some(&SnmpValue::Integer(4))),
            "Smart Boost (Low Voltage Compensation)"
        );
        assert_eq!(decode_state(Some(&SnmpValue::Integer(2))), "Normal Operation");
        assert_eq!(
            decode_state(Some(&SnmpValue::Integer(12))),
            "Smart Trim (High Voltage Compensation)"
        );
    }

    #[test]
    fn test_decode_unknown_code() {
        assert_eq!(decode_state(Some(&SnmpValue::Integer(99))), "Unknown State (99)");
        assert_eq!(decode_state(Some(&SnmpValue::Integer(0))), "Unknown State (0)");
    }

    #[test]
    fn test_decode_missing() {
        assert_eq!(decode_state(None), STATE_UNKNOWN);
        assert_eq!(decode_state(Some(&SnmpValue::text("n/a"))), STATE_UNKNOWN);
    }

    #[test]
    fn test_decode_truncates_fractional_codes() {
        assert_eq!(decode_state(Some(&SnmpValue::Float(3.9))), "On Battery");
        assert_eq!(decode_state(Some(&SnmpValue::text("state 11"))), "Sleeping Until Power Restored");
    }

    #[test]
    fn test_code_table_is_consistent() {
        for code in 1..=12 {
            let state = UpsState::from_code(code).unwrap();
            assert_eq!(state.code(), code);
        }
        assert!(UpsState::from_code(13).is_none());
        assert!(UpsState::SmartBoost.is_compensating());
        assert!(!UpsState::OnBattery.is_compensating());
    }
}
