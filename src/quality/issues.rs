//! Issue and alert vocabulary.

use serde::{Serialize, Serializer};
use std::fmt;

/// Category prefix of a detected power-quality issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum IssueCategory {
    Undervoltage,
    Overvoltage,
    VoltageCompensation,
    PowerFailure,
    HighLoad,
    ModerateLoad,
    HighTemperature,
    FrequencyDeviation,
    AnalysisError,
}

impl IssueCategory {
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Undervoltage => "UNDERVOLTAGE",
            Self::Overvoltage => "OVERVOLTAGE",
            Self::VoltageCompensation => "VOLTAGE_COMPENSATION",
            Self::PowerFailure => "POWER_FAILURE",
            Self::HighLoad => "HIGH_LOAD",
            Self::ModerateLoad => "MODERATE_LOAD",
            Self::HighTemperature => "HIGH_TEMPERATURE",
            Self::FrequencyDeviation => "FREQUENCY_DEVIATION",
            Self::AnalysisError => "ANALYSIS_ERROR",
        }
    }

    /// Alert raised alongside issues of this category
    #[must_use]
    pub const fn alert(&self) -> Alert {
        match self {
            Self::Undervoltage => Alert::LowVoltage,
            Self::Overvoltage => Alert::HighVoltage,
            Self::VoltageCompensation => Alert::CompensationActive,
            Self::PowerFailure => Alert::OnBattery,
            Self::HighLoad => Alert::HighLoad,
            Self::ModerateLoad => Alert::ModerateLoad,
            Self::HighTemperature => Alert::HighTemp,
            Self::FrequencyDeviation => Alert::FrequencyIssue,
            Self::AnalysisError => Alert::AnalysisFailed,
        }
    }
}

/// A detected condition: category prefix plus a human-readable detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub category: IssueCategory,
    pub detail: String,
}

impl Issue {
    pub fn new(category: IssueCategory, detail: impl Into<String>) -> Self {
        Self {
            category,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category.prefix(), self.detail)
    }
}

impl Serialize for Issue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Short machine-readable tag paired with an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Alert {
    LowVoltage,
    HighVoltage,
    CompensationActive,
    OnBattery,
    HighLoad,
    ModerateLoad,
    HighTemp,
    FrequencyIssue,
    AnalysisFailed,
}

impl Alert {
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::LowVoltage => "LOW_VOLTAGE",
            Self::HighVoltage => "HIGH_VOLTAGE",
            Self::CompensationActive => "COMPENSATION_ACTIVE",
            Self::OnBattery => "ON_BATTERY",
            Self::HighLoad => "HIGH_LOAD",
            Self::ModerateLoad => "MODERATE_LOAD",
            Self::HighTemp => "HIGH_TEMP",
            Self::FrequencyIssue => "FREQUENCY_ISSUE",
            Self::AnalysisFailed => "ANALYSIS_FAILED",
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for Alert {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display() {
        let issue = Issue::new(IssueCategory::Undervoltage, "180.0V");
        assert_eq!(issue.to_string(), "UNDERVOLTAGE: 180.0V");
    }

    #[test]
    fn test_serializes_as_strings() {
        let issue = Issue::new(IssueCategory::PowerFailure, "Running on Battery");
        assert_eq!(
            serde_json::to_string(&issue).unwrap(),
            "\"POWER_FAILURE: Running on Battery\""
        );
        assert_eq!(
            serde_json::to_string(&Alert::OnBattery).unwrap(),
            "\"ON_BATTERY\""
        );
    }

    #[test]
    fn test_category_alert_pairing() {
        assert_eq!(IssueCategory::HighTemperature.alert(), Alert::HighTemp);
        assert_eq!(
            IssueCategory::VoltageCompensation.alert(),
            Alert::CompensationActive
        );
        assert_eq!(IssueCategory::AnalysisError.alert().tag(), "ANALYSIS_FAILED");
    }
}
