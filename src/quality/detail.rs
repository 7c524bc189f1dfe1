//! Per-subsystem detail analyses for voltage and load.

use super::evaluator::reading;
use super::thresholds::Thresholds;
use crate::model::{MetricKey, NormalizedMetricSet, format_reading};
use serde::{Deserialize, Serialize};

/// Condition of a subsystem
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Normal,
    Warning,
    Critical,
}

/// How much of the rated capacity is in use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Utilization {
    #[default]
    Low,
    High,
    Critical,
}

/// Input/output voltage findings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoltageAnalysis {
    pub status: Status,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Load and capacity findings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadAnalysis {
    pub status: Status,
    pub utilization: Utilization,
    pub capacity_watts: f64,
    pub recommendations: Vec<String>,
}

/// Both detail analyses, attached to a result in detailed mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub voltage: VoltageAnalysis,
    pub load: LoadAnalysis,
}

impl DetailedAnalysis {
    #[must_use]
    pub fn from_metrics(
        metrics: &NormalizedMetricSet,
        capacity_watts: f64,
        thresholds: &Thresholds,
    ) -> Self {
        Self {
            voltage: analyze_voltage(metrics, thresholds),
            load: analyze_load(metrics, capacity_watts, thresholds),
        }
    }
}

/// Check input voltage limits and the input/output voltage gap.
#[must_use]
pub fn analyze_voltage(metrics: &NormalizedMetricSet, thresholds: &Thresholds) -> VoltageAnalysis {
    let mut analysis = VoltageAnalysis::default();
    let input = reading(metrics, MetricKey::InputVoltage);
    let output = reading(metrics, MetricKey::OutputVoltage);

    if let Some(input) = input {
        if input < thresholds.undervoltage {
            analysis.status = Status::Critical;
            analysis.issues.push("Input voltage critically low".to_string());
            analysis
                .recommendations
                .push("Check utility power quality".to_string());
        } else if input > thresholds.overvoltage {
            analysis.status = Status::Critical;
            analysis.issues.push("Input voltage critically high".to_string());
            analysis
                .recommendations
                .push("Check for overvoltage conditions".to_string());
        }
    }

    if let (Some(input), Some(output)) = (input, output) {
        let difference = (input - output).abs();
        if difference > thresholds.voltage_difference {
            analysis.issues.push(format!(
                "Large voltage difference: {}V",
                format_reading(difference)
            ));
        }
    }

    analysis
}

/// Classify output load against the rated capacity.
#[must_use]
pub fn analyze_load(
    metrics: &NormalizedMetricSet,
    capacity_watts: f64,
    thresholds: &Thresholds,
) -> LoadAnalysis {
    let mut analysis = LoadAnalysis {
        capacity_watts,
        ..LoadAnalysis::default()
    };
    let Some(load) = reading(metrics, MetricKey::OutputLoad) else {
        return analysis;
    };

    let (status, utilization, advice) = if load > thresholds.high_load {
        (
            Status::Critical,
            Utilization::Critical,
            Some("Consider load balancing or additional UPS capacity"),
        )
    } else if load > thresholds.moderate_load {
        (
            Status::Warning,
            Utilization::High,
            Some("Monitor load trends for capacity planning"),
        )
    } else if load < thresholds.low_load {
        (
            Status::Normal,
            Utilization::Low,
            Some("UPS may be oversized for current load"),
        )
    } else {
        (Status::Normal, Utilization::Low, None)
    };

    analysis.status = status;
    analysis.utilization = utilization;
    analysis
        .recommendations
        .extend(advice.map(str::to_string));
    analysis
}
