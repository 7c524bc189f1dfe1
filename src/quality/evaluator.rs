//! Rule-based power-quality evaluation.
//!
//! Rules run in a fixed order (voltage, state, load, temperature, frequency)
//! and every rule always runs. A metric that is missing, carries no number,
//! or reads exactly zero is skipped by its rule rather than reported.

use super::issues::{Alert, Issue, IssueCategory};
use super::thresholds::Thresholds;
use crate::model::{
    MetricKey, NormalizedMetricSet, RawMetricSet, UpsState, format_quantity, format_reading,
    state_code,
};
use crate::parsers::{extract_numeric, normalize_opt};

/// Output of one evaluation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    /// Issues in rule order
    pub issues: Vec<Issue>,
    /// One alert per issue, same order
    pub alerts: Vec<Alert>,
    /// Normalized copy of every raw metric
    pub normalized: NormalizedMetricSet,
}

impl Evaluation {
    fn raise(&mut self, issue: Issue) {
        self.alerts.push(issue.category.alert());
        self.issues.push(issue);
    }

    /// Issues rendered as plain strings
    #[must_use]
    pub fn issue_strings(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    /// Alerts rendered as plain tags
    #[must_use]
    pub fn alert_strings(&self) -> Vec<String> {
        self.alerts.iter().map(|a| a.tag().to_string()).collect()
    }

    #[must_use]
    pub fn has_issue(&self, category: IssueCategory) -> bool {
        self.issues.iter().any(|i| i.category == category)
    }
}

/// Applies [`Thresholds`] to a metric set.
#[derive(Debug, Clone, Default)]
pub struct QualityEvaluator {
    thresholds: Thresholds,
}

impl QualityEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_thresholds(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub const fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Normalize `raw` and run every rule against it.
    pub fn evaluate(&self, raw: &RawMetricSet, capacity_watts: f64) -> Evaluation {
        let normalized = NormalizedMetricSet::from_entries(
            raw.iter()
                .map(|(name, value)| (name.to_string(), normalize_opt(value)))
                .collect(),
        );

        let mut eval = Evaluation {
            normalized,
            ..Evaluation::default()
        };

        self.check_voltage(&mut eval);
        Self::check_state(&mut eval);
        self.check_load(&mut eval, capacity_watts);
        self.check_temperature(&mut eval);
        self.check_frequency(&mut eval);

        tracing::debug!(
            metrics = eval.normalized.len(),
            issues = eval.issues.len(),
            "power quality evaluated"
        );
        eval
    }

    fn check_voltage(&self, eval: &mut Evaluation) {
        let Some(volts) = reading(&eval.normalized, MetricKey::InputVoltage) else {
            return;
        };
        if volts < self.thresholds.undervoltage {
            eval.raise(Issue::new(
                IssueCategory::Undervoltage,
                format!("{}V", format_reading(volts)),
            ));
        } else if volts > self.thresholds.overvoltage {
            eval.raise(Issue::new(
                IssueCategory::Overvoltage,
                format!("{}V", format_reading(volts)),
            ));
        }
    }

    fn check_state(eval: &mut Evaluation) {
        let code = state_code(eval.normalized.metric(MetricKey::UpsBasicState));
        let issue = match code.and_then(UpsState::from_code) {
            Some(state @ (UpsState::SmartBoost | UpsState::SmartTrim)) => Issue::new(
                IssueCategory::VoltageCompensation,
                state.description(),
            ),
            Some(UpsState::OnBattery) => {
                Issue::new(IssueCategory::PowerFailure, "Running on Battery")
            }
            _ => return,
        };
        eval.raise(issue);
    }

    fn check_load(&self, eval: &mut Evaluation, capacity_watts: f64) {
        let Some(load) = reading(&eval.normalized, MetricKey::OutputLoad) else {
            return;
        };
        if load > self.thresholds.high_load {
            eval.raise(Issue::new(
                IssueCategory::HighLoad,
                format!(
                    "{}% ({}W capacity)",
                    format_reading(load),
                    format_quantity(capacity_watts)
                ),
            ));
        } else if load > self.thresholds.moderate_load {
            eval.raise(Issue::new(
                IssueCategory::ModerateLoad,
                format!("{}%", format_reading(load)),
            ));
        }
    }

    fn check_temperature(&self, eval: &mut Evaluation) {
        let Some(celsius) = reading(&eval.normalized, MetricKey::BatteryTemperature) else {
            return;
        };
        if celsius > self.thresholds.high_temperature {
            eval.raise(Issue::new(
                IssueCategory::HighTemperature,
                format!("{}°C", format_reading(celsius)),
            ));
        }
    }

    fn check_frequency(&self, eval: &mut Evaluation) {
        let Some(hz) = reading(&eval.normalized, MetricKey::InputFrequency) else {
            return;
        };
        if self.thresholds.frequency_out_of_band(hz) {
            eval.raise(Issue::new(
                IssueCategory::FrequencyDeviation,
                format!("{}Hz", format_reading(hz)),
            ));
        }
    }
}

/// Numeric reading of a well-known metric.
///
/// A reading of exactly zero carries no signal (an input line on battery
/// reports 0 V and 0 Hz) and is treated like a missing one.
pub(crate) fn reading(metrics: &NormalizedMetricSet, key: MetricKey) -> Option<f64> {
    extract_numeric(metrics.metric(key)).filter(|value| *value != 0.0)
}
