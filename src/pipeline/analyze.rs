//! End-to-end analysis of one UPS poll.

use super::clock::{Clock, SystemClock};
use crate::config::AnalysisConfig;
use crate::model::{
    DEFAULT_CAPACITY_WATTS, MetricKey, MonitoringData, NormalizedMetricSet, STATE_UNKNOWN,
    decode_state,
};
use crate::quality::{
    Alert, DetailedAnalysis, IssueCategory, QualityEvaluator, QualityGrade, Thresholds,
    recommend, score,
};
use serde::{Deserialize, Serialize};

/// Result handed back to the orchestration layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Issues as `"<CATEGORY>: <detail>"` strings, in rule order
    pub issues: Vec<String>,
    /// One alert tag per issue
    pub alerts: Vec<String>,
    /// Normalized copy of every polled metric
    pub parsed_snmp_data: NormalizedMetricSet,
    pub ups_state_description: String,
    /// 0-100
    pub quality_score: f64,
    pub recommendations: Vec<String>,
    pub analysis_timestamp: String,
    /// Set only when the input could not be analysed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Voltage and load detail, present in detailed mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<DetailedAnalysis>,
}

impl AnalysisResult {
    /// Result for input that could not be analysed.
    #[must_use]
    pub fn degraded(message: impl Into<String>, timestamp: String) -> Self {
        let message = message.into();
        Self {
            issues: vec![format!(
                "{}: {message}",
                IssueCategory::AnalysisError.prefix()
            )],
            alerts: vec![Alert::AnalysisFailed.tag().to_string()],
            parsed_snmp_data: NormalizedMetricSet::default(),
            ups_state_description: STATE_UNKNOWN.to_string(),
            quality_score: 0.0,
            recommendations: Vec::new(),
            analysis_timestamp: timestamp,
            error: Some(message),
            detail: None,
        }
    }

    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.error.is_some()
    }

    #[must_use]
    pub fn grade(&self) -> QualityGrade {
        QualityGrade::from_score(self.quality_score)
    }
}

/// Runs normalization, evaluation, scoring and recommendations for a poll.
///
/// Stateless apart from its settings; one analyzer can serve many threads.
#[derive(Debug, Clone)]
pub struct PowerQualityAnalyzer<C: Clock = SystemClock> {
    evaluator: QualityEvaluator,
    default_capacity_watts: f64,
    detailed: bool,
    clock: C,
}

impl Default for PowerQualityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerQualityAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            evaluator: QualityEvaluator::new(),
            default_capacity_watts: DEFAULT_CAPACITY_WATTS,
            detailed: false,
            clock: SystemClock,
        }
    }

    /// Analyzer configured from the `analysis` config section
    #[must_use]
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new()
            .with_thresholds(config.thresholds.clone())
            .with_default_capacity(config.capacity_watts)
            .detailed(config.detailed)
    }
}

impl<C: Clock> PowerQualityAnalyzer<C> {
    /// Replace the timestamp source
    #[must_use]
    pub fn with_clock<D: Clock>(self, clock: D) -> PowerQualityAnalyzer<D> {
        PowerQualityAnalyzer {
            evaluator: self.evaluator,
            default_capacity_watts: self.default_capacity_watts,
            detailed: self.detailed,
            clock,
        }
    }

    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.evaluator = QualityEvaluator::with_thresholds(thresholds);
        self
    }

    /// Capacity used when a poll does not state one
    #[must_use]
    pub fn with_default_capacity(mut self, capacity_watts: f64) -> Self {
        self.default_capacity_watts = capacity_watts;
        self
    }

    /// Attach voltage and load detail to each result
    #[must_use]
    pub fn detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    /// Analyse a decoded poll.
    pub fn analyze(&self, data: &MonitoringData) -> AnalysisResult {
        let capacity_watts = data.capacity_watts.unwrap_or(self.default_capacity_watts);
        let eval = self.evaluator.evaluate(&data.snmp_data, capacity_watts);

        let issues = eval.issue_strings();
        let alerts = eval.alert_strings();
        let quality_score = score(&issues);
        let recommendations = recommend(&issues);
        let ups_state_description =
            decode_state(eval.normalized.metric(MetricKey::UpsBasicState));
        let detail = self.detailed.then(|| {
            DetailedAnalysis::from_metrics(
                &eval.normalized,
                capacity_watts,
                self.evaluator.thresholds(),
            )
        });

        if !issues.is_empty() {
            tracing::debug!(
                host = data.ups_host().unwrap_or("-"),
                score = quality_score,
                alerts = %alerts.join(", "),
                "power quality issues detected"
            );
        }

        AnalysisResult {
            issues,
            alerts,
            parsed_snmp_data: eval.normalized,
            ups_state_description,
            quality_score,
            recommendations,
            analysis_timestamp: self.clock.timestamp(),
            error: None,
            detail,
        }
    }

    /// Analyse a loosely-typed JSON poll; malformed input yields a degraded result.
    pub fn analyze_value(&self, value: &serde_json::Value) -> AnalysisResult {
        match MonitoringData::from_value(value) {
            Ok(data) => self.analyze(&data),
            Err(e) => self.degraded(e.detailed_message()),
        }
    }

    /// Analyse a JSON document; malformed input yields a degraded result.
    pub fn analyze_str(&self, content: &str) -> AnalysisResult {
        match MonitoringData::from_json_str(content) {
            Ok(data) => self.analyze(&data),
            Err(e) => self.degraded(e.detailed_message()),
        }
    }

    /// Degraded result stamped with this analyzer's clock
    #[must_use]
    pub fn degraded(&self, message: impl Into<String>) -> AnalysisResult {
        let message = message.into();
        tracing::warn!("power quality analysis failed: {message}");
        AnalysisResult::degraded(message, self.clock.timestamp())
    }
}
