//! UPS power-quality assessment.
//!
//! Evaluation runs in stages:
//!
//! - **Evaluation**: normalize metrics and apply threshold rules
//!   ([`QualityEvaluator`]), producing ordered [`Issue`]s and [`Alert`]s
//! - **Scoring**: deduct a fixed weight per issue ([`score`])
//! - **Recommendations**: map issue categories to remediation text
//!   ([`recommend`])
//!
//! # Usage
//!
//! ```
//! use ups_quality::model::{MetricKey, RawMetricSet};
//! use ups_quality::quality::{QualityEvaluator, recommend, score};
//!
//! let raw = RawMetricSet::new()
//!     .with(MetricKey::InputVoltage, "1.3.6.1.4.1.318.1.1.1.3.2.1.0 = Gauge32: 180")
//!     .with(MetricKey::UpsBasicState, "1.3.6.1.4.1.318.1.1.1.4.1.1.0 = INTEGER: 3");
//!
//! let eval = QualityEvaluator::new().evaluate(&raw, 1000.0);
//! let issues = eval.issue_strings();
//! assert_eq!(issues, ["UNDERVOLTAGE: 180.0V", "POWER_FAILURE: Running on Battery"]);
//! assert_eq!(score(&issues), 65.0);
//! assert!(recommend(&issues).is_empty());
//! ```

mod detail;
mod evaluator;
mod issues;
mod recommendations;
mod scorer;
mod thresholds;

pub use detail::{
    DetailedAnalysis, LoadAnalysis, Status, Utilization, VoltageAnalysis, analyze_load,
    analyze_voltage,
};
pub use evaluator::{Evaluation, QualityEvaluator};
pub use issues::{Alert, Issue, IssueCategory};
pub use recommendations::{OPERATING_NORMALLY, recommend};
pub use scorer::{PERFECT_SCORE, QualityGrade, deduction, score};
pub use thresholds::Thresholds;
