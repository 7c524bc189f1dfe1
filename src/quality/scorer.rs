//! Quality score.
//!
//! Reduces an issue list to a 0-100 score by deducting a fixed weight per
//! issue. Weights are chosen by substring, so issue text supplied by other
//! tools (for example containing `CRITICAL` or `WARNING`) is scored too.

use serde::{Deserialize, Serialize};

/// Score of a unit with no issues
pub const PERFECT_SCORE: f64 = 100.0;

/// Deduction tiers, checked in order; the first matching tier applies.
const DEDUCTION_TIERS: &[(&[&str], f64)] = &[
    (&["CRITICAL", "POWER_FAILURE"], 30.0),
    (&["HIGH", "COMPENSATION"], 15.0),
    (&["MODERATE", "WARNING"], 10.0),
];

/// Deduction for anything that matches no tier
const DEFAULT_DEDUCTION: f64 = 5.0;

/// Points deducted for a single issue.
#[must_use]
pub fn deduction(issue: &str) -> f64 {
    DEDUCTION_TIERS
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| issue.contains(n)))
        .map_or(DEFAULT_DEDUCTION, |(_, points)| *points)
}

/// Score an issue list, clamped to `[0, 100]`.
#[must_use]
pub fn score<S: AsRef<str>>(issues: &[S]) -> f64 {
    let total: f64 = issues.iter().map(|i| deduction(i.as_ref())).sum();
    (PERFECT_SCORE - total).max(0.0)
}

/// Letter grade for a quality score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum QualityGrade {
    /// Excellent: 90-100
    A,
    /// Good: 80-89
    B,
    /// Fair: 70-79
    C,
    /// Poor: 60-69
    D,
    /// Failing: <60
    F,
}

impl QualityGrade {
    /// Create grade from score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        match score as u32 {
            90..=100 => Self::A,
            80..=89 => Self::B,
            70..=79 => Self::C,
            60..=69 => Self::D,
            _ => Self::F,
        }
    }

    #[must_use]
    pub const fn letter(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::A => "Excellent",
            Self::B => "Good",
            Self::C => "Fair",
            Self::D => "Poor",
            Self::F => "Failing",
        }
    }
}
