//! Remediation text for detected issues.

/// Fixed remediation blocks, each keyed by a substring looked for in any issue.
const BLOCKS: &[(&str, [&str; 2])] = &[
    (
        "VOLTAGE_COMPENSATION",
        [
            "Investigate utility power quality - frequent compensation may indicate upstream issues",
            "Consider installing power conditioning equipment",
        ],
    ),
    (
        "HIGH_LOAD",
        [
            "Plan for load redistribution or additional UPS capacity",
            "Review critical vs non-critical load classification",
        ],
    ),
    (
        "HIGH_TEMPERATURE",
        [
            "Check UPS ventilation and ambient temperature",
            "Verify UPS internal fans are operational",
        ],
    ),
    (
        "FREQUENCY",
        [
            "Contact utility company regarding power quality issues",
            "Consider generator or frequency regulation equipment",
        ],
    ),
];

/// Emitted when there is nothing to remediate
pub const OPERATING_NORMALLY: &str = "UPS operating normally - continue regular monitoring";

/// Recommendations for an issue list.
///
/// Each block is added at most once, however many issues match it, and
/// blocks keep their fixed order.
#[must_use]
pub fn recommend<S: AsRef<str>>(issues: &[S]) -> Vec<String> {
    if issues.is_empty() {
        return vec![OPERATING_NORMALLY.to_string()];
    }

    BLOCKS
        .iter()
        .filter(|(needle, _)| issues.iter().any(|i| i.as_ref().contains(needle)))
        .flat_map(|(_, lines)| lines.iter().map(|l| (*l).to_string()))
        .collect()
}
