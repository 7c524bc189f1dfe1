//! Pipeline and CLI integration tests.
//!
//! These tests run fixture polls through the analyzer, the output helpers,
//! and the `analyze` command handler.

use chrono::DateTime;
use serde_json::Value;
use std::path::{Path, PathBuf};
use ups_quality::cli::{analyze_inputs, run_analyze};
use ups_quality::config::AppConfig;
use ups_quality::pipeline::{
    AnalysisResult, FixedClock, OutputTarget, PowerQualityAnalyzer, exit_codes, read_input,
    write_output,
};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn analyzer() -> PowerQualityAnalyzer<FixedClock> {
    let at = DateTime::parse_from_rfc3339("2024-06-01T08:00:00+02:00").expect("valid instant");
    PowerQualityAnalyzer::new().with_clock(FixedClock(at))
}

fn analyze_fixture(name: &str) -> AnalysisResult {
    let content = read_input(&fixture_path(name)).expect("fixture should be readable");
    analyzer().analyze_str(&content)
}

// ============================================================================
// Analyzer Tests
// ============================================================================

mod analyzer {
    use super::*;

    #[test]
    fn on_battery_with_undervoltage() {
        let result = analyze_fixture("on_battery.json");

        assert_eq!(
            result.issues,
            ["UNDERVOLTAGE: 180.0V", "POWER_FAILURE: Running on Battery"]
        );
        assert_eq!(result.alerts, ["LOW_VOLTAGE", "ON_BATTERY"]);
        assert_eq!(result.quality_score, 100.0 - 5.0 - 30.0);
        assert_eq!(result.ups_state_description, "On Battery");
        assert!(result.recommendations.is_empty());
        assert_eq!(result.analysis_timestamp, "2024-06-01T08:00:00.000000+02:00");
    }

    #[test]
    fn battery_poll_with_dead_input_line() {
        let result = analyzer().analyze_value(&serde_json::json!({
            "snmp_data": {
                "input_voltage": "PowerNet-MIB::upsAdvInputLineVoltage.0 = INTEGER: 0",
                "ups_basic_state": "PowerNet-MIB::upsBasicOutputStatus.0 = INTEGER: 3",
                "input_frequency": "PowerNet-MIB::upsAdvInputFrequency.0 = Gauge32: 0"
            }
        }));

        assert_eq!(result.issues, ["POWER_FAILURE: Running on Battery"]);
        assert_eq!(result.alerts, ["ON_BATTERY"]);
        assert_eq!(result.quality_score, 70.0);
        assert_eq!(result.parsed_snmp_data.len(), 3);
    }

    #[test]
    fn healthy_unit() {
        let result = analyze_fixture("healthy.json");

        assert!(result.issues.is_empty());
        assert!(result.alerts.is_empty());
        assert_eq!(result.quality_score, 100.0);
        assert_eq!(result.ups_state_description, "Normal Operation");
        assert_eq!(
            result.recommendations,
            ["UPS operating normally - continue regular monitoring"]
        );
        // every polled key survives, including the empty one
        assert_eq!(result.parsed_snmp_data.len(), 9);
        assert!(result.parsed_snmp_data.contains_key("battery_runtime"));
        assert_eq!(
            result.parsed_snmp_data.get("ups_model").and_then(|v| v.as_text()),
            Some("Smart-UPS 1500")
        );
    }

    #[test]
    fn stressed_unit_raises_every_rule_in_order() {
        let result = analyze_fixture("stressed.json");

        assert_eq!(
            result.issues,
            [
                "OVERVOLTAGE: 255.0V",
                "VOLTAGE_COMPENSATION: Smart Trim (High Voltage Compensation)",
                "HIGH_LOAD: 85.0% (2000W capacity)",
                "HIGH_TEMPERATURE: 38.0°C",
                "FREQUENCY_DEVIATION: 47.5Hz",
            ]
        );
        assert_eq!(
            result.alerts,
            [
                "HIGH_VOLTAGE",
                "COMPENSATION_ACTIVE",
                "HIGH_LOAD",
                "HIGH_TEMP",
                "FREQUENCY_ISSUE",
            ]
        );
        assert_eq!(result.quality_score, 100.0 - 5.0 - 15.0 - 15.0 - 15.0 - 5.0);
        assert_eq!(result.recommendations.len(), 8);
        assert_eq!(
            result.recommendations[0],
            "Investigate utility power quality - frequent compensation may indicate upstream issues"
        );
        assert_eq!(
            result.recommendations[7],
            "Consider generator or frequency regulation equipment"
        );
    }

    #[test]
    fn detailed_mode_attaches_voltage_and_load_detail() {
        let content = read_input(&fixture_path("stressed.json")).expect("readable");
        let result = analyzer().detailed(true).analyze_str(&content);
        let detail = result.detail.expect("detail requested");

        assert_eq!(detail.voltage.issues.len(), 2);
        assert_eq!(detail.voltage.issues[1], "Large voltage difference: 24.0V");
        assert_eq!(detail.load.capacity_watts, 2000.0);
        assert_eq!(
            detail.load.recommendations,
            ["Consider load balancing or additional UPS capacity"]
        );
    }

    #[test]
    fn malformed_shape_degrades() {
        let result = analyze_fixture("malformed_shape.json");

        assert!(result.is_degraded());
        assert_eq!(result.alerts, ["ANALYSIS_FAILED"]);
        assert_eq!(result.ups_state_description, "State Unknown");
        assert_eq!(result.quality_score, 0.0);
        assert!(result.issues[0].contains("snmp_data"), "{:?}", result.issues);
    }

    #[test]
    fn truncated_document_degrades() {
        let result = analyze_fixture("truncated.json");
        assert!(result.is_degraded());
        assert!(result.recommendations.is_empty());
        assert!(result.parsed_snmp_data.is_empty());
    }
}

// ============================================================================
// Output Tests
// ============================================================================

mod output {
    use super::*;

    #[test]
    fn result_serializes_with_documented_keys() {
        let result = analyze_fixture("on_battery.json");
        let value: Value = serde_json::to_value(&result).expect("serializable");

        assert_eq!(value["parsed_snmp_data"]["input_voltage"], 180);
        assert_eq!(value["parsed_snmp_data"]["output_load"], 45);
        assert_eq!(value["quality_score"], 65.0);
        assert!(value.get("error").is_none());
        assert!(value.get("detail").is_none());
    }

    #[test]
    fn result_round_trips_through_json() {
        let result = analyze_fixture("stressed.json");
        let text = serde_json::to_string(&result).expect("serializable");
        let back: AnalysisResult = serde_json::from_str(&text).expect("deserializable");
        assert_eq!(back, result);
    }

    #[test]
    fn write_output_to_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.json");
        write_output("[]", &OutputTarget::File(path.clone()), true).expect("write");
        assert_eq!(std::fs::read_to_string(path).expect("read"), "[]");
    }
}

// ============================================================================
// Command Handler Tests
// ============================================================================

mod analyze_command {
    use super::*;

    fn config_writing_to(path: &Path) -> AppConfig {
        AppConfig::builder()
            .output_file(Some(path.to_path_buf()))
            .quiet(true)
            .build()
    }

    #[test]
    fn single_input_writes_an_object() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("result.json");

        let code = run_analyze(&[fixture_path("healthy.json")], &config_writing_to(&out))
            .expect("analyze should succeed");
        assert_eq!(code, exit_codes::SUCCESS);

        let value: Value =
            serde_json::from_str(&std::fs::read_to_string(&out).expect("output")).expect("json");
        assert!(value.is_object());
        assert_eq!(value["quality_score"], 100.0);
    }

    #[test]
    fn many_inputs_write_an_ordered_array() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("fleet.json");
        let inputs = [
            fixture_path("stressed.json"),
            fixture_path("healthy.json"),
            fixture_path("on_battery.json"),
        ];

        let code = run_analyze(&inputs, &config_writing_to(&out)).expect("analyze");
        assert_eq!(code, exit_codes::SUCCESS);

        let value: Value =
            serde_json::from_str(&std::fs::read_to_string(&out).expect("output")).expect("json");
        let scores: Vec<f64> = value
            .as_array()
            .expect("array output")
            .iter()
            .map(|r| r["quality_score"].as_f64().expect("score"))
            .collect();
        assert_eq!(scores, [45.0, 100.0, 65.0]);
    }

    #[test]
    fn min_score_sets_exit_code() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = config_writing_to(&dir.path().join("out.json"));
        config.behavior.min_score = Some(70.0);

        let code = run_analyze(&[fixture_path("on_battery.json")], &config).expect("analyze");
        assert_eq!(code, exit_codes::BELOW_MIN_SCORE);
    }

    #[test]
    fn degraded_input_sets_exit_code() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = config_writing_to(&dir.path().join("out.json"));
        let inputs = [fixture_path("healthy.json"), fixture_path("truncated.json")];

        let code = run_analyze(&inputs, &config).expect("analyze");
        assert_eq!(code, exit_codes::ANALYSIS_FAILED);
    }

    #[test]
    fn missing_input_is_an_error() {
        let results = analyze_inputs(
            &PowerQualityAnalyzer::new(),
            &[fixture_path("healthy.json"), fixture_path("does-not-exist.json")],
        );
        let err = results.expect_err("missing file must fail");
        assert!(err.to_string().contains("does-not-exist.json"), "{err}");
    }

    #[test]
    fn configured_capacity_applies_to_polls_without_one() {
        let dir = tempfile::tempdir().expect("tempdir");
        let poll = dir.path().join("poll.json");
        std::fs::write(&poll, r#"{"snmp_data": {"output_load": "x = INTEGER: 90"}}"#)
            .expect("write poll");
        let out = dir.path().join("out.json");
        let mut config = config_writing_to(&out);
        config.analysis.capacity_watts = 5000.0;

        run_analyze(&[poll], &config).expect("analyze");
        let value: Value =
            serde_json::from_str(&std::fs::read_to_string(&out).expect("output")).expect("json");
        assert_eq!(value["issues"][0], "HIGH_LOAD: 90.0% (5000W capacity)");
    }
}
