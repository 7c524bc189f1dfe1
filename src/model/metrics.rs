//! Metric sets exchanged with the SNMP polling layer.

use super::value::SnmpValue;
use crate::error::{InputErrorKind, Result, UpsQualityError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default rated capacity when the caller does not supply one.
pub const DEFAULT_CAPACITY_WATTS: f64 = 1000.0;

/// Well-known metric names polled from a UPS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MetricKey {
    InputVoltage,
    OutputVoltage,
    InputFrequency,
    OutputLoad,
    BatteryCapacity,
    BatteryTemperature,
    UpsBasicState,
}

impl MetricKey {
    /// Key used in the metric mapping
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InputVoltage => "input_voltage",
            Self::OutputVoltage => "output_voltage",
            Self::InputFrequency => "input_frequency",
            Self::OutputLoad => "output_load",
            Self::BatteryCapacity => "battery_capacity",
            Self::BatteryTemperature => "battery_temperature",
            Self::UpsBasicState => "ups_basic_state",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::InputVoltage,
            Self::OutputVoltage,
            Self::InputFrequency,
            Self::OutputLoad,
            Self::BatteryCapacity,
            Self::BatteryTemperature,
            Self::UpsBasicState,
        ]
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|key| key.name() == name)
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw metric name to SNMP response mapping, as supplied by the poller.
///
/// Values are either pre-typed numbers, `OID = TYPE: VALUE` response lines,
/// or already decoded text. `None` marks a metric that was polled but came
/// back empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawMetricSet {
    values: IndexMap<String, Option<SnmpValue>>,
}

impl RawMetricSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a metric
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<SnmpValue>) {
        self.values.insert(name.into(), Some(value.into()));
    }

    /// Record a metric that returned no value
    pub fn insert_empty(&mut self, name: impl Into<String>) {
        self.values.insert(name.into(), None);
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: MetricKey, value: impl Into<SnmpValue>) -> Self {
        self.insert(key.name(), value);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SnmpValue> {
        self.values.get(name).and_then(Option::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&SnmpValue>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<SnmpValue>> FromIterator<(K, V)> for RawMetricSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

/// Normalized metrics: one entry per raw metric, never fewer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedMetricSet {
    values: IndexMap<String, Option<SnmpValue>>,
}

impl NormalizedMetricSet {
    pub(crate) fn from_entries(values: IndexMap<String, Option<SnmpValue>>) -> Self {
        Self { values }
    }

    /// Look up a metric by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SnmpValue> {
        self.values.get(name).and_then(Option::as_ref)
    }

    /// Look up a well-known metric
    #[must_use]
    pub fn metric(&self, key: MetricKey) -> Option<&SnmpValue> {
        self.get(key.name())
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&SnmpValue>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One poll of a UPS as handed over by the orchestration layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitoringData {
    /// Polled metrics
    #[serde(default)]
    pub snmp_data: RawMetricSet,
    /// Rated capacity of the unit in watts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_watts: Option<f64>,
    /// Identity and bookkeeping fields (`ups_host`, `ip_address`, ...) kept as-is
    #[serde(flatten)]
    pub passthrough: IndexMap<String, serde_json::Value>,
}

impl MonitoringData {
    #[must_use]
    pub fn new(snmp_data: RawMetricSet) -> Self {
        Self {
            snmp_data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_capacity_watts(mut self, capacity_watts: f64) -> Self {
        self.capacity_watts = Some(capacity_watts);
        self
    }

    /// Decode a loosely-typed JSON document
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(UpsQualityError::input(
                "monitoring data",
                InputErrorKind::InvalidShape {
                    field: "<root>".to_string(),
                    message: format!("expected an object, found {}", json_kind(value)),
                },
            ));
        }
        if let Some(snmp) = value.get("snmp_data") {
            if !snmp.is_object() {
                return Err(UpsQualityError::input(
                    "monitoring data",
                    InputErrorKind::InvalidShape {
                        field: "snmp_data".to_string(),
                        message: format!("expected an object, found {}", json_kind(snmp)),
                    },
                ));
            }
        }
        Ok(Self::deserialize(value)?)
    }

    /// Decode a JSON document from text
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        Self::from_value(&value)
    }

    /// Capacity to report against, falling back to the default rating
    #[must_use]
    pub fn capacity_or_default(&self) -> f64 {
        self.capacity_watts.unwrap_or(DEFAULT_CAPACITY_WATTS)
    }

    fn passthrough_str(&self, key: &str) -> Option<&str> {
        self.passthrough.get(key).and_then(serde_json::Value::as_str)
    }

    #[must_use]
    pub fn ups_host(&self) -> Option<&str> {
        self.passthrough_str("ups_host")
    }

    #[must_use]
    pub fn ip_address(&self) -> Option<&str> {
        self.passthrough_str("ip_address")
    }

    #[must_use]
    pub fn timestamp(&self) -> Option<&str> {
        self.passthrough_str("timestamp")
    }

    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.passthrough_str("model")
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.passthrough_str("location")
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.passthrough_str("status")
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metric_key_roundtrip_names() {
        for key in MetricKey::all() {
            assert_eq!(MetricKey::from_name(key.name()), Some(*key));
        }
        assert_eq!(MetricKey::from_name("ups_model"), None);
    }

    #[test]
    fn test_raw_set_preserves_order_and_nulls() {
        let data = MonitoringData::from_value(&json!({
            "snmp_data": {
                "output_load": "x = INTEGER: 45",
                "input_voltage": 230,
                "battery_temperature": null
            }
        }))
        .unwrap();

        let keys: Vec<&str> = data.snmp_data.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["output_load", "input_voltage", "battery_temperature"]);
        assert_eq!(data.snmp_data.get("battery_temperature"), None);
        assert_eq!(data.snmp_data.len(), 3);
    }

    #[test]
    fn test_passthrough_fields_are_kept() {
        let data = MonitoringData::from_value(&json!({
            "ups_host": "ups-01",
            "ip_address": "10.0.0.5",
            "capacity_watts": 1500,
            "snmp_data": {}
        }))
        .unwrap();

        assert_eq!(data.ups_host(), Some("ups-01"));
        assert_eq!(data.ip_address(), Some("10.0.0.5"));
        assert_eq!(data.capacity_or_default(), 1500.0);
        assert_eq!(data.model(), None);
    }

    #[test]
    fn test_missing_snmp_data_defaults_to_empty() {
        let data = MonitoringData::from_value(&json!({"ups_host": "ups-01"})).unwrap();
        assert!(data.snmp_data.is_empty());
        assert_eq!(data.capacity_or_default(), DEFAULT_CAPACITY_WATTS);
    }

    #[test]
    fn test_rejects_non_object_snmp_data() {
        let err = MonitoringData::from_value(&json!({"snmp_data": ["a", "b"]})).unwrap_err();
        assert!(err.to_string().contains("monitoring data"), "{err}");
        assert!(matches!(err, UpsQualityError::Input { .. }));
    }

    #[test]
    fn test_rejects_non_object_root() {
        assert!(MonitoringData::from_value(&json!([1, 2])).is_err());
        assert!(MonitoringData::from_json_str("not json").is_err());
    }

    #[test]
    fn test_rejects_boolean_metric() {
        let result = MonitoringData::from_value(&json!({"snmp_data": {"output_load": true}}));
        assert!(result.is_err());
    }
}
