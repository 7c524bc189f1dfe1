//! Data model for UPS telemetry.
//!
//! Raw SNMP responses arrive as a [`RawMetricSet`] inside [`MonitoringData`];
//! normalization produces a [`NormalizedMetricSet`] with the same keys whose
//! values are simplified to [`SnmpValue`] scalars.

mod metrics;
mod state;
mod value;

pub use metrics::{
    DEFAULT_CAPACITY_WATTS, MetricKey, MonitoringData, NormalizedMetricSet, RawMetricSet,
};
pub use state::{STATE_UNKNOWN, UpsState, decode_state, state_code};
pub use value::{SnmpValue, format_quantity, format_reading};
