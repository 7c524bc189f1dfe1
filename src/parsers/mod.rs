//! SNMP value parsers.
//!
//! Turns the heterogeneous text returned by SNMP polling into typed scalars.
//!
//! ```
//! use ups_quality::model::SnmpValue;
//! use ups_quality::parsers::{extract_numeric, normalize};
//!
//! let raw = SnmpValue::text("PowerNet-MIB::upsAdvInputLineVoltage.0 = Gauge32: 228");
//! let value = normalize(&raw);
//! assert_eq!(value, SnmpValue::Integer(228));
//! assert_eq!(extract_numeric(Some(&value)), Some(228.0));
//! ```

mod snmp;

pub use snmp::{TypeTag, extract_numeric, normalize, normalize_opt};
