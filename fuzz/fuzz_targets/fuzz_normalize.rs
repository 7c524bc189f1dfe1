#![no_main]
use libfuzzer_sys::fuzz_target;
use ups_quality::model::SnmpValue;

/// Fuzz SNMP response normalization and numeric extraction.
///
/// Neither may panic, and normalizing twice must agree with normalizing once
/// for anything that came out numeric.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let raw = SnmpValue::from(s);
        let normalized = ups_quality::parsers::normalize(&raw);
        let _ = ups_quality::parsers::extract_numeric(Some(&raw));
        if normalized.is_numeric() {
            assert_eq!(ups_quality::parsers::normalize(&normalized), normalized);
        }
    }
});
