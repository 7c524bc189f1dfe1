#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the end-to-end analyzer with arbitrary documents.
///
/// Any input must produce a result with a score in range.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let result = ups_quality::PowerQualityAnalyzer::new().analyze_str(s);
        assert!((0.0..=100.0).contains(&result.quality_score));
    }
});
