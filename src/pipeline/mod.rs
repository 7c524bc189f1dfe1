//! Analysis pipeline: decode a poll, evaluate it, and emit the result.
//!
//! [`PowerQualityAnalyzer`] ties the parsers and quality stages together
//! and stamps each [`AnalysisResult`] through a [`Clock`], so tests can pin
//! the timestamp with [`FixedClock`].

mod analyze;
mod clock;
mod output;

pub use analyze::{AnalysisResult, PowerQualityAnalyzer};
pub use clock::{Clock, FixedClock, SystemClock};
pub use output::{OutputTarget, STDIN_MARKER, read_input, render_json, write_output};

/// Exit codes for the command-line tool
pub mod exit_codes {
    /// Every input analysed and met the minimum score
    pub const SUCCESS: i32 = 0;
    /// At least one result scored below `--min-score`
    pub const BELOW_MIN_SCORE: i32 = 1;
    /// At least one input degraded to `ANALYSIS_FAILED`
    pub const ANALYSIS_FAILED: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
