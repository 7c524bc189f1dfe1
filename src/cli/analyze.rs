//! Analyze command handler.
//!
//! Implements the `analyze` subcommand: evaluate one or more monitoring
//! documents and emit their results as JSON.

use crate::config::{AppConfig, Validatable};
use crate::pipeline::{
    AnalysisResult, OutputTarget, PowerQualityAnalyzer, STDIN_MARKER, exit_codes, read_input,
    render_json, write_output,
};
use anyhow::{Result, bail};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Run the analyze command, returning the desired exit code.
///
/// Inputs are analysed in parallel; results keep input order. The caller is
/// responsible for calling `std::process::exit()` with the returned code
/// when it is non-zero.
pub fn run_analyze(inputs: &[PathBuf], config: &AppConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let listing: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration:\n  {}", listing.join("\n  "));
    }
    if inputs.is_empty() {
        bail!("No input files given");
    }
    let stdin_count = inputs
        .iter()
        .filter(|p| p.as_os_str() == STDIN_MARKER)
        .count();
    if stdin_count > 1 {
        bail!("Standard input ('-') can only be given once");
    }

    let analyzer = PowerQualityAnalyzer::from_config(&config.analysis);
    let results = analyze_inputs(&analyzer, inputs)?;

    if !config.behavior.quiet {
        for (path, result) in inputs.iter().zip(&results) {
            log_result(path, result);
        }
    }

    let output = match results.as_slice() {
        [single] => render_json(single, config.output.compact)?,
        many => render_json(many, config.output.compact)?,
    };
    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&output, &target, config.behavior.quiet)?;

    Ok(exit_code_for(&results, config.behavior.min_score))
}

/// Read and analyse every input; the first unreadable input aborts the run.
pub fn analyze_inputs(
    analyzer: &PowerQualityAnalyzer,
    inputs: &[PathBuf],
) -> Result<Vec<AnalysisResult>> {
    inputs
        .par_iter()
        .map(|path| read_input(path).map(|content| analyzer.analyze_str(&content)))
        .collect()
}

/// Degraded input outranks a low score.
#[must_use]
pub fn exit_code_for(results: &[AnalysisResult], min_score: Option<f64>) -> i32 {
    if results.iter().any(AnalysisResult::is_degraded) {
        return exit_codes::ANALYSIS_FAILED;
    }
    if let Some(threshold) = min_score {
        if let Some(worst) = results.iter().find(|r| r.quality_score < threshold) {
            tracing::error!(
                "Quality score {:.1} is below minimum threshold {:.1}",
                worst.quality_score,
                threshold
            );
            return exit_codes::BELOW_MIN_SCORE;
        }
    }
    exit_codes::SUCCESS
}

fn log_result(path: &Path, result: &AnalysisResult) {
    if let Some(error) = &result.error {
        tracing::warn!("{}: analysis failed: {error}", path.display());
        return;
    }
    tracing::info!(
        "{}: score {:.1} (grade {}), {} issue(s)",
        path.display(),
        result.quality_score,
        result.grade().letter(),
        result.issues.len()
    );
}
