//! Reading monitoring documents and writing analysis results.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Path argument that stands for standard input
pub const STDIN_MARKER: &str = "-";

/// Target for output - either stdout or a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }
}

/// Read a monitoring document from a file, or from stdin for `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_MARKER {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read monitoring data from stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read monitoring data from {}", path.display()))
}

/// Serialize results as JSON, pretty unless `compact`.
pub fn render_json<T: serde::Serialize + ?Sized>(value: &T, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    rendered.context("Failed to serialize analysis output")
}

/// Write output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            println!("{content}");
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            if !quiet {
                tracing::info!("Analysis written to {}", path.display());
            }
            Ok(())
        }
    }
}
