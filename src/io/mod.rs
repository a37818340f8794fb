pub mod output;

pub use output::{create_writer, JsonWriter, OutputFormat, OutputWriter, TerminalWriter};

use crate::core::PeriodRecord;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Load the current period from a JSON object
pub fn read_period_record(path: &Path) -> Result<PeriodRecord> {
    let content = read_file(path)?;
    let record: PeriodRecord = serde_json::from_str(&content)
        .with_context(|| format!("Invalid period record in {}", path.display()))?;
    if record.has_non_finite() {
        tracing::warn!(path = %path.display(), "period record contains non-finite values");
    }
    Ok(record)
}

/// Load a history series from a JSON array of numbers
pub fn read_history(path: &Path) -> Result<Vec<f64>> {
    let content = read_file(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Expected a JSON array of numbers in {}", path.display()))
}
