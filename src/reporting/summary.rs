//! JSON run summary written with `--summary`.

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::models::RunSummary;
use crate::infra::{fs::write_file, t};

/// Serializes `summary` as pretty-printed JSON into `output_path`.
///
/// # Errors
/// Returns an error if the summary cannot be serialized or the file cannot
/// be written.
pub fn write_summary(summary: &RunSummary, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)
        .with_context(|| t!("run.summary_write_failed").to_string())?;
    write_file(output_path, &json)
}
