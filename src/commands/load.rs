//! `notereport load` - import a dataset file

use std::fs;
use std::path::Path;

use notereport_core::error::{NoteReportError, Result};
use notereport_core::model::Dataset;
use tracing::debug;

use crate::commands::dispatch::command::CommandContext;

pub fn execute(ctx: &CommandContext, file: &Path) -> Result<()> {
    let content = fs::read_to_string(file).map_err(|e| NoteReportError::FailedOperation {
        operation: format!("read {}", file.display()),
        reason: e.to_string(),
    })?;
    let dataset = Dataset::parse(&content)?;

    debug!(elapsed = ?ctx.start.elapsed(), notes = dataset.notes.len(), "parse_dataset");

    let db = ctx.open_database()?;
    let rows = db.import(&dataset)?;

    debug!(elapsed = ?ctx.start.elapsed(), rows, "import");

    if ctx.json() {
        let output = serde_json::json!({
            "file": file.display().to_string(),
            "rows": rows,
            "notes": dataset.notes.len(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.cli.quiet {
        println!(
            "Loaded {} rows ({} notes) from {}",
            rows,
            dataset.notes.len(),
            file.display()
        );
    }
    Ok(())
}
