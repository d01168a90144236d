//! `notereport stats` - row counts

use notereport_core::error::Result;

use crate::commands::dispatch::command::CommandContext;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let db = ctx.open_database()?;
    let counts = db.counts()?;

    if ctx.json() {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    let rows = [
        ("libraries", counts.libraries),
        ("documents", counts.documents),
        ("episodes", counts.episodes),
        ("transcripts", counts.transcripts),
        ("collections", counts.collections),
        ("quotes", counts.quotes),
        ("clips", counts.clips),
        ("snapshots", counts.snapshots),
        ("notes", counts.notes),
        ("filter configs", counts.filter_configs),
    ];
    for (label, count) in rows {
        println!("{:<15} {}", label, count);
    }
    Ok(())
}
