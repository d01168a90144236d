//! `notereport init` - create an empty database

use notereport_core::db::Database;
use notereport_core::error::Result;
use tracing::debug;

use crate::commands::dispatch::command::CommandContext;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let db = Database::open(&ctx.cli.db, true)?;
    let version = db.get_schema_version()?;

    debug!(elapsed = ?ctx.start.elapsed(), version, "init");

    if ctx.json() {
        let output = serde_json::json!({
            "database": ctx.cli.db.display().to_string(),
            "schema_version": version,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.cli.quiet {
        println!("Initialized database at {}", ctx.cli.db.display());
    }
    Ok(())
}
