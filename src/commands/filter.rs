//! `notereport filter` - manage saved filter configurations

use notereport_core::error::{NoteReportError, Result};
use notereport_core::model::ReportScope;
use notereport_core::repository::FilterConfigStore;

use crate::commands::dispatch::command::CommandContext;

pub fn execute_list(ctx: &CommandContext, scope: ReportScope) -> Result<()> {
    let db = ctx.open_database()?;
    let names = db.filter_config_names(scope)?;

    if ctx.json() {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else if names.is_empty() {
        if !ctx.cli.quiet {
            println!("No filter configurations for scope '{}'", scope);
        }
    } else {
        for name in names {
            println!("{}", name);
        }
    }
    Ok(())
}

pub fn execute_show(ctx: &CommandContext, scope: ReportScope, name: &str) -> Result<()> {
    let db = ctx.open_database()?;
    let entries = db
        .load_filter_config(scope, name)?
        .ok_or_else(|| NoteReportError::not_found("filter configuration", name))?;

    if ctx.json() {
        let output = serde_json::json!({
            "name": name,
            "scope": scope.as_str(),
            "entries": entries,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for entry in &entries {
        let mark = if entry.included { 'x' } else { ' ' };
        if entry.parent_path.is_empty() {
            println!("[{}] {} {}", mark, entry.note_num, entry.note_id);
        } else {
            println!(
                "[{}] {} {} ({})",
                mark, entry.note_num, entry.note_id, entry.parent_path
            );
        }
    }
    Ok(())
}

pub fn execute_delete(ctx: &CommandContext, scope: ReportScope, name: &str) -> Result<()> {
    let db = ctx.open_database()?;
    if !db.delete_filter_config(scope, name)? {
        return Err(NoteReportError::not_found("filter configuration", name));
    }

    if ctx.json() {
        let output = serde_json::json!({ "deleted": name, "scope": scope.as_str() });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.cli.quiet {
        println!("Deleted filter configuration '{}'", name);
    }
    Ok(())
}
