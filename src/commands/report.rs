//! `notereport report` - render the notes report

use notereport_core::error::Result;
use notereport_core::report::{NotesReport, PlainTextSink, ReportConfig, SelectionDialog};
use tracing::debug;

use crate::cli::ReportArgs;
use crate::commands::dispatch::command::CommandContext;

pub fn execute(ctx: &CommandContext, args: &ReportArgs) -> Result<()> {
    let settings = ctx.settings()?;
    let db = ctx.open_database()?;

    let mut config = ReportConfig::new(args.scope).with_search(args.search.clone());
    if let Some(title) = &args.title {
        config = config.with_title(title.clone());
    }

    let mut sink = PlainTextSink::new(settings.output.width);
    let mut report = NotesReport::new(&db, config, settings);

    if let Some(name) = &args.filter_config {
        report.display(&mut sink)?;
        report.apply_named(&db, name, &mut sink)?;
    } else if args.no_default_filter {
        report.display(&mut sink)?;
    } else {
        let applied = report.open(&db, &mut sink)?;
        debug!(applied, "default_filter_config");
    }

    let mut dialog = SelectionDialog::new(&db)
        .only(args.only.clone())
        .exclude(args.exclude.clone())
        .save_as(args.save_as.clone());
    let filtered = report.filter(&mut dialog, &mut sink)?;

    debug!(elapsed = ?ctx.start.elapsed(), filtered, blocks = report.blocks().len(), "report");

    if ctx.json() {
        let config = report.config();
        let output = serde_json::json!({
            "title": config.title,
            "scope": config.scope.as_str(),
            "search_text": config.search_text,
            "config_name": report.filter_state().config_name(),
            "blocks": report.blocks(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", sink.output());
    }
    Ok(())
}
