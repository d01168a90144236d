//! Command dispatch logic for notereport

use std::time::Instant;

use notereport_core::error::Result;
use tracing::debug;

use crate::cli::Cli;

pub mod command;
mod commands;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    debug!(elapsed = ?start.elapsed(), db = %cli.db.display(), "dispatch");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
