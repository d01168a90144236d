//! Command trait and context for dispatching commands

use std::time::Instant;

use notereport_core::config::ReportSettings;
use notereport_core::db::Database;
use notereport_core::error::Result;

use crate::cli::{Cli, OutputFormat};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Open the database named by `--db`; it must already exist
    pub fn open_database(&self) -> Result<Database> {
        Database::open(&self.cli.db, false)
    }

    /// Settings from `--config`, or the default settings file if present
    pub fn settings(&self) -> Result<ReportSettings> {
        ReportSettings::load_or_default(self.cli.config.as_deref())
    }

    pub fn json(&self) -> bool {
        self.cli.format == OutputFormat::Json
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("notereport {}", env!("CARGO_PKG_VERSION"));
        println!("Run `notereport --help` for usage information.");
        Ok(())
    }
}
