//! Command trait implementation for the CLI command enum

use notereport_core::error::Result;

use super::command::{Command, CommandContext};
use crate::cli::{Commands, FilterCommands};
use crate::commands;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Init => commands::init::execute(ctx),
            Commands::Load { file } => commands::load::execute(ctx, file),
            Commands::Report(args) => commands::report::execute(ctx, args),
            Commands::Filter { command } => match command {
                FilterCommands::List { scope } => commands::filter::execute_list(ctx, *scope),
                FilterCommands::Show { name, scope } => {
                    commands::filter::execute_show(ctx, *scope, name)
                }
                FilterCommands::Delete { name, scope } => {
                    commands::filter::execute_delete(ctx, *scope, name)
                }
            },
            Commands::Stats => commands::stats::execute(ctx),
        }
    }
}
