//! CLI argument parsing for notereport
//!
//! Global flags: --db, --config, --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use notereport_core::model::ReportScope;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Human,
    /// JSON for machine consumption
    Json,
}

/// Notereport - notes reports for qualitative research databases
#[derive(Parser, Debug)]
#[command(name = "notereport")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the research database
    #[arg(long, global = true, env = "NOTEREPORT_DB", default_value = "notereport.db")]
    pub db: PathBuf,

    /// Settings file (defaults to notereport.toml in the config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug information to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "notereport_core=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty research database
    Init,

    /// Import libraries, collections and notes from a JSON or YAML file
    Load {
        /// Dataset file
        file: PathBuf,
    },

    /// Render the notes report
    Report(ReportArgs),

    /// Manage saved filter configurations
    Filter {
        #[command(subcommand)]
        command: FilterCommands,
    },

    /// Show row counts
    Stats,
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Which notes to report on
    #[arg(long, short, default_value = "root", value_parser = parse_scope)]
    pub scope: ReportScope,

    /// Only notes whose text contains this
    #[arg(long)]
    pub search: Option<String>,

    /// Report title
    #[arg(long, short)]
    pub title: Option<String>,

    /// Apply a saved filter configuration instead of the default one
    #[arg(long)]
    pub filter_config: Option<String>,

    /// Skip the default filter configuration
    #[arg(long, conflicts_with = "filter_config")]
    pub no_default_filter: bool,

    /// Include only these note numbers (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub only: Vec<i64>,

    /// Leave out these note numbers (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub exclude: Vec<i64>,

    /// Save the resulting selection under this name
    #[arg(long)]
    pub save_as: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum FilterCommands {
    /// List saved configurations for a scope
    List {
        #[arg(long, short, default_value = "root", value_parser = parse_scope)]
        scope: ReportScope,
    },

    /// Show the entries of a saved configuration
    Show {
        name: String,
        #[arg(long, short, default_value = "root", value_parser = parse_scope)]
        scope: ReportScope,
    },

    /// Delete a saved configuration
    Delete {
        name: String,
        #[arg(long, short, default_value = "root", value_parser = parse_scope)]
        scope: ReportScope,
    },
}

fn parse_scope(s: &str) -> Result<ReportScope, String> {
    s.parse::<ReportScope>().map_err(|_| {
        format!(
            "unknown scope '{}' (expected: {})",
            s,
            ReportScope::VALID_SCOPES.join(", ")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_defaults() {
        let cli = Cli::try_parse_from(["notereport", "report"]).unwrap();
        match cli.command {
            Some(Commands::Report(args)) => {
                assert_eq!(args.scope, ReportScope::Root);
                assert!(args.exclude.is_empty());
                assert!(!args.no_default_filter);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.db, PathBuf::from("notereport.db"));
        assert_eq!(cli.format, OutputFormat::Human);
    }

    #[test]
    fn test_report_repeated_excludes() {
        let cli = Cli::try_parse_from([
            "notereport", "report", "--scope", "clip", "--exclude", "3", "--exclude", "4",
        ])
        .unwrap();
        let Some(Commands::Report(args)) = cli.command else {
            panic!("expected report");
        };
        assert_eq!(args.scope, ReportScope::Clip);
        assert_eq!(args.exclude, vec![3, 4]);
    }

    #[test]
    fn test_bad_scope_rejected() {
        assert!(Cli::try_parse_from(["notereport", "report", "--scope", "folder"]).is_err());
    }

    #[test]
    fn test_filter_config_conflicts_with_no_default() {
        assert!(Cli::try_parse_from([
            "notereport",
            "report",
            "--filter-config",
            "A",
            "--no-default-filter"
        ])
        .is_err());
    }
}
