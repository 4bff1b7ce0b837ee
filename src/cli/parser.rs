use crate::export::ExportFormat;
use crate::models::report_format::ReportFormat;
use clap::{ArgAction, Args, Parser, Subcommand};

/// Command-line interface definition for crewroster
/// Imports crew roster reports into a local SQLite activity store
#[derive(Parser)]
#[command(
    name = "crewroster",
    version = env!("CARGO_PKG_VERSION"),
    about = "Import crew roster reports and query the resulting schedule activities",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Increase diagnostic output (-v info, -vv debug)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Query filters shared by `list` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long = "from", value_name = "DD-MM-YYYY", help = "Only activities on or after this day")]
    pub from: Option<String>,

    #[arg(long = "to", value_name = "DD-MM-YYYY", help = "Only activities on or before this day")]
    pub to: Option<String>,

    #[arg(long = "location", value_name = "CODE", help = "Only activities at this airport (e.g. KRP)")]
    pub location: Option<String>,

    #[arg(
        long = "type",
        value_name = "TYPE",
        help = "Only activities of this type: DO, SBY, FLT, CI, CO, UNK"
    )]
    pub kind: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Inspect the database
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Parse a roster report and store its activities
    Parse {
        /// Report file to import
        file: String,

        #[arg(long, value_enum, help = "Report format (defaults to the configured one)")]
        format: Option<ReportFormat>,

        #[arg(long = "dry-run", help = "Parse and print without storing anything")]
        dry_run: bool,

        #[arg(long = "json", help = "Print the activities as JSON")]
        json: bool,
    },

    /// List stored activities
    List {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long = "json", help = "Print the activities as JSON")]
        json: bool,
    },

    /// Export stored activities
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
