use crate::export::ExportFormat;
use crate::models::progress::{GainKind, Period};
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for osrsdiff
/// Reads player statistics and progress documents and reports levels, ETAs and gains
#[derive(Parser)]
#[command(
    name = "osrsdiff",
    version = env!("CARGO_PKG_VERSION"),
    about = "Player progress tracking: experience table, level ETAs and ranked gains",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config_file: Option<String>,

    /// Disable ANSI colors in tables
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing or unknown fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Experience table lookups
    Xp {
        #[arg(long, short, help = "Experience required for this level")]
        level: Option<u32>,

        #[arg(long, short, help = "Level reached with this much experience")]
        experience: Option<u64>,

        #[arg(long, help = "Print the full table for levels 1-99")]
        table: bool,
    },

    /// Show a player's skills and bosses
    Stats {
        /// Player statistics JSON file ('-' for stdin)
        file: String,
    },

    /// Estimate time to the next level and to 99
    Eta {
        /// Player statistics JSON file ('-' for stdin)
        file: String,

        #[arg(long, value_name = "FILE", help = "Progress analysis JSON file")]
        progress: String,

        #[arg(long, short, help = "Only this skill")]
        skill: Option<String>,

        #[arg(long, short, value_enum, help = "Window to take the daily rate from")]
        period: Option<Period>,
    },

    /// Rank the largest gains of a progress window
    Top {
        /// Progress analysis JSON file ('-' for stdin)
        file: String,

        #[arg(long, short, value_enum, default_value = "experience")]
        kind: GainKind,

        #[arg(long, short = 'n', help = "Number of rows (default from config)")]
        count: Option<usize>,

        #[arg(long, short, value_enum, help = "Window to rank")]
        period: Option<Period>,
    },

    /// Show a skill or boss timeline with day-over-day deltas
    Timeline {
        /// Timeline JSON file ('-' for stdin)
        file: String,

        #[arg(long, help = "The file holds a boss kill-count timeline")]
        boss: bool,
    },

    /// Export ranked gains
    Export {
        /// Progress analysis JSON file ('-' for stdin)
        input: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
        file: String,

        #[arg(long, short, value_enum, default_value = "experience")]
        kind: GainKind,

        #[arg(long, short = 'n')]
        count: Option<usize>,

        #[arg(long, short, value_enum)]
        period: Option<Period>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
