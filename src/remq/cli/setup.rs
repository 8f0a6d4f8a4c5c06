use clap::{Parser, Subcommand};
use remq::export::ExportFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "remq",
    bin_name = "remq",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Query reminder lists and reminders as JSON", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Snapshot file to read reminders from
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub store: Option<PathBuf>,

    /// Time zone for date-only values: local, utc, or an offset like +02:00
    #[arg(long, global = true, value_name = "ZONE", help_heading = "Options")]
    pub timezone: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true, help_heading = "Options")]
    pub pretty: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List reminder lists with their reminder counts
    Lists,

    /// List reminders, optionally filtered
    Reminders {
        /// Only reminders in this list (case-insensitive)
        #[arg(long, value_name = "NAME")]
        list: Option<String>,

        /// Only completed (true) or incomplete (false) reminders
        #[arg(long, value_name = "true|false")]
        completed: Option<bool>,

        /// Case-insensitive text to look for in title or notes
        #[arg(long, value_name = "TEXT")]
        search: Option<String>,

        /// Only reminders due at or before this date
        #[arg(long, value_name = "DATE")]
        due_before: Option<String>,

        /// Only reminders due at or after this date
        #[arg(long, value_name = "DATE")]
        due_after: Option<String>,
    },

    /// Show one reminder by full identifier or prefix
    Get {
        /// Identifier, raw identifier, or a prefix of it
        id: String,
    },

    /// Summary counts across all lists
    Stats,

    /// Incomplete reminders that are past due
    Overdue {
        /// Only reminders in this list (case-insensitive)
        #[arg(long, value_name = "NAME")]
        list: Option<String>,
    },

    /// Export reminders as JSON or CSV
    Export {
        /// Only reminders in this list (case-insensitive)
        #[arg(short, long, value_name = "NAME")]
        list: Option<String>,

        /// Only incomplete reminders
        #[arg(long)]
        incomplete: bool,

        /// Export format: json or csv
        #[arg(long, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(long, value_name = "PATH")]
        output_file: Option<PathBuf>,
    },

    /// Incomplete reminders due in the next few days
    Upcoming {
        /// How many days ahead to look
        #[arg(long, default_value_t = remq::api::DEFAULT_UPCOMING_DAYS)]
        days: u32,

        /// Only reminders in this list (case-insensitive)
        #[arg(long, value_name = "NAME")]
        list: Option<String>,
    },
}
