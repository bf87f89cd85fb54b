use crate::query::SortKey;
use clap::{Parser, Subcommand};

/// Command-line interface definition for jobtracker
/// CLI application to track job applications with SQLite
#[derive(Parser)]
#[command(
    name = "jobtracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple job application tracker: record, filter, sort, export and import your applications",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a new job application
    Add {
        /// Company name
        company: String,

        /// Job title
        title: String,

        #[arg(
            long,
            short,
            help = "Status: Applied, Interviewing, Offer or Rejected (default from config)"
        )]
        status: Option<String>,

        #[arg(long, short, help = "Application date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long, short, help = "Free-text notes")]
        notes: Option<String>,
    },

    /// Change fields of an existing application
    Edit {
        /// Application id (or a unique prefix of it)
        id: String,

        #[arg(long, help = "New company name")]
        company: Option<String>,

        #[arg(long, help = "New job title")]
        title: Option<String>,

        #[arg(long, short, help = "New status")]
        status: Option<String>,

        #[arg(long, short, help = "New application date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, short, help = "Replace the notes (use \"\" to clear)")]
        notes: Option<String>,
    },

    /// Show every field of one application
    Show {
        /// Application id (or a unique prefix of it)
        id: String,
    },

    /// Delete an application
    Del {
        /// Application id (or a unique prefix of it)
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List applications, filtered and sorted
    List {
        #[arg(long, short = 'q', help = "Search company or title (case-insensitive)")]
        search: Option<String>,

        #[arg(long, short, help = "Filter by status, or All")]
        status: Option<String>,

        #[arg(long, value_enum, help = "Sort order (default from config)")]
        sort: Option<SortKey>,
    },

    /// Export all applications as JSON
    Export {
        #[arg(
            long,
            value_name = "FILE",
            help = "Output file or directory (default ./jobtracker-data.json)"
        )]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Replace all applications with the content of a JSON export
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress the backup as .zip")]
        compress: bool,
    },
}
