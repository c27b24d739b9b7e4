use crate::models::Currency;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ractivity
/// Monthly activity report and invoice estimate, stored in SQLite
#[derive(Parser)]
#[command(
    name = "ractivity",
    version = env!("CARGO_PKG_VERSION"),
    about = "A monthly activity report CLI: log days per scope and estimate what to invoice",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Override the storage namespace inside the database
    #[arg(global = true, long = "namespace", hide = true)]
    pub namespace: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the timesheet of a month
    List {
        #[arg(
            long,
            short,
            help = "Month to show: YYYY-MM, or MM for the current year (default: current month)"
        )]
        month: Option<String>,
    },

    /// Show the billing breakdown of a month
    Bill {
        #[arg(
            long,
            short,
            help = "Month to bill: YYYY-MM, or MM for the current year (default: current month)"
        )]
        month: Option<String>,
    },

    /// Add an empty activity line to a scope (creating the scope if needed)
    Add {
        /// Date of the activity (YYYY-MM-DD)
        date: String,

        #[arg(long, short, help = "Scope name (default: x)")]
        scope: Option<String>,
    },

    /// Delete an activity line; a scope without lines is removed
    Del {
        /// Date of the activity (YYYY-MM-DD)
        date: String,

        #[arg(long, short, help = "Scope name")]
        scope: String,

        #[arg(long, short, help = "Line number (1-based, as shown by `list`)")]
        line: usize,
    },

    /// Set the quantity (in days) of a scope
    Time {
        /// Date of the activity (YYYY-MM-DD)
        date: String,

        #[arg(long, short, help = "Scope name")]
        scope: String,

        /// Quantity in days; anything that is not a finite number counts as 0
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Rename a scope on a given day
    Rename {
        /// Date of the activity (YYYY-MM-DD)
        date: String,

        #[arg(long, short, help = "Current scope name")]
        scope: String,

        /// New scope name
        new_name: String,
    },

    /// Replace the text of an activity line
    Edit {
        /// Date of the activity (YYYY-MM-DD)
        date: String,

        #[arg(long, short, help = "Scope name")]
        scope: String,

        #[arg(long, short, help = "Line number (1-based, as shown by `list`)")]
        line: usize,

        /// New text of the line
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Show or change billing settings (daily rate, currency, taxes)
    Set {
        #[arg(
            long,
            allow_hyphen_values = true,
            help = "Daily rate; not a number resets it to the default"
        )]
        rate: Option<String>,

        #[arg(long = "clear-rate", conflicts_with = "rate", help = "Reset the daily rate")]
        clear_rate: bool,

        #[arg(long, value_enum, help = "Currency used for amounts")]
        currency: Option<Currency>,

        #[arg(long, help = "Apply the 20% tax (true/false)")]
        taxes: Option<bool>,
    },
}
