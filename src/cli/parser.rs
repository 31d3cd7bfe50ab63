use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Workforce timesheets: shift overlaps, daily/weekly/running totals and pay, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (config file is neither read nor written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// View or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Open a new entry (employee clocks in)
    ClockIn {
        #[arg(long, short = 'e', help = "Employee id (default: config default_employee)")]
        employee: Option<String>,

        #[arg(long = "at", help = "HH:MM today, or a full ISO-8601 timestamp (default: now)")]
        at: Option<String>,

        #[arg(long = "tag", help = "Project tag")]
        tag: Option<String>,
    },

    /// Close the most recent open entry (employee clocks out)
    ClockOut {
        #[arg(long, short = 'e')]
        employee: Option<String>,

        #[arg(long = "at", help = "HH:MM today, or a full ISO-8601 timestamp (default: now)")]
        at: Option<String>,

        #[arg(long = "break", help = "Unpaid break in minutes")]
        break_minutes: Option<i64>,
    },

    /// Backfill a session manually
    Add {
        /// Date of the session (YYYY-MM-DD)
        date: String,

        #[arg(long, short = 'e')]
        employee: Option<String>,

        #[arg(long = "in", help = "Clock-in (HH:MM or ISO-8601)")]
        start: String,

        #[arg(long = "out", help = "Clock-out (HH:MM or ISO-8601); omit for an open entry")]
        end: Option<String>,

        #[arg(long = "break", help = "Unpaid break in minutes")]
        break_minutes: Option<i64>,

        #[arg(long = "tag", help = "Project tag")]
        tag: Option<String>,
    },

    /// Edit an existing entry; duration is recomputed
    Edit {
        /// Entry id
        id: String,

        #[arg(long = "in", help = "New clock-in (HH:MM on the entry's day, or ISO-8601)")]
        start: Option<String>,

        #[arg(long = "out", conflicts_with = "reopen", help = "New clock-out")]
        end: Option<String>,

        #[arg(long = "reopen", help = "Clear clock-out (entry becomes active again)")]
        reopen: bool,

        #[arg(long = "break", help = "Unpaid break in minutes")]
        break_minutes: Option<i64>,

        #[arg(long = "tag", conflicts_with = "clear_tag")]
        tag: Option<String>,

        #[arg(long = "clear-tag")]
        clear_tag: bool,
    },

    /// Delete an entry by id
    Del {
        /// Entry id
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Import entries from a JSON array of store records
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Daily, running and weekly totals with pay
    Report {
        #[arg(long, short = 'e')]
        employee: Option<String>,

        #[arg(long, conflicts_with = "period", help = "Any date inside the week to show")]
        week: Option<String>,

        #[arg(long, short = 'p', help = "Year/month/day or a custom range (A:B)")]
        period: Option<String>,

        #[arg(long, help = "Hourly rate override")]
        rate: Option<f64>,

        #[arg(long = "details", help = "List the entries of every day")]
        details: bool,
    },

    /// List overlapping shifts
    Conflicts {
        #[arg(long, short = 'e')]
        employee: Option<String>,

        #[arg(long, conflicts_with = "period")]
        week: Option<String>,

        #[arg(long, short = 'p')]
        period: Option<String>,
    },

    /// Export a report
    Export {
        #[arg(long, short = 'e')]
        employee: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, conflicts_with = "period")]
        week: Option<String>,

        #[arg(long, short = 'p')]
        period: Option<String>,

        #[arg(long)]
        rate: Option<f64>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
