use crate::core::transfer::{CollectionName, ExportFormat};
use crate::models::{Channel, MarkType};
use clap::{Parser, Subcommand};

/// Command-line interface definition for taara-admin
#[derive(Parser)]
#[command(
    name = "taara-admin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Admin dashboard for a pet adoption and rescue organization (SQLite-backed)",
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
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Replace all data with a sample data set
    Seed,

    /// Show the dashboard (due items, calendar, events, donations, adoption queue)
    Dashboard,

    /// Manage adoption applications
    Adoption {
        #[command(subcommand)]
        action: AdoptionAction,
    },

    /// Manage rescue reports
    Rescue {
        #[command(subcommand)]
        action: RescueAction,
    },

    /// Manage donations
    Donation {
        #[command(subcommand)]
        action: DonationAction,
    },

    /// Manage events
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Manage dashboard due items
    Due {
        #[command(subcommand)]
        action: DueAction,
    },

    /// Calendar view and day marks
    Calendar {
        #[command(subcommand)]
        action: CalendarAction,
    },

    /// Adoption charts by year and by month
    Charts {
        #[arg(long, help = "Year for the monthly chart (default: current year)")]
        year: Option<i32>,
    },

    /// Export all data (JSON) or a single collection (CSV)
    Export {
        #[arg(long, value_name = "FILE", help = "Output file (default: taara-admin-data.json)")]
        file: Option<String>,

        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_enum, help = "Collection to export (required with --format csv)")]
        collection: Option<CollectionName>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Import a previously exported JSON file (keys present in the file replace the current data)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Manage the database (integrity checks, info, reset)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "reset", help = "Remove all stored data")]
        reset: bool,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum AdoptionAction {
    /// New adoption application (missing fields are asked interactively)
    Add {
        #[arg(long)]
        applicant: Option<String>,
        #[arg(long)]
        animal: Option<String>,
        #[arg(long, help = "Submission date (YYYY-MM-DD)")]
        date: Option<String>,
    },
    /// List applications
    List {
        #[arg(long, help = "all, pending, approved or rejected")]
        filter: Option<String>,
    },
    /// Approve an application
    Approve { id: String },
    /// Reject an application
    Reject { id: String },
    /// Delete an application
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum RescueAction {
    /// Report a rescue (created as urgent)
    Add {
        #[arg(long)]
        reporter: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long, help = "Date (YYYY-MM-DD)")]
        date: Option<String>,
    },
    /// List rescue reports
    List,
    /// Mark a rescue as in-progress
    Progress { id: String },
    /// Mark a rescue as resolved
    Resolve { id: String },
    /// Delete a rescue report
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum DonationAction {
    /// Record a donation
    Add {
        #[arg(long)]
        donor: Option<String>,
        #[arg(long, help = "Amount (> 0)")]
        amount: Option<String>,
        #[arg(long, value_enum)]
        channel: Option<Channel>,
        #[arg(long, help = "Date (YYYY-MM-DD)")]
        date: Option<String>,
    },
    /// List donations, newest first
    List,
    /// Delete a donation
    Delete { id: String },
    /// Delete all donations
    Clear {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
    /// Totals, count and months active
    Stats,
}

#[derive(Subcommand)]
pub enum EventAction {
    /// Create an event
    Add {
        #[arg(long)]
        title: Option<String>,
        #[arg(long, help = "Date (YYYY-MM-DD)")]
        date: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        desc: Option<String>,
    },
    /// Quick event (title and date only)
    Quick { title: String, date: String },
    /// Edit an event (unspecified fields are asked, current values as defaults)
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long, help = "Date (YYYY-MM-DD)")]
        date: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        desc: Option<String>,
    },
    /// Delete an event
    Delete { id: String },
    /// List events, soonest first
    List,
}

#[derive(Subcommand)]
pub enum DueAction {
    /// Add a due item
    Add { text: String },
    /// List due items
    List,
    /// Show the list with an item dimmed as done (not persisted)
    Done { id: String },
    /// Delete a due item
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Show the calendar (saved month, or --month)
    Show {
        #[arg(long, help = "Month to display (YYYY-MM)")]
        month: Option<String>,
    },
    /// Move to the previous month
    Prev,
    /// Move to the next month
    Next,
    /// Show the marks of a day
    Day { date: String },
    /// Add a mark to a day
    Mark {
        date: String,
        #[arg(value_enum)]
        kind: MarkType,
    },
    /// Remove the marks of a day matching exactly (date, type)
    Unmark {
        date: String,
        #[arg(value_enum)]
        kind: MarkType,
    },
}
