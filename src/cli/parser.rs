use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for jornada
#[derive(Parser)]
#[command(
    name = "jornada",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconcile worked-hours balances and generate Portaria 671/2021 AFD/AEJ compliance files",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute daily worked-hours balances from a dataset file
    Balance {
        /// Dataset file (JSON: company, employees, events)
        dataset: std::path::PathBuf,

        /// Period start date (YYYY-MM-DD)
        #[arg(long = "from")]
        from: String,

        /// Period end date (YYYY-MM-DD, inclusive)
        #[arg(long = "to")]
        to: String,

        /// Restrict to a single employee id
        #[arg(long = "employee")]
        employee: Option<String>,
    },

    /// Classify punches against the anomaly rules
    Check {
        /// Dataset file (JSON: company, employees, events)
        dataset: std::path::PathBuf,

        /// Only print flagged punches
        #[arg(long = "flagged-only")]
        flagged_only: bool,
    },

    /// Generate compliance or report files for a period
    Export {
        /// Dataset file (JSON: company, employees, events)
        dataset: std::path::PathBuf,

        /// Output format
        #[arg(long = "format", value_enum)]
        format: ExportFormat,

        /// Period start date (YYYY-MM-DD)
        #[arg(long = "from")]
        from: String,

        /// Period end date (YYYY-MM-DD, inclusive)
        #[arg(long = "to")]
        to: String,

        /// Output directory (defaults to the configured one)
        #[arg(long = "out")]
        out: Option<std::path::PathBuf>,

        /// Override the configured REP identifier
        #[arg(long = "rep-id")]
        rep_id: Option<String>,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },
}
