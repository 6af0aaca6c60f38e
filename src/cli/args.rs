use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::fiscal::FiscalYear;

/// Counts days spent abroad per April-to-March fiscal year.
#[derive(Debug, Parser)]
#[command(name = "residency_cli", version, about = "Residency day calculator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable coloured output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a JSON configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Evaluate as if today were this date (YYYY-MM-DD).
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the selectable fiscal years.
    Years,
    /// Count residency days for a fiscal year from a trip file.
    Report(ReportArgs),
    /// Check whether a new trip would be accepted.
    Check(CheckArgs),
}

#[derive(Debug, clap::Args)]
pub struct ReportArgs {
    /// JSON array of trips.
    #[arg(short, long)]
    pub trips: PathBuf,

    /// Fiscal year label such as 2024-2025; defaults to the current one.
    #[arg(long)]
    pub fy: Option<FiscalYear>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// JSON array of already recorded trips.
    #[arg(short, long)]
    pub trips: PathBuf,

    /// Departure date of the new trip.
    #[arg(long)]
    pub depart: NaiveDate,

    /// Return date of the new trip.
    #[arg(long = "return", conflicts_with = "ongoing")]
    pub return_date: Option<NaiveDate>,

    /// The new trip has not ended yet.
    #[arg(long)]
    pub ongoing: bool,
}
