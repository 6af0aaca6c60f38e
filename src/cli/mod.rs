//! Non-interactive command line front end over the residency engine.

pub mod args;
pub mod commands;
pub mod output;

use clap::Parser;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::errors::ResidencyResult;
use crate::utils::init_tracing;

pub use args::{Cli, Command};

/// Parses process arguments and runs the selected command.
pub fn run_cli() -> ResidencyResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli, &SystemClock)
}

/// Runs an already parsed command line; `--today` takes precedence over `clock`.
pub fn run(cli: &Cli, clock: &dyn Clock) -> ResidencyResult<()> {
    if cli.no_color {
        output::disable_color();
    }
    let config = Config::load_or_default(cli.config.as_deref())?;
    let today = cli.today.unwrap_or_else(|| clock.today());

    match &cli.command {
        Command::Years => commands::handle_years(&config, today),
        Command::Report(args) => commands::handle_report(args, &config, today),
        Command::Check(args) => commands::handle_check(args, today),
    }
}
