use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::errors::{ResidencyResult, ValidationError};
use crate::fiscal::{selectable_fiscal_years, FiscalYear};
use crate::residency::{trip_rows, ResidencySummary, TripRow};
use crate::trips::{validate_new_trip, TripDraft, TripLog};
use crate::utils::trip_file::load_drafts_from_file;

use super::args::{CheckArgs, ReportArgs};
use super::output;

#[derive(Debug, Serialize)]
struct ReportOutput {
    summary: ResidencySummary,
    trips: Vec<TripRow>,
}

pub fn handle_years(config: &Config, today: NaiveDate) -> ResidencyResult<()> {
    let current = FiscalYear::containing(today)?;
    output::section("Fiscal years");
    let years =
        selectable_fiscal_years(today, config.first_fiscal_year, config.forward_buffer_years);
    for year in years {
        let marker = if year == current { "*" } else { " " };
        println!("{marker} FY {year}");
    }
    Ok(())
}

pub fn handle_report(args: &ReportArgs, config: &Config, today: NaiveDate) -> ResidencyResult<()> {
    let drafts = load_drafts_from_file(&args.trips)?;
    let log = TripLog::from_drafts(&drafts, today)?;
    let fiscal_year = match args.fy {
        Some(fiscal_year) => fiscal_year,
        None => FiscalYear::containing(today)?,
    };
    info!(%fiscal_year, trips = log.len(), "building report");

    let summary = ResidencySummary::compute(
        log.trips(),
        fiscal_year,
        today,
        config.residency_threshold_days,
    );
    let rows = trip_rows(log.trips(), fiscal_year, today);

    if args.json {
        let report = ReportOutput {
            summary,
            trips: rows,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::section(format!("FY {fiscal_year}"));
    if rows.is_empty() {
        output::info("No trips recorded.");
    } else {
        println!("{}", output::render_trip_table(&rows));
    }
    println!();
    output::info(format!("Residency days: {}", summary.residency_days));
    output::info(format!("Days needed: {}", summary.days_needed));
    if summary.is_resident {
        output::success(format!("Considered resident for FY {fiscal_year}"));
    }
    Ok(())
}

pub fn handle_check(args: &CheckArgs, today: NaiveDate) -> ResidencyResult<()> {
    let drafts = load_drafts_from_file(&args.trips)?;
    let log = TripLog::from_drafts(&drafts, today)?;

    let candidate = TripDraft {
        departure: Some(args.depart),
        return_date: args.return_date,
        ongoing: args.ongoing,
    };
    let trip = match validate_new_trip(log.trips(), &candidate, today) {
        Ok(trip) => trip,
        Err(err @ (ValidationError::OverlapDetected | ValidationError::OngoingConflict)) => {
            if let Some(earliest) = log.earliest_departure(today) {
                output::warning(format!("Earliest non-overlapping departure is {earliest}"));
            }
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };
    match trip.return_date() {
        Some(returned) => output::success(format!(
            "Trip accepted: {} to {}",
            trip.departure, returned
        )),
        None => output::success(format!("Trip accepted: {} (ongoing)", trip.departure)),
    }
    Ok(())
}
