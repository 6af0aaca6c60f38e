use colored::Colorize;
use std::fmt;

use crate::residency::{TripRow, TripStatus};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Section,
}

fn build_label(kind: MessageKind) -> (&'static str, &'static str) {
    match kind {
        MessageKind::Info => ("INFO", "[i]"),
        MessageKind::Success => ("SUCCESS", "[+]"),
        MessageKind::Warning => ("WARNING", "[!]"),
        MessageKind::Section => ("", ""),
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => {
            let (label, icon) = build_label(kind);
            format!("{label}: {icon} {text}")
        }
    };

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Disables ANSI styling for the rest of the process.
pub fn disable_color() {
    colored::control::set_override(false);
}

const TABLE_HEADERS: [&str; 3] = ["Departure", "Return", "Days in FY"];

/// Renders trip rows as a fixed-width table, one line per trip.
pub fn render_trip_table(rows: &[TripRow]) -> String {
    let cells: Vec<[String; 3]> = rows
        .iter()
        .map(|row| {
            let returned = match (row.status, row.return_date) {
                (TripStatus::Active, _) | (_, None) => "Active".to_string(),
                (TripStatus::Ended, Some(date)) => date.to_string(),
            };
            [
                row.departure.to_string(),
                returned,
                row.days_in_year.to_string(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(str::len);
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let header = format_line(&TABLE_HEADERS.map(String::from), &widths);
    out.push_str(&header.bold().to_string());
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 4));
    for line in &cells {
        out.push('\n');
        out.push_str(&format_line(line, &widths));
    }
    out
}

fn format_line(cells: &[String; 3], widths: &[usize; 3]) -> String {
    format!(
        "{:<w0$}  {:<w1$}  {:>w2$}",
        cells[0],
        cells[1],
        cells[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2]
    )
}
