#![allow(dead_code)]

use std::io::Write;

use chrono::NaiveDate;
use residency_core::FiscalYear;
use tempfile::NamedTempFile;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

pub fn fiscal_year(start_year: i32) -> FiscalYear {
    FiscalYear::new(start_year).expect("representable fiscal year")
}

/// Writes `json` to a temporary file that lives as long as the returned guard.
pub fn trip_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp trip file");
    file.write_all(json.as_bytes()).expect("write temp trip file");
    file
}
