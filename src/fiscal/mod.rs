//! Fiscal-year arithmetic: labels, windows and the selectable year range.

pub mod date_window;
pub mod fiscal_year;

pub use date_window::DateWindow;
pub use fiscal_year::{
    current_fiscal_year_label, enumerate_fiscal_years, fiscal_year_label, fiscal_year_window,
    selectable_fiscal_years, FiscalYear, FIRST_FISCAL_YEAR,
};
