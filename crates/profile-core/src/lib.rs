//! Core date engine for the patient profile form logic.
//!
//! - **dates**: fixed-format calendar parsing, formatting, and whole
//!   elapsed-year arithmetic used by the reader, the validator, and the
//!   submission preparer.

pub mod dates;

pub use dates::{
    DateError, elapsed_years, format_display, format_iso, parse_display_date, parse_iso_date,
};
