//! Calendar date parsing, formatting, and elapsed-year arithmetic.
//!
//! Two fixed formats exist in this system:
//!
//! - canonical (stored) form: `YYYY-MM-DD`
//! - display (form-field) form: `MM/DD/YYYY`, with `MM-DD-YYYY` also
//!   accepted on input
//!
//! Parsing works on explicit digit groups and checks calendar validity
//! (leap years, day-of-month bounds) through [`NaiveDate::from_ymd_opt`].
//! No locale-dependent parsing and no silent date rollover.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Errors that can occur when parsing a date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    /// The string does not match the expected digit-group layout.
    InvalidFormat,
    /// The components parsed but the date does not exist on the calendar
    /// (e.g. Feb 29 in a non-leap year, or an all-zero date).
    InvalidCalendarDate,
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "date does not match the expected format"),
            Self::InvalidCalendarDate => write!(f, "date does not exist on the calendar"),
        }
    }
}

impl std::error::Error for DateError {}

/// Parses a group of exactly `len` ASCII digits.
fn digit_group(part: &str, len: usize) -> Result<u32, DateError> {
    if part.len() != len || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::InvalidFormat);
    }
    part.parse().map_err(|_| DateError::InvalidFormat)
}

fn from_components(year: u32, month: u32, day: u32) -> Result<NaiveDate, DateError> {
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or(DateError::InvalidCalendarDate)
}

/// Parses a canonical `YYYY-MM-DD` date.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, DateError> {
    let mut parts = value.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(DateError::InvalidFormat);
    };
    from_components(
        digit_group(year, 4)?,
        digit_group(month, 2)?,
        digit_group(day, 2)?,
    )
}

/// Parses a display date: `MM/DD/YYYY` or `MM-DD-YYYY`.
///
/// The separator must be used consistently; mixed separators, stray
/// characters, or ISO-ordered input (`YYYY-MM-DD`) are format errors.
pub fn parse_display_date(value: &str) -> Result<NaiveDate, DateError> {
    let separator = if value.contains('/') { '/' } else { '-' };
    let mut parts = value.split(separator);
    let (Some(month), Some(day), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(DateError::InvalidFormat);
    };
    from_components(
        digit_group(year, 4)?,
        digit_group(month, 2)?,
        digit_group(day, 2)?,
    )
}

/// Formats a date in display form, `MM/DD/YYYY`.
pub fn format_display(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.month(), date.day(), date.year())
}

/// Formats a date in canonical form, `YYYY-MM-DD`.
pub fn format_iso(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Whole calendar years elapsed between `from` and `to`.
///
/// A year is credited only once the month-and-day anniversary of `from` has
/// been reached or passed in `to`'s year. Negative when `from` is after
/// `to`.
pub fn elapsed_years(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_rejects_display_order() {
        assert_eq!(parse_iso_date("05/01/1995"), Err(DateError::InvalidFormat));
        assert_eq!(parse_iso_date("05-01-1995"), Err(DateError::InvalidFormat));
    }

    #[test]
    fn display_rejects_iso_order() {
        assert_eq!(
            parse_display_date("2014-05-01"),
            Err(DateError::InvalidFormat)
        );
    }
}
