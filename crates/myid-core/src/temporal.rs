//! # Temporal Helpers: Two-Digit Years and `YYMMDD` Dates
//!
//! Calendar collaborator for the identification types. Wraps `chrono` so the
//! value-type crates only ever see four operations: read "today", build a
//! date, format it as `YYMMDD`, and parse it back.
//!
//! ## Century Inference
//!
//! A two-digit year `YY` strictly below the reference date's two-digit year
//! belongs to the current century (`20YY`); anything else belongs to the
//! previous one (`19YY`). With a reference date in 2024, `08` is 2008 and
//! `81` is 1981, while `24` itself is 1924.
//!
//! ## Round-Trip Guard
//!
//! [`parse_yymmdd`] rebuilds the date and formats it again. A calendar that
//! normalized `Feb 30` into `Mar 2` would fail the comparison, so the guard
//! holds regardless of how the underlying constructor treats overflow.

use chrono::{Datelike, NaiveDate, Utc};

/// `strftime` pattern for the six-digit birth date segment.
pub const YYMMDD_FORMAT: &str = "%y%m%d";

/// Source of the reference date used for century inference.
pub trait Clock {
    /// The current calendar date.
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock in UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date. Used for deterministic parsing and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Two-digit year of `date` (`2024-03-01` → `24`).
pub fn two_digit_year(date: NaiveDate) -> u32 {
    date.year().rem_euclid(100) as u32
}

/// Expand a two-digit year against the reference date.
pub fn expand_two_digit_year(yy: u32, today: NaiveDate) -> i32 {
    let century = if yy < two_digit_year(today) { 2000 } else { 1900 };
    century + yy as i32
}

/// Build a calendar date, rejecting impossible combinations.
pub fn try_make_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Format a date as `YYMMDD`.
pub fn format_yymmdd(date: NaiveDate) -> String {
    date.format(YYMMDD_FORMAT).to_string()
}

/// Parse six ASCII digits as a `YYMMDD` date, inferring the century from
/// `today`.
///
/// Returns `None` unless the digits name a real calendar date whose
/// re-formatted form is identical to the input.
pub fn parse_yymmdd(digits: &str, today: NaiveDate) -> Option<NaiveDate> {
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let yy: u32 = digits[0..2].parse().ok()?;
    let month: u32 = digits[2..4].parse().ok()?;
    let day: u32 = digits[4..6].parse().ok()?;

    let date = try_make_date(expand_two_digit_year(yy, today), month, day)?;
    (format_yymmdd(date) == digits).then_some(date)
}
