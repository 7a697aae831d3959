//! Calendar dates from the free-form date text of a transaction.
//!
//! Statement dates are kept verbatim on [`Transaction`](crate::Transaction);
//! only time-bucketed analysis needs a real date. Text without a year
//! (`Jan 5`) has no calendar date and yields `None`.

use chrono::{Month, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ISO: Regex = Regex::new(r"^(\d{4})[-/](\d{1,2})[-/](\d{1,2})$").unwrap();
    static ref NUMERIC: Regex = Regex::new(r"^(\d{1,2})[-/](\d{1,2})[-/](\d{4}|\d{2})$").unwrap();
    static ref DAY_MONTH_YEAR: Regex =
        Regex::new(r"(?i)^(\d{1,2})\s+([a-z]{3})[a-z]*\.?,?\s+(\d{4})$").unwrap();
    static ref MONTH_DAY_YEAR: Regex =
        Regex::new(r"(?i)^([a-z]{3})[a-z]*\.?\s+(\d{1,2}),?\s+(\d{4})$").unwrap();
}

/// Parse a statement date.
///
/// Numeric dates are read month first (`01/15/2024`) and day first only
/// when that is the sole valid reading (`15/01/2024`). Two-digit years are
/// in the 2000s.
pub fn parse_statement_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if let Some(caps) = ISO.captures(text) {
        return NaiveDate::from_ymd_opt(
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        );
    }

    if let Some(caps) = NUMERIC.captures(text) {
        let first: u32 = caps[1].parse().ok()?;
        let second: u32 = caps[2].parse().ok()?;
        let year = parse_year(&caps[3])?;
        return NaiveDate::from_ymd_opt(year, first, second)
            .or_else(|| NaiveDate::from_ymd_opt(year, second, first));
    }

    if let Some(caps) = DAY_MONTH_YEAR.captures(text) {
        let month = month_number(&caps[2])?;
        return NaiveDate::from_ymd_opt(caps[3].parse().ok()?, month, caps[1].parse().ok()?);
    }

    if let Some(caps) = MONTH_DAY_YEAR.captures(text) {
        let month = month_number(&caps[1])?;
        return NaiveDate::from_ymd_opt(caps[3].parse().ok()?, month, caps[2].parse().ok()?);
    }

    None
}

fn parse_year(s: &str) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    Some(if s.len() == 2 { 2000 + year } else { year })
}

fn month_number(abbrev: &str) -> Option<u32> {
    abbrev.parse::<Month>().ok().map(|m| m.number_from_month())
}
