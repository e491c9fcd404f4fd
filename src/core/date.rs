//! QIF date normalization
//!
//! QIF exporters disagree on date layout. [`normalize_date`] tries a fixed,
//! ordered list of layouts and re-renders the first valid match as
//! `MM-DD-YYYY`. Text matching none of them is returned unchanged.

use chrono::{Datelike, NaiveDate};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Output layout for every recognised date
pub const NORMALIZED_FORMAT: &str = "%m-%d-%Y";

/// One accepted input layout
///
/// `shape` pins down the exact character layout (the year must have four
/// digits); `format` is the chrono pattern that then validates the calendar
/// date.
struct DatePattern {
    shape: Regex,
    format: &'static str,
}

impl DatePattern {
    fn new(shape: &str, format: &'static str) -> Self {
        Self {
            shape: Regex::new(shape).expect("invalid date layout regex"),
            format,
        }
    }

    fn parse(&self, raw: &str) -> Option<NaiveDate> {
        if !self.shape.is_match(raw) {
            return None;
        }
        NaiveDate::parse_from_str(raw, self.format)
            .ok()
            // Year 0 is not a calendar year here
            .filter(|date| date.year() >= 1)
    }
}

/// Accepted layouts in trial order. New layouts are appended, never inserted.
static DATE_PATTERNS: LazyLock<[DatePattern; 3]> = LazyLock::new(|| {
    [
        // 01/05/2024, 1/5/2024
        DatePattern::new(r"^\d{1,2}/\d{1,2}/\d{4}$", "%m/%d/%Y"),
        // 01/05'2024
        DatePattern::new(r"^\d{1,2}/\d{1,2}'\d{4}$", "%m/%d'%Y"),
        // 20240105
        DatePattern::new(r"^\d{8}$", "%Y%m%d"),
    ]
});

/// Parse `raw` with the first matching layout
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_PATTERNS.iter().find_map(|pattern| pattern.parse(raw))
}

/// Render a parsed date as `MM-DD-YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format(NORMALIZED_FORMAT).to_string()
}

/// Normalize a raw QIF date to `MM-DD-YYYY`
///
/// Returns `raw` verbatim when no layout yields a valid calendar date.
///
/// # Examples
///
/// ```
/// use qif_convert::core::normalize_date;
///
/// assert_eq!(normalize_date("01/05'2024"), "01-05-2024");
/// assert_eq!(normalize_date("Jan-5-24"), "Jan-5-24");
/// ```
pub fn normalize_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => format_date(date),
        None => {
            debug!("Keeping unrecognised date '{}' as-is", raw);
            raw.to_string()
        }
    }
}
