use chrono::NaiveDate;
use std::fmt;

use crate::error::StockDashError;

/// Longest ticker the input field accepts; anything beyond is cut off.
pub const MAX_TICKER_LENGTH: usize = 10;

/// Ticker shown before the user types anything.
pub const DEFAULT_TICKER: &str = "GOOGL";

/// Start of the default date range.
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2010, 1, 1).expect("valid date")
}

/// Trim, uppercase, and cap a ticker at [`MAX_TICKER_LENGTH`] characters.
/// No further validation; unknown symbols surface as an empty fetch result.
pub fn normalize_ticker(input: &str) -> String {
    input
        .trim()
        .to_uppercase()
        .chars()
        .take(MAX_TICKER_LENGTH)
        .collect()
}

/// Parse a YYYY-MM-DD date string.
pub fn parse_date(input: &str) -> Result<NaiveDate, StockDashError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        StockDashError::InvalidInput(format!(
            "invalid date '{}'. Expected format: YYYY-MM-DD (e.g., 2010-01-01)",
            trimmed
        ))
    })
}

/// Advisory flag raised when the requested range is inverted. The offending
/// values are carried along unmodified; nothing blocks the fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeWarning {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: End date must fall after start date.")
    }
}

/// Returns a warning when `start` is after `end`.
pub fn check_date_order(start: NaiveDate, end: NaiveDate) -> Option<RangeWarning> {
    if start > end {
        Some(RangeWarning { start, end })
    } else {
        None
    }
}
