//! Request and outcome types for history queries.

use chrono::NaiveDate;
use stockdash_api::types::Bar;

/// The three user inputs of a history query. Doubles as the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HistoryRequest {
    pub ticker: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl HistoryRequest {
    pub fn new(ticker: &str, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            ticker: ticker.to_string(),
            start,
            end,
        }
    }
}

/// Chronologically ordered daily bars, all within the requested range.
/// Never empty; an empty result is [`HistoryOutcome::Empty`] instead.
pub type PriceSeries = Vec<Bar>;

/// What a history fetch produced.
///
/// `Empty` and `Failed` are presented identically to the user; they stay
/// distinguishable here so the log stream can tell "no data" from a
/// provider fault.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryOutcome {
    Series(PriceSeries),
    Empty,
    Failed(String),
}

impl HistoryOutcome {
    /// The bars, when data is available.
    pub fn series(&self) -> Option<&[Bar]> {
        match self {
            HistoryOutcome::Series(bars) => Some(bars),
            _ => None,
        }
    }

    /// True for both faces of the "no data" sentinel.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, HistoryOutcome::Empty | HistoryOutcome::Failed(_))
    }
}
