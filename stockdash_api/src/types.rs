//! Response types for the chart endpoint.
//!
//! The provider returns one result object per symbol, holding a timestamp
//! array and parallel per-field quote arrays. Days with a trading halt are
//! reported as nulls inside those arrays.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily OHLCV record, after conversion out of the parallel arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Top-level envelope: `{"chart": {"result": [...], "error": null}}`.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

/// Provider-side failure reported inside an HTTP 200 or 404 body.
#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    pub timestamp: Option<Vec<i64>>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    pub quote: Vec<QuoteBlock>,
}

/// Parallel arrays, one entry per timestamp. Individual entries may be null.
#[derive(Debug, Default, Deserialize)]
pub struct QuoteBlock {
    pub open: Option<Vec<Option<f64>>>,
    pub high: Option<Vec<Option<f64>>>,
    pub low: Option<Vec<Option<f64>>>,
    pub close: Option<Vec<Option<f64>>>,
    pub volume: Option<Vec<Option<u64>>>,
}

impl ChartResult {
    /// Zips the timestamp and quote arrays into [`Bar`]s.
    ///
    /// Rows with a null in any field are dropped, bars outside
    /// `[start, end]` are discarded, and the output is sorted by date.
    pub fn bars_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Bar> {
        let timestamps = match &self.timestamp {
            Some(ts) => ts,
            None => return Vec::new(),
        };
        let quote = match self.indicators.quote.first() {
            Some(q) => q,
            None => return Vec::new(),
        };

        let mut bars = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            let date = match chrono::DateTime::from_timestamp(ts, 0) {
                Some(dt) => dt.date_naive(),
                None => continue,
            };
            if date < start || date > end {
                continue;
            }
            let (Some(open), Some(high), Some(low), Some(close), Some(volume)) = (
                float_at(&quote.open, i),
                float_at(&quote.high, i),
                float_at(&quote.low, i),
                float_at(&quote.close, i),
                volume_at(&quote.volume, i),
            ) else {
                continue;
            };
            bars.push(Bar {
                date,
                open,
                high,
                low,
                close,
                volume,
            });
        }
        bars.sort_by_key(|b| b.date);
        bars
    }
}

fn float_at(values: &Option<Vec<Option<f64>>>, i: usize) -> Option<f64> {
    values.as_ref()?.get(i).copied().flatten()
}

fn volume_at(values: &Option<Vec<Option<u64>>>, i: usize) -> Option<u64> {
    values.as_ref()?.get(i).copied().flatten()
}
