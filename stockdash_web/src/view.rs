//! Pure view construction: one invocation per request, three inputs in,
//! a view model out. No hidden re-execution state.

use chrono::{NaiveDate, Utc};
use stockdash_lib::validation::{
    check_date_order, default_start_date, normalize_ticker, parse_date, DEFAULT_TICKER,
};
use stockdash_lib::{HistoryOutcome, HistoryRequest, PriceSeries};

/// The three user inputs after normalization and default-filling.
pub struct DashboardInputs {
    pub ticker: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DashboardInputs {
    /// Builds inputs from raw query parameters. Missing or unparseable
    /// parameters fall back to the defaults; a present-but-bogus ticker is
    /// kept as-is so the fetch stage surfaces it as unavailable.
    pub fn from_params(ticker: Option<&str>, start: Option<&str>, end: Option<&str>) -> Self {
        let ticker = normalize_ticker(ticker.unwrap_or(DEFAULT_TICKER));
        let start = start
            .and_then(|s| parse_date(s).ok())
            .unwrap_or_else(default_start_date);
        let end = end
            .and_then(|s| parse_date(s).ok())
            .unwrap_or_else(|| Utc::now().date_naive());
        Self { ticker, start, end }
    }

    pub fn request(&self) -> HistoryRequest {
        HistoryRequest::new(&self.ticker, self.start, self.end)
    }
}

/// Everything the page needs to render, already decided.
pub struct DashboardView {
    pub ticker: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub warning: Option<String>,
    pub content: Content,
}

pub enum Content {
    Data {
        header: String,
        series: PriceSeries,
    },
    Unavailable {
        message: String,
    },
}

/// Maps inputs and a fetch outcome to the view. Pure; unit-testable
/// without a server.
pub fn build_view(inputs: &DashboardInputs, outcome: &HistoryOutcome) -> DashboardView {
    let warning = check_date_order(inputs.start, inputs.end).map(|w| w.to_string());

    let content = match outcome.series() {
        Some(bars) => Content::Data {
            header: format!(
                "Showing data for {} from {} to {}",
                inputs.ticker, inputs.start, inputs.end
            ),
            series: bars.to_vec(),
        },
        None => Content::Unavailable {
            message: format!(
                "Unable to retrieve data for ticker symbol '{}'. Please check the symbol and try again.",
                inputs.ticker
            ),
        },
    };

    DashboardView {
        ticker: inputs.ticker.clone(),
        start: inputs.start,
        end: inputs.end,
        warning,
        content,
    }
}
