use chrono::{Days, NaiveDate, NaiveTime};
use url::Url;

/// Query for the chart endpoint: a symbol, an inclusive date range, and a
/// bar interval.
///
/// The wire protocol treats `period2` as exclusive, so one day is added to
/// `end` during serialization to keep the caller-visible range inclusive.
pub struct HistoryQuery {
    pub symbol: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub interval: Interval,
}

impl HistoryQuery {
    pub fn new(symbol: &str, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            symbol: symbol.to_string(),
            start,
            end,
            interval: Interval::default(),
        }
    }

    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Appends this query's parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let period2 = self
            .end
            .checked_add_days(Days::new(1))
            .unwrap_or(self.end);
        url.query_pairs_mut()
            .append_pair("period1", &unix_midnight(self.start).to_string());
        url.query_pairs_mut()
            .append_pair("period2", &unix_midnight(period2).to_string());
        url.query_pairs_mut()
            .append_pair("interval", &self.interval.to_string());
        url
    }
}

/// Width of one bar. The provider accepts more granularities; only the
/// daily, weekly, and monthly codes are part of this client's contract.
#[derive(Clone, Copy, Default)]
pub enum Interval {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Interval::Daily => "1d",
                Interval::Weekly => "1wk",
                Interval::Monthly => "1mo",
            }
        )?;
        Ok(())
    }
}

fn unix_midnight(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}
