//! HTTP client for the Yahoo Finance chart endpoint.

use std::time::Duration;

use url::Url;

use crate::{
    query::HistoryQuery,
    types::{Bar, ChartResponse},
    user_agent::get_user_agent,
    Error,
};

/// HTTP client for the Yahoo Finance v8 chart endpoint.
///
/// Sends requests with browser-like headers and a randomized user agent to
/// avoid being blocked. Each request builds a fresh `reqwest::Client` with
/// a 30-second timeout.
pub struct Client {
    /// Base URL for the API. Defaults to `https://query1.finance.yahoo.com`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production chart endpoint.
    pub fn new() -> Self {
        Self {
            base_api_url: "https://query1.finance.yahoo.com".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
        }
    }

    fn get_url(&self, path: &str, query: &HistoryQuery) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(query.add_to_url(&url))
    }

    /// Fetches daily OHLCV bars for the queried symbol and date range.
    ///
    /// Returns the bars in chronological order, clamped to the query's
    /// inclusive range. An empty vector means the provider knows the symbol
    /// but has no trading days in the range.
    pub async fn get_history(&self, query: &HistoryQuery) -> Result<Vec<Bar>, Error> {
        let path = format!("/v8/finance/chart/{}", query.symbol);
        let url = self.get_url(&path, query)?;
        let client = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .header("accept-language", "en-US,en;q=0.9")
            .header("origin", "https://finance.yahoo.com")
            .header("referer", "https://finance.yahoo.com")
            .header("sec-fetch-dest", "empty")
            .header("sec-fetch-mode", "cors")
            .header("sec-fetch-site", "same-site")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get chart data: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        // 404 = symbol unknown to the provider; the body carries a chart
        // error object but the status alone is conclusive.
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::SymbolNotFound);
        }

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<ChartResponse>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse chart response: {} | body: {}", e, snippet);
            Error::MalformedResponse
        })?;

        if let Some(err) = parsed.chart.error {
            if err.code == "Not Found" {
                return Err(Error::SymbolNotFound);
            }
            tracing::error!("Provider error {}: {}", err.code, err.description);
            return Err(Error::Provider {
                code: err.code,
                description: err.description,
            });
        }

        let result = parsed
            .chart
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or(Error::MalformedResponse)?;

        Ok(result.bars_in_range(query.start, query.end))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_chart_json() -> serde_json::Value {
        serde_json::json!({
            "chart": {
                "result": [{
                    "meta": {
                        "currency": "USD",
                        "symbol": "GOOGL",
                        "exchangeName": "NMS",
                        "instrumentType": "EQUITY",
                        "dataGranularity": "1d"
                    },
                    "timestamp": [1262615400i64, 1262701800i64, 1262788200i64],
                    "indicators": {
                        "quote": [{
                            "open": [15.69, 15.70, 15.68],
                            "high": [15.71, 15.72, 15.70],
                            "low": [15.62, 15.64, 15.56],
                            "close": [15.68, 15.66, 15.61],
                            "volume": [78169752u64, 120067812u64, 159885104u64]
                        }]
                    }
                }],
                "error": null
            }
        })
    }

    fn query() -> HistoryQuery {
        HistoryQuery::new(
            "GOOGL",
            NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2010, 1, 10).unwrap(),
        )
    }

    #[tokio::test]
    async fn success_returns_bars_in_range() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/GOOGL"))
            .and(query_param("period1", "1262304000"))
            .and(query_param("period2", "1263168000"))
            .and(query_param("interval", "1d"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_chart_json()))
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri());
        let bars = client.get_history(&query()).await.unwrap();

        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2010, 1, 4).unwrap());
        assert_eq!(bars[0].close, 15.68);
        assert!(bars.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[tokio::test]
    async fn not_found_status_maps_to_symbol_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/GOOGL"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "chart": {
                    "result": null,
                    "error": {
                        "code": "Not Found",
                        "description": "No data found, symbol may be delisted"
                    }
                }
            })))
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri());
        let result = client.get_history(&query()).await;

        assert!(matches!(result.unwrap_err(), Error::SymbolNotFound));
    }

    #[tokio::test]
    async fn chart_error_in_success_body_maps_to_symbol_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/GOOGL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "chart": {
                    "result": null,
                    "error": {
                        "code": "Not Found",
                        "description": "No data found, symbol may be delisted"
                    }
                }
            })))
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri());
        let result = client.get_history(&query()).await;

        assert!(matches!(result.unwrap_err(), Error::SymbolNotFound));
    }

    #[tokio::test]
    async fn other_chart_errors_map_to_provider() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/GOOGL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "chart": {
                    "result": null,
                    "error": {
                        "code": "Bad Request",
                        "description": "Invalid input - interval is not supported"
                    }
                }
            })))
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri());
        let result = client.get_history(&query()).await;

        match result.unwrap_err() {
            Error::Provider { code, .. } => assert_eq!(code, "Bad Request"),
            other => panic!("expected Provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn server_error_maps_to_http_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/GOOGL"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri());
        let result = client.get_history(&query()).await;

        match result.unwrap_err() {
            Error::HttpStatus { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("expected HttpStatus error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn garbage_body_maps_to_malformed_response() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/GOOGL"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri());
        let result = client.get_history(&query()).await;

        assert!(matches!(result.unwrap_err(), Error::MalformedResponse));
    }

    #[tokio::test]
    async fn envelope_without_result_or_error_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/GOOGL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "chart": { "result": null, "error": null }
            })))
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri());
        let result = client.get_history(&query()).await;

        assert!(matches!(result.unwrap_err(), Error::MalformedResponse));
    }

    #[test]
    fn truncate_body_leaves_short_bodies_alone() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_cuts_long_bodies() {
        let long = "x".repeat(5000);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() < long.len());
    }
}
