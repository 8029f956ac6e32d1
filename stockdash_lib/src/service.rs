//! Cached history fetching over the provider client.

use stockdash_api::types::Bar;
use stockdash_api::{Client, HistoryQuery};

use crate::cache::HistoryCache;
use crate::error::StockDashError;
use crate::history::{HistoryOutcome, HistoryRequest};

/// Fetches price history through an injected memoization cache.
///
/// Cache hits bypass the network entirely. A miss performs exactly one
/// provider call, with no retry and no rate limiting. Every provider fault
/// is collapsed into [`HistoryOutcome::Failed`] here and nowhere else, so
/// `fetch` itself never fails. All outcome kinds are memoized, sentinels
/// included.
pub struct HistoryService {
    inner: Client,
    cache: HistoryCache,
}

impl HistoryService {
    /// Creates a new service using the production provider URL.
    pub fn new(cache: HistoryCache) -> Self {
        Self {
            inner: Client::new(),
            cache,
        }
    }

    /// Creates a new service with a custom base URL. Used for testing.
    pub fn with_base_url(base_url: &str, cache: HistoryCache) -> Self {
        Self {
            inner: Client::with_base_url(base_url),
            cache,
        }
    }

    /// Returns the outcome for `request`, consulting the cache first.
    pub async fn fetch(&self, request: &HistoryRequest) -> HistoryOutcome {
        if let Some(cached) = self.cache.get(request) {
            tracing::debug!(
                "cache hit for {} {}..{}",
                request.ticker,
                request.start,
                request.end
            );
            return cached;
        }

        let outcome = match self.fetch_remote(request).await {
            Ok(bars) if bars.is_empty() => HistoryOutcome::Empty,
            Ok(bars) => HistoryOutcome::Series(bars),
            Err(e) => {
                tracing::warn!("history fetch for '{}' failed: {}", request.ticker, e);
                HistoryOutcome::Failed(e.to_string())
            }
        };

        self.cache.set(request.clone(), outcome.clone());
        outcome
    }

    async fn fetch_remote(&self, request: &HistoryRequest) -> Result<Vec<Bar>, StockDashError> {
        let query = HistoryQuery::new(&request.ticker, request.start, request.end);
        Ok(self.inner.get_history(&query).await?)
    }
}
