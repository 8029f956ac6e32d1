//! In-memory memoization cache backed by `DashMap` for concurrent access.

use dashmap::DashMap;
use std::time::{Duration, Instant};

use crate::history::{HistoryOutcome, HistoryRequest};

/// A single cached outcome with its expiration and last-use times.
struct CacheEntry {
    outcome: HistoryOutcome,
    expires_at: Instant,
    last_used: Instant,
}

/// Thread-safe memoization map from request tuples to outcomes.
///
/// Entries expire after the configured time-to-live and are lazily evicted
/// on the next `get` for that key. Once the capacity bound is reached, the
/// least-recently-used entry is evicted to make room; `get` refreshes
/// recency. All outcome kinds are cached, sentinels included.
pub struct HistoryCache {
    store: DashMap<HistoryRequest, CacheEntry>,
    ttl: Duration,
    capacity: usize,
}

impl HistoryCache {
    /// Creates a new cache with the given time-to-live and capacity bound.
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            store: DashMap::new(),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Returns the cached outcome for `key`, or `None` if missing or expired.
    pub fn get(&self, key: &HistoryRequest) -> Option<HistoryOutcome> {
        let mut entry = self.store.get_mut(key)?;
        if Instant::now() > entry.expires_at {
            drop(entry);
            self.store.remove(key);
            return None;
        }
        entry.last_used = Instant::now();
        Some(entry.outcome.clone())
    }

    /// Inserts or overwrites a cache entry, evicting the least-recently-used
    /// entry first when the capacity bound is reached.
    pub fn set(&self, key: HistoryRequest, outcome: HistoryOutcome) {
        if !self.store.contains_key(&key) && self.store.len() >= self.capacity {
            self.evict_lru();
        }
        let now = Instant::now();
        self.store.insert(
            key,
            CacheEntry {
                outcome,
                expires_at: now + self.ttl,
                last_used: now,
            },
        );
    }

    /// Number of live entries, expired or not.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Removes all entries from the cache.
    pub fn clear(&self) {
        self.store.clear();
    }

    fn evict_lru(&self) {
        let oldest = self
            .store
            .iter()
            .min_by_key(|entry| entry.value().last_used)
            .map(|entry| entry.key().clone());
        if let Some(key) = oldest {
            self.store.remove(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request(ticker: &str) -> HistoryRequest {
        HistoryRequest::new(
            ticker,
            NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2010, 1, 10).unwrap(),
        )
    }

    fn pause() {
        // Instant granularity can be coarse; keep recency ordering distinct.
        std::thread::sleep(Duration::from_millis(5));
    }

    #[test]
    fn cache_set_and_get() {
        let cache = HistoryCache::new(Duration::from_secs(60), 16);
        cache.set(request("GOOGL"), HistoryOutcome::Empty);
        assert_eq!(cache.get(&request("GOOGL")), Some(HistoryOutcome::Empty));
    }

    #[test]
    fn cache_miss() {
        let cache = HistoryCache::new(Duration::from_secs(60), 16);
        assert_eq!(cache.get(&request("GOOGL")), None);
    }

    #[test]
    fn cache_expiration() {
        let cache = HistoryCache::new(Duration::from_millis(1), 16);
        cache.set(request("GOOGL"), HistoryOutcome::Empty);
        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(cache.get(&request("GOOGL")), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn cache_overwrite() {
        let cache = HistoryCache::new(Duration::from_secs(60), 16);
        cache.set(request("GOOGL"), HistoryOutcome::Empty);
        cache.set(
            request("GOOGL"),
            HistoryOutcome::Failed("timeout".to_string()),
        );
        assert_eq!(
            cache.get(&request("GOOGL")),
            Some(HistoryOutcome::Failed("timeout".to_string()))
        );
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cache_clear() {
        let cache = HistoryCache::new(Duration::from_secs(60), 16);
        cache.set(request("GOOGL"), HistoryOutcome::Empty);
        cache.set(request("AAPL"), HistoryOutcome::Empty);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn capacity_evicts_least_recently_used() {
        let cache = HistoryCache::new(Duration::from_secs(60), 2);
        cache.set(request("AAA"), HistoryOutcome::Empty);
        pause();
        cache.set(request("BBB"), HistoryOutcome::Empty);
        pause();
        cache.get(&request("AAA"));
        pause();
        cache.set(request("CCC"), HistoryOutcome::Empty);

        assert!(cache.get(&request("AAA")).is_some());
        assert!(cache.get(&request("BBB")).is_none());
        assert!(cache.get(&request("CCC")).is_some());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn overwriting_at_capacity_does_not_evict() {
        let cache = HistoryCache::new(Duration::from_secs(60), 2);
        cache.set(request("AAA"), HistoryOutcome::Empty);
        pause();
        cache.set(request("BBB"), HistoryOutcome::Empty);
        pause();
        cache.set(
            request("BBB"),
            HistoryOutcome::Failed("timeout".to_string()),
        );

        assert!(cache.get(&request("AAA")).is_some());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let cache = HistoryCache::new(Duration::from_secs(60), 0);
        cache.set(request("AAA"), HistoryOutcome::Empty);
        assert!(cache.get(&request("AAA")).is_some());
        pause();
        cache.set(request("BBB"), HistoryOutcome::Empty);
        assert!(cache.get(&request("AAA")).is_none());
        assert_eq!(cache.len(), 1);
    }
}
