use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::types::{CacheKey, CacheStats, CachedHttpResponse};

/// LRU cache of raw HTTP response bodies with a single TTL.
///
/// Owned by the API context and shared between concurrent fetches. Entries
/// are only invalidated by expiry or eviction. Two in-flight requests for
/// the same key are not coalesced; the later write wins.
#[derive(Debug)]
pub struct HttpResponseCache {
    entries: RwLock<LruCache<CacheKey, CachedHttpResponse>>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl HttpResponseCache {
    /// Creates a cache holding at most `capacity` responses for `ttl` each.
    /// A zero TTL disables caching.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Caches a response body under `key`
    #[instrument(skip(self, data), fields(key = %key))]
    pub async fn put(&self, key: CacheKey, data: String) {
        if !self.is_enabled() {
            return;
        }

        debug!(
            "Caching HTTP response: key={}, data_size={}, ttl={:?}",
            key,
            data.len(),
            self.ttl
        );

        let cached = CachedHttpResponse::new(data, self.ttl);
        self.entries.write().await.put(key, cached);
    }

    /// Retrieves a cached response body if it's not expired
    #[instrument(skip(self), fields(key = %key))]
    pub async fn get(&self, key: &CacheKey) -> Option<String> {
        if !self.is_enabled() {
            return None;
        }

        let mut entries = self.entries.write().await;

        if let Some(cached_entry) = entries.get(key) {
            if !cached_entry.is_expired() {
                debug!(
                    "Cache hit for HTTP response: key={}, age={:?}",
                    key,
                    cached_entry.cached_at.elapsed()
                );
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Some(cached_entry.data.clone());
            }

            warn!(
                "Removing expired HTTP response cache entry: key={}, age={:?}, ttl={:?}",
                key,
                cached_entry.cached_at.elapsed(),
                cached_entry.ttl
            );
            entries.pop(key);
        } else {
            debug!("Cache miss for HTTP response: key={}", key);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Number of stored entries, expired ones included until they are looked up
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Clears all entries and resets the hit counters
    pub async fn clear(&self) {
        self.entries.write().await.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub async fn stats(&self) -> CacheStats {
        let entries = self.entries.read().await;
        CacheStats {
            entries: entries.len(),
            capacity: entries.cap().get(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_get_returns_body() {
        let cache = HttpResponseCache::new(10, Duration::from_secs(60));
        let key = CacheKey::get("https://api.example.com/standings/now");

        assert_eq!(cache.get(&key).await, None);
        cache.put(key.clone(), "{\"standings\":[]}".to_string()).await;
        assert_eq!(cache.get(&key).await.as_deref(), Some("{\"standings\":[]}"));

        let stats = cache.stats().await;
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.capacity, 10);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_disables_cache() {
        let cache = HttpResponseCache::new(10, Duration::ZERO);
        let key = CacheKey::get("https://api.example.com/x");

        cache.put(key.clone(), "{}".to_string()).await;
        assert!(!cache.is_enabled());
        assert!(cache.is_empty().await);
        assert_eq!(cache.get(&key).await, None);
    }

    #[tokio::test]
    async fn test_expired_entry_is_removed_on_lookup() {
        let cache = HttpResponseCache::new(10, Duration::from_millis(20));
        let key = CacheKey::get("https://api.example.com/roster/BOS/current");

        cache.put(key.clone(), "{}".to_string()).await;
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(cache.get(&key).await, None);
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn test_lru_eviction_keeps_recently_used() {
        let cache = HttpResponseCache::new(2, Duration::from_secs(60));
        let first = CacheKey::get("https://api.example.com/player/1/landing");
        let second = CacheKey::get("https://api.example.com/player/2/landing");
        let third = CacheKey::get("https://api.example.com/player/3/landing");

        cache.put(first.clone(), "1".to_string()).await;
        cache.put(second.clone(), "2".to_string()).await;
        // Touch the first entry so the second becomes least recently used
        assert!(cache.get(&first).await.is_some());
        cache.put(third.clone(), "3".to_string()).await;

        assert!(cache.get(&first).await.is_some());
        assert!(cache.get(&second).await.is_none());
        assert!(cache.get(&third).await.is_some());
    }

    #[tokio::test]
    async fn test_zero_capacity_falls_back_to_one_entry() {
        let cache = HttpResponseCache::new(0, Duration::from_secs(60));
        assert_eq!(cache.stats().await.capacity, 1);
    }

    #[tokio::test]
    async fn test_clear_resets_entries_and_counters() {
        let cache = HttpResponseCache::new(10, Duration::from_secs(60));
        let key = CacheKey::get("https://api.example.com/score/2024-01-15");
        cache.put(key.clone(), "{}".to_string()).await;
        let _ = cache.get(&key).await;

        cache.clear().await;
        assert_eq!(cache.stats().await, CacheStats {
            entries: 0,
            capacity: 10,
            hits: 0,
            misses: 0,
        });
    }
}
