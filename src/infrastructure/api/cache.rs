//! In-memory LRU response cache.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use lru::LruCache;
use parking_lot::Mutex;
use serde_json::Value;
use tracing::trace;

/// Default maximum number of cached responses.
pub const DEFAULT_CACHE_SIZE: usize = 256;

/// In-memory LRU cache of decoded JSON responses, keyed by URL.
/// Shared by every session of one host.
pub struct MemoryCache {
    cache: Mutex<LruCache<String, Arc<Value>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryCache {
    /// Creates a new cache with the specified capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: Mutex::new(LruCache::new(cap)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns the cached value, promoting it in the LRU order.
    pub fn get(&self, key: &str) -> Option<Arc<Value>> {
        let found = self.cache.lock().get(key).cloned();
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(key, "Cache hit");
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            trace!(key, "Cache miss");
        }
        found
    }

    /// Stores a value, evicting the least recently used entry when full.
    pub fn insert(&self, key: impl Into<String>, value: Value) -> Arc<Value> {
        let value = Arc::new(value);
        if let Some((evicted, _)) = self.cache.lock().push(key.into(), value.clone()) {
            trace!(key = %evicted, "Displaced cache entry");
        }
        value
    }

    /// Returns the number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Returns true if the cache holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns cache statistics.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        CacheStats {
            hits,
            misses,
            hit_rate,
            size: self.len(),
        }
    }
}

/// Statistics about cache performance.
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Hit rate as a percentage.
    pub hit_rate: f64,
    /// Current number of cached responses.
    pub size: usize,
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cache: {} responses, {:.1}% hit rate ({} hits, {} misses)",
            self.size, self.hit_rate, self.hits, self.misses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hit_and_miss_counters() {
        let cache = MemoryCache::new(4);
        cache.insert("a", json!(1));

        assert!(cache.get("a").is_some());
        assert!(cache.get("b").is_none());

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.size, 1);
    }

    #[test]
    fn test_least_recently_used_evicted() {
        let cache = MemoryCache::new(2);
        cache.insert("a", json!("a"));
        cache.insert("b", json!("b"));
        let _ = cache.get("a");
        cache.insert("c", json!("c"));

        assert!(cache.get("a").is_some());
        assert!(cache.get("b").is_none());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_stats_display() {
        let cache = MemoryCache::new(4);
        cache.insert("a", json!(1));
        let _ = cache.get("a");
        let _ = cache.get("b");

        assert_eq!(
            cache.stats().to_string(),
            "Cache: 1 responses, 50.0% hit rate (1 hits, 1 misses)"
        );
    }

    #[test]
    fn test_zero_capacity_still_holds_one() {
        let cache = MemoryCache::new(0);
        cache.insert("a", json!(1));
        assert_eq!(cache.len(), 1);
    }
}
