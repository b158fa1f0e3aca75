//! Timed Cache Module
//!
//! Public cache handle: guards the store behind a single lock and owns the
//! background sweeper task.

use std::hash::Hash;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::tasks::spawn_sweeper_task;

// == Timed Cache ==
/// Thread-safe cache with per-entry TTL and FIFO capacity eviction.
///
/// Construction validates the configuration and immediately starts the
/// background sweeper, which removes expired entries once per configured
/// interval. `get` also enforces TTL lazily, so an expired entry is never
/// observable regardless of sweep timing.
///
/// All operations take `&self` and may run concurrently from any number of
/// tasks; the store and its arrival queue sit behind one lock, so every
/// operation observes them as a consistent pair and the capacity bound is
/// enforced exactly.
///
/// Share a cache between tasks by wrapping it in an [`Arc`].
#[derive(Debug)]
pub struct TimedCache<K, V> {
    /// Shared cache state, also held by the sweeper
    store: Arc<RwLock<CacheStore<K, V>>>,
    /// Shutdown signal for the sweeper
    shutdown: watch::Sender<bool>,
    /// Sweeper task handle, taken by the first `stop`
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl<K, V> TimedCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates a new cache and starts its background sweeper.
    ///
    /// Fails fast with [`CacheError::InvalidConfig`](crate::CacheError) if
    /// the configuration names a zero capacity or a zero sweep interval.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime, since the sweeper is
    /// spawned immediately.
    pub fn new(config: CacheConfig) -> Result<Self> {
        config.validate()?;

        let store = Arc::new(RwLock::new(CacheStore::new(config.max_size)));
        let (shutdown, shutdown_rx) = watch::channel(false);
        let sweeper = spawn_sweeper_task(store.clone(), config.cleanup_interval, shutdown_rx);

        debug!(
            max_size = config.max_size,
            cleanup_interval_ms = config.cleanup_interval.as_millis() as u64,
            "cache created"
        );

        Ok(Self {
            store,
            shutdown,
            sweeper: Mutex::new(Some(sweeper)),
        })
    }

    // == Put ==
    /// Stores a key-value pair with the given TTL.
    ///
    /// If the cache is at capacity, the oldest arrival is evicted first.
    /// Overwriting an existing key replaces its value and TTL but does not
    /// improve its standing against eviction.
    pub async fn put(&self, key: K, value: V, ttl: Duration) {
        self.store.write().await.put(key, value, ttl);
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` for a missing or expired key; an expired entry is
    /// removed as a side effect.
    pub async fn get(&self, key: &K) -> Option<V> {
        self.store.write().await.get(key)
    }

    // == Remove ==
    /// Removes an entry by key. No-op if the key is absent.
    pub async fn remove(&self, key: &K) {
        self.store.write().await.remove(key);
    }

    // == Clear ==
    /// Removes all entries. The sweeper keeps running.
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Stop ==
    /// Stops the background sweeper and waits for it to exit.
    ///
    /// The shutdown signal interrupts the sweeper mid-sleep, so this
    /// returns promptly. A stopped sweeper is never restarted; calling
    /// `stop` again is a no-op.
    pub async fn stop(&self) {
        let _ = self.shutdown.send(true);

        let handle = self
            .sweeper
            .lock()
            .expect("sweeper handle lock poisoned")
            .take();

        if let Some(handle) = handle {
            let _ = handle.await;
            debug!("sweeper stopped");
        }
    }
}

impl<K, V> Drop for TimedCache<K, V> {
    fn drop(&mut self) {
        // Backstop for caches dropped without `stop`: the sweeper must not
        // outlive the cache it sweeps.
        if let Ok(mut guard) = self.sweeper.lock() {
            if let Some(handle) = guard.take() {
                handle.abort();
            }
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;

    fn config(interval_ms: u64, max_size: usize) -> CacheConfig {
        CacheConfig::new(Duration::from_millis(interval_ms), max_size)
    }

    #[tokio::test]
    async fn test_cache_put_and_get() {
        let cache = TimedCache::new(config(1000, 100)).unwrap();

        cache
            .put("key1".to_string(), "value1".to_string(), Duration::from_secs(2))
            .await;

        assert_eq!(cache.get(&"key1".to_string()).await, Some("value1".to_string()));
        cache.stop().await;
    }

    #[tokio::test]
    async fn test_cache_rejects_zero_max_size() {
        let result: Result<TimedCache<String, String>> = TimedCache::new(config(1000, 0));
        assert!(matches!(result, Err(CacheError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn test_cache_rejects_zero_interval() {
        let result: Result<TimedCache<String, String>> = TimedCache::new(config(0, 100));
        assert!(matches!(result, Err(CacheError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn test_cache_stop_is_idempotent() {
        let cache: TimedCache<String, String> = TimedCache::new(config(1000, 100)).unwrap();

        cache.stop().await;
        cache.stop().await;
    }

    #[tokio::test]
    async fn test_cache_len_and_is_empty() {
        let cache = TimedCache::new(config(1000, 100)).unwrap();

        assert!(cache.is_empty().await);

        cache
            .put("key1".to_string(), "value1".to_string(), Duration::from_secs(2))
            .await;

        assert_eq!(cache.len().await, 1);
        assert!(!cache.is_empty().await);
        cache.stop().await;
    }
}
