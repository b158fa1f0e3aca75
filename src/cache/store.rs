//! Cache Store Module
//!
//! Cache engine combining HashMap storage with arrival-order tracking and
//! TTL expiration.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use crate::cache::{ArrivalQueue, CacheEntry, CacheStats};

// == Cache Store ==
/// Cache storage with FIFO eviction and per-entry TTL.
///
/// The store and its arrival queue are mutated together by every operation,
/// so any key present in the map has at least one queue occurrence. The
/// queue may additionally hold stale occurrences of keys that were
/// overwritten; queue consumers skip entries that no longer map into the
/// store.
///
/// The store itself is synchronous. Concurrent access goes through
/// [`TimedCache`](crate::TimedCache), which guards a store behind a single
/// lock so the map and queue can never be observed out of step.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Arrival-order tracker for eviction
    queue: ArrivalQueue<K>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_size: usize,
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new CacheStore with the specified capacity.
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries the cache can hold
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: HashMap::new(),
            queue: ArrivalQueue::new(),
            stats: CacheStats::new(),
            max_size,
        }
    }

    // == Put ==
    /// Stores a key-value pair with the given TTL.
    ///
    /// If the key already exists, the value and TTL are replaced and the key
    /// is recorded as a fresh arrival; its earlier queue occurrences remain
    /// and its oldest occurrence still decides when it is evicted.
    ///
    /// The capacity check runs before the insert applies, for overwrites
    /// too: a put against a full cache always evicts the oldest arrival,
    /// which may be the overwritten key itself or an unrelated key.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Time-to-live measured from this call
    pub fn put(&mut self, key: K, value: V, ttl: Duration) {
        if self.entries.len() >= self.max_size {
            self.evict_oldest();
        }

        self.entries.insert(key.clone(), CacheEntry::new(value, ttl));
        self.queue.record(key);

        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if present and not expired. An expired entry is
    /// removed from both the store and the queue as a side effect and
    /// reported as absent, so TTL is enforced precisely even between
    /// background sweeps. Absence is a normal outcome, never an error.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &K) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            Some(_) => {
                // Reap lazily; the sweeper may not have reached this entry
                self.entries.remove(key);
                self.queue.remove(key);
                self.stats.record_expiration();
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Remove ==
    /// Removes an entry by key.
    ///
    /// No-op if the key is absent; removal is idempotent.
    ///
    /// # Arguments
    /// * `key` - The key to remove
    pub fn remove(&mut self, key: &K) {
        if self.entries.remove(key).is_some() {
            self.queue.remove(key);
            self.stats.set_total_entries(self.entries.len());
        }
    }

    // == Clear ==
    /// Empties the store and the arrival queue.
    ///
    /// Configuration and statistics counters are untouched.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.queue.clear();
        self.stats.set_total_entries(0);
    }

    // == Evict Oldest ==
    /// Evicts the oldest arrival still present in the store.
    ///
    /// Queue heads whose key has already left the store (overwritten
    /// duplicates, lazily expired reads) are discarded until a live key
    /// turns up, keeping the capacity bound exact. No-op when the queue
    /// drains without a hit.
    fn evict_oldest(&mut self) {
        while let Some(oldest) = self.queue.pop_oldest() {
            if self.entries.remove(&oldest).is_some() {
                self.stats.record_eviction();
                break;
            }
        }
    }

    // == Remove Expired ==
    /// Removes all expired entries from the store and the queue.
    ///
    /// The clock is sampled once, so every entry in a pass is judged against
    /// the same instant. Returns the number of entries removed. Called by
    /// the background sweeper; `get` handles expiry lazily in between.
    pub fn remove_expired(&mut self) -> usize {
        let now = Instant::now();
        let expired_keys: Vec<K> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in &expired_keys {
            self.entries.remove(key);
            self.queue.remove(key);
            self.stats.record_expiration();
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Max Size ==
    /// Returns the configured capacity.
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}
