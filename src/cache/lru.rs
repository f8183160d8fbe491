//! LRU Cache Module
//!
//! Thread-safe handle around [`CacheStore`].
//!
//! The index, the recency list and the counters form one unit guarded by a
//! single mutex. Every operation takes the lock once and holds it for the
//! whole call, so check-remove-insert-evict in `add` can never interleave
//! with another caller.

use parking_lot::Mutex;

use crate::cache::{CacheStore, Stats};

// == LRU Cache ==
/// Bounded, concurrently usable key-value cache with LRU eviction.
///
/// Share it between threads or tasks with `Arc<LruCache<V>>`. No method
/// blocks on anything but the internal lock, and no caller code runs while
/// that lock is held.
#[derive(Debug)]
pub struct LruCache<V> {
    inner: Mutex<CacheStore<V>>,
}

impl<V> LruCache<V> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(CacheStore::new(capacity)),
        }
    }

    // == Add ==
    /// Stores `value` under `key`, replacing and repositioning any previous
    /// entry, then evicts the least recently used entry if over capacity.
    pub fn add(&self, key: impl Into<String>, value: V) {
        self.inner.lock().add(key.into(), value);
    }

    // == Contains ==
    /// Point-in-time membership hint. Does not affect recency or counters.
    ///
    /// The answer may be stale by the time the caller acts on it.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().contains(key)
    }

    // == Delete ==
    /// Removes `key`. Returns true iff an entry was removed.
    pub fn delete(&self, key: &str) -> bool {
        self.inner.lock().delete(key)
    }

    // == Stats ==
    pub fn stats(&self) -> Stats {
        self.inner.lock().stats()
    }

    /// Live keys, most recently used first.
    pub fn keys_by_recency(&self) -> Vec<String> {
        self.inner.lock().keys_by_recency()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }
}

impl<V: Clone> LruCache<V> {
    // == Get ==
    /// Returns a clone of the value for `key` and marks it most recently used.
    ///
    /// Counts a request whether or not the key is present.
    pub fn get(&self, key: &str) -> Option<V> {
        self.inner.lock().get(key).cloned()
    }
}
