//! Cache Store Module
//!
//! Unsynchronized cache engine: a key index over an arena-backed recency list.
//! [`LruCache`](crate::cache::LruCache) wraps this in a mutex for shared use.

use std::collections::HashMap;

use tracing::trace;

use crate::cache::{CacheEntry, NodeHandle, RecencyList, Stats};

// == Cache Store ==
/// Bounded key-value store with least-recently-used eviction.
///
/// The keys of `index` are always exactly the keys held in `list`, and
/// `list.len() <= capacity` after every public call.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key to node lookup
    index: HashMap<String, NodeHandle>,
    /// Entries ordered by recency
    list: RecencyList<V>,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Cumulative lookups
    requests: u64,
    /// Cumulative successful lookups
    hits: u64,
    /// Cumulative capacity evictions
    evictions: u64,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store holding at most `capacity` entries.
    ///
    /// A capacity of 0 is legal: every insert is evicted straight away.
    pub fn new(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            list: RecencyList::with_capacity(capacity),
            capacity,
            requests: 0,
            hits: 0,
            evictions: 0,
        }
    }

    // == Add ==
    /// Inserts `value` under `key` as the most recently used entry.
    ///
    /// An existing entry for `key` is removed first, so a replaced key loses
    /// its old position. Returns the key evicted to make room, if any.
    pub fn add(&mut self, key: String, value: V) -> Option<String> {
        self.delete(&key);

        let handle = self.list.push_front(CacheEntry::new(key.clone(), value));
        self.index.insert(key, handle);

        self.ensure_capacity()
    }

    // == Get ==
    /// Looks up `key`, promoting it to most recently used on a hit.
    ///
    /// Every call counts as a request, hit or miss.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        self.requests += 1;

        let handle = *self.index.get(key)?;
        self.hits += 1;
        self.list.move_to_front(handle);

        let entry = self.list.get_mut(handle)?;
        entry.touch();
        Some(&entry.value)
    }

    // == Contains ==
    /// Membership check. Leaves recency order and counters alone.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Delete ==
    /// Removes `key` if present. Returns whether anything was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        match self.index.remove(key) {
            Some(handle) => self.list.remove(handle).is_some(),
            None => false,
        }
    }

    // == Stats ==
    /// Returns a snapshot of current size and cumulative counters.
    pub fn stats(&self) -> Stats {
        Stats::new(
            self.list.len(),
            self.capacity,
            self.hits,
            self.requests,
            self.evictions,
        )
    }

    // == Keys By Recency ==
    /// Returns the live keys, most recently used first.
    pub fn keys_by_recency(&self) -> Vec<String> {
        self.list.iter().map(|entry| entry.key.clone()).collect()
    }

    /// Returns the last access time of `key` in Unix milliseconds.
    pub fn last_accessed(&self, key: &str) -> Option<u64> {
        let handle = *self.index.get(key)?;
        self.list.get(handle).map(|entry| entry.last_accessed)
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Ensure Capacity ==
    /// Evicts the back entry if the last insert overflowed capacity.
    ///
    /// An add grows the list by exactly one, so one eviction is enough.
    fn ensure_capacity(&mut self) -> Option<String> {
        if self.list.len() <= self.capacity {
            return None;
        }

        let evicted = self.list.pop_back()?;
        self.index.remove(&evicted.key);
        self.evictions += 1;
        trace!(key = %evicted.key, "evicted least recently used entry");
        Some(evicted.key)
    }
}
