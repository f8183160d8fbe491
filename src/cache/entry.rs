//! Cache Entry Module
//!
//! Defines the record held by every node of the recency list.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cached key-value pair plus its last access time.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The key this entry is indexed under
    pub key: String,
    /// The stored value, owned by the cache
    pub value: V,
    /// Last access timestamp (Unix milliseconds). Informational only.
    pub last_accessed: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(key: String, value: V) -> Self {
        Self {
            key,
            value,
            last_accessed: current_timestamp_ms(),
        }
    }

    // == Touch ==
    /// Refreshes the last access timestamp.
    pub fn touch(&mut self) {
        self.last_accessed = current_timestamp_ms();
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A clock set before the epoch reads as 0.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
