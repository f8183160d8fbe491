//! Cache Statistics Module
//!
//! Read-only snapshot of cache utilization and lookup performance.

use std::fmt;

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time view of a cache's size and cumulative counters.
///
/// `usage` and `hit_rate` are derived when the snapshot is taken and are 0
/// whenever their denominator is 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    /// Current number of entries
    pub size: usize,
    /// Maximum number of entries
    pub capacity: usize,
    /// size / capacity
    pub usage: f64,
    /// Lookups that found their key
    pub hits: u64,
    /// All lookups, hits and misses alike
    pub requests: u64,
    /// hits / requests
    pub hit_rate: f64,
    /// Entries dropped to stay within capacity
    pub evictions: u64,
}

impl Stats {
    // == Constructor ==
    /// Builds a snapshot from raw counters, deriving both ratios.
    pub fn new(size: usize, capacity: usize, hits: u64, requests: u64, evictions: u64) -> Self {
        Self {
            size,
            capacity,
            usage: ratio(size as f64, capacity as f64),
            hits,
            requests,
            hit_rate: ratio(hits as f64, requests as f64),
            evictions,
        }
    }

    /// Lookups that did not find their key.
    pub fn misses(&self) -> u64 {
        self.requests - self.hits
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

// == Display ==
impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Caching {} of {} elements ({}%), fulfilled {} of {} requests ({}%)",
            self.size,
            self.capacity,
            (100.0 * self.usage) as u32,
            self.hits,
            self.requests,
            (100.0 * self.hit_rate) as u32,
        )
    }
}
