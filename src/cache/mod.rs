//! Cache Module
//!
//! Provides a bounded in-memory cache with LRU eviction and hit statistics.

mod entry;
mod list;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use list::{Iter, NodeHandle, RecencyList};
pub use lru::LruCache;
pub use stats::Stats;
pub use store::CacheStore;
