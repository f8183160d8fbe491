//! Mini LRU - A bounded in-memory cache with LRU eviction
//!
//! The core is [`cache::LruCache`], a thread-safe cache that keeps at most
//! `capacity` entries and tracks hit-rate statistics. The remaining modules
//! wrap it in a small HTTP service.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{LruCache, Stats};
pub use config::Config;
pub use tasks::spawn_stats_reporter;
