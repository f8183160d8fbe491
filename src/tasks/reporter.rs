//! Stats Reporter Task
//!
//! Background task that periodically logs a cache statistics snapshot.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::cache::LruCache;

/// Spawns a background task that logs cache statistics at a fixed interval.
///
/// Taking a snapshot never changes the cache's counters or recency order,
/// so the reporter is invisible to hit-rate figures.
///
/// # Arguments
/// * `cache` - Shared reference to the cache
/// * `interval_secs` - Interval in seconds between log lines
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(LruCache::<String>::new(1000));
/// let reporter = spawn_stats_reporter(cache.clone(), 60);
/// // Later, during shutdown:
/// reporter.abort();
/// ```
pub fn spawn_stats_reporter<V>(cache: Arc<LruCache<V>>, interval_secs: u64) -> JoinHandle<()>
where
    V: Send + 'static,
{
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting stats reporter with interval of {} seconds",
            interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let stats = cache.stats();
            info!(
                size = stats.size,
                hits = stats.hits,
                requests = stats.requests,
                evictions = stats.evictions,
                "{}",
                stats
            );
        }
    })
}
