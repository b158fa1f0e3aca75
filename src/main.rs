//! Timecache demo
//!
//! Walks the cache through its contract end to end: fills it past capacity,
//! observes the FIFO eviction, waits out a TTL and observes the expiry.

use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timecache::{CacheConfig, TimedCache};

/// Demo entry point.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Build a small cache (3 entries, 5 second sweep interval)
/// 3. Fill the cache and push it past capacity
/// 4. Wait past the TTL and observe lazy expiry
/// 5. Report statistics and stop the sweeper
#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timecache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting timecache demo");

    let config = CacheConfig::new(Duration::from_secs(5), 3);
    info!(
        "Configuration: max_size={}, cleanup_interval={:?}",
        config.max_size, config.cleanup_interval
    );

    let cache: TimedCache<String, String> =
        TimedCache::new(config).expect("demo configuration is valid");

    let ttl = Duration::from_secs(2);
    cache.put("key1".to_string(), "value1".to_string(), ttl).await;
    cache.put("key2".to_string(), "value2".to_string(), ttl).await;
    cache.put("key3".to_string(), "value3".to_string(), ttl).await;

    info!("get key1: {:?}", cache.get(&"key1".to_string()).await);

    // The cache is full; key1 is the oldest arrival and gets evicted
    cache.put("key4".to_string(), "value4".to_string(), ttl).await;

    info!(
        "get key1 after eviction: {:?}",
        cache.get(&"key1".to_string()).await
    );

    info!("Sleeping past the TTL...");
    tokio::time::sleep(Duration::from_secs(3)).await;

    info!(
        "get key2 after expiry: {:?}",
        cache.get(&"key2".to_string()).await
    );
    info!(
        "get key3 after expiry: {:?}",
        cache.get(&"key3".to_string()).await
    );

    let stats = cache.stats().await;
    info!(
        "Stats: hits={}, misses={}, evictions={}, expirations={}, entries={}",
        stats.hits, stats.misses, stats.evictions, stats.expirations, stats.total_entries
    );

    cache.stop().await;
    info!("Sweeper stopped, demo complete");
}
