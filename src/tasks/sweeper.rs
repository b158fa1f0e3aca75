//! TTL Sweeper Task
//!
//! Background task that periodically removes expired cache entries.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the background sweeper for a cache store.
///
/// The task sleeps for `interval`, wakes, and removes every entry whose
/// expiry instant has passed, repeating until a shutdown signal arrives.
/// The signal is raced against the sleep itself, so a stopping sweeper
/// exits promptly without completing a final sweep.
///
/// The sweep period is independent of any entry's TTL: an entry may outlive
/// its nominal expiry by up to one interval before the sweeper reaps it,
/// while reads enforce TTL precisely in the meantime.
///
/// # Arguments
/// * `store` - Shared cache state, also held by the owning cache handle
/// * `interval` - Time between sweep passes
/// * `shutdown` - Receiver side of the owner's shutdown channel
///
/// # Returns
/// The handle of the spawned task, awaited by
/// [`TimedCache::stop`](crate::TimedCache::stop) for deterministic teardown.
pub fn spawn_sweeper_task<K, V>(
    store: Arc<RwLock<CacheStore<K, V>>>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!("sweeper started with interval of {:?}", interval);

        loop {
            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                // Also fires when the sender is dropped
                _ = shutdown.changed() => {
                    info!("sweeper received shutdown signal, exiting");
                    break;
                }
            }

            let removed = {
                let mut store = store.write().await;
                store.remove_expired()
            };

            if removed > 0 {
                info!("sweep removed {} expired entries", removed);
            } else {
                debug!("sweep found no expired entries");
            }
        }
    })
}
