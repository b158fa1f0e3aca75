//! Timecache - A lightweight in-memory cache
//!
//! Provides per-entry TTL expiration, FIFO capacity eviction and a
//! background sweeper task.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{CacheStats, CacheStore, TimedCache};
pub use config::CacheConfig;
pub use error::CacheError;
pub use tasks::spawn_sweeper_task;
