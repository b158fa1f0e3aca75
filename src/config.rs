//! Configuration Module
//!
//! Cache construction parameters, environment loading and validation.

use std::env;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Cache configuration parameters.
///
/// Values can also be loaded from environment variables with sensible
/// defaults. A configuration is checked by [`CacheConfig::validate`] before
/// any cache is built from it.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Interval between background sweeps
    pub cleanup_interval: Duration,
    /// Maximum number of entries the cache can hold
    pub max_size: usize,
}

impl CacheConfig {
    /// Creates a configuration from explicit values.
    pub fn new(cleanup_interval: Duration, max_size: usize) -> Self {
        Self {
            cleanup_interval,
            max_size,
        }
    }

    /// Creates a configuration by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CLEANUP_INTERVAL_MS` - Sweep interval in milliseconds (default: 1000)
    /// - `MAX_SIZE` - Maximum cache entries (default: 1000)
    pub fn from_env() -> Self {
        Self {
            cleanup_interval: Duration::from_millis(
                env::var("CLEANUP_INTERVAL_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(1000),
            ),
            max_size: env::var("MAX_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
        }
    }

    /// Checks the configuration for values that would produce a useless or
    /// misbehaving cache.
    ///
    /// A zero capacity makes every put evict its own entry; a zero sweep
    /// interval turns the sweeper into a busy loop. Both are rejected here
    /// rather than left to surface at runtime.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(CacheError::InvalidConfig(
                "max_size must be greater than zero".to_string(),
            ));
        }
        if self.cleanup_interval.is_zero() {
            return Err(CacheError::InvalidConfig(
                "cleanup_interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cleanup_interval: Duration::from_millis(1000),
            max_size: 1000,
        }
    }
}
