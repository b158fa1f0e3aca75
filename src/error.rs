//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Errors surfaced by the cache.
///
/// Missing or expired keys are not errors: `get` reports absence as `None`.
/// The only failure the cache can produce is rejecting an invalid
/// configuration at construction time.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Configuration rejected at construction
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
