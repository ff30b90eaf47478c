use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache backend unavailable: {0}")]
    Unavailable(String),
    #[error("cache operation failed: {0}")]
    Backend(String),
}

/// Shared key/value cache with per-entry TTL.
///
/// Values are opaque bytes; encoding is the caller's concern.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError>;
    /// Deleting an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
    /// Removes every key matching a glob pattern (`*` wildcard). Returns the
    /// number of keys removed. Not atomic with concurrent writers.
    async fn delete_pattern(&self, pattern: &str) -> Result<u64, CacheError>;
}

pub type SharedCache = Arc<dyn CacheBackend>;
