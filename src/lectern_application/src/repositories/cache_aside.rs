use std::{future::Future, time::Duration};

use lectern_core::{SharedCache, StoreError};
use serde::{Serialize, de::DeserializeOwned};

/// TTLs and deadlines applied by every repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub entity_ttl: Duration,
    pub list_ttl: Duration,
    /// Hard bound on any single store or cache round trip.
    pub deadline: Duration,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            entity_ttl: Duration::from_secs(30 * 60),
            list_ttl: Duration::from_secs(10 * 60),
            deadline: Duration::from_secs(10),
        }
    }
}

/// Cache-aside access to the shared cache.
///
/// Cache failures never propagate: a failed or timed-out read is a miss, a
/// failed write or eviction is logged and dropped.
#[derive(Clone)]
pub struct CacheAside {
    cache: SharedCache,
    policy: CachePolicy,
}

impl CacheAside {
    pub fn new(cache: SharedCache, policy: CachePolicy) -> Self {
        Self { cache, policy }
    }

    pub fn policy(&self) -> &CachePolicy {
        &self.policy
    }

    pub async fn fetch<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = match tokio::time::timeout(self.policy.deadline, self.cache.get(key)).await {
            Ok(Ok(Some(bytes))) => bytes,
            Ok(Ok(None)) => {
                tracing::debug!(key = %key, "cache miss");
                return None;
            }
            Ok(Err(e)) => {
                tracing::warn!(key = %key, error = %e, "cache read failed, treating as miss");
                return None;
            }
            Err(_) => {
                tracing::warn!(key = %key, "cache read timed out, treating as miss");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => {
                tracing::debug!(key = %key, "cache hit");
                Some(value)
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "undecodable cache entry, treating as miss");
                None
            }
        }
    }

    pub async fn put<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) {
        let bytes = match serde_json::to_vec(value) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to encode cache entry");
                return;
            }
        };

        match tokio::time::timeout(self.policy.deadline, self.cache.set(key, bytes, ttl)).await {
            Ok(Ok(())) => tracing::debug!(key = %key, ttl_secs = ttl.as_secs(), "cache set"),
            Ok(Err(e)) => tracing::warn!(key = %key, error = %e, "cache write failed"),
            Err(_) => tracing::warn!(key = %key, "cache write timed out"),
        }
    }

    pub async fn put_entity<T: Serialize>(&self, key: &str, value: &T) {
        self.put(key, value, self.policy.entity_ttl).await;
    }

    pub async fn put_list<T: Serialize>(&self, key: &str, value: &T) {
        self.put(key, value, self.policy.list_ttl).await;
    }

    pub async fn evict(&self, key: &str) {
        match tokio::time::timeout(self.policy.deadline, self.cache.delete(key)).await {
            Ok(Ok(())) => tracing::debug!(key = %key, "cache evict"),
            Ok(Err(e)) => tracing::warn!(key = %key, error = %e, "cache eviction failed"),
            Err(_) => tracing::warn!(key = %key, "cache eviction timed out"),
        }
    }

    pub async fn evict_all(&self, keys: &[String]) {
        for key in keys {
            self.evict(key).await;
        }
    }

    pub async fn evict_matching(&self, pattern: &str) {
        match tokio::time::timeout(self.policy.deadline, self.cache.delete_pattern(pattern)).await
        {
            Ok(Ok(removed)) => tracing::debug!(pattern = %pattern, removed, "cache bulk evict"),
            Ok(Err(e)) => {
                tracing::warn!(pattern = %pattern, error = %e, "cache bulk eviction failed")
            }
            Err(_) => tracing::warn!(pattern = %pattern, "cache bulk eviction timed out"),
        }
    }

    /// Runs a store operation under the deadline. Overrunning it is `Unavailable`.
    pub async fn guard<T, F>(&self, operation: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        tokio::time::timeout(self.policy.deadline, operation)
            .await
            .map_err(|_| {
                StoreError::Unavailable(format!(
                    "store did not answer within {:?}",
                    self.policy.deadline
                ))
            })?
    }
}
