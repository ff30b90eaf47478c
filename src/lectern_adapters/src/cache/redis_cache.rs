use std::time::Duration;

use lectern_core::{CacheBackend, CacheError};
use redis::{AsyncCommands, RedisError, aio::MultiplexedConnection};

const SCAN_BATCH: usize = 100;

/// Cache backed by a shared Redis instance.
///
/// The multiplexed connection is cheap to clone and safe to use from many
/// tasks at once, so no lock is held around it.
#[derive(Clone)]
pub struct RedisCache {
    conn: MultiplexedConnection,
}

impl RedisCache {
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self { conn }
    }
}

fn cache_error(error: RedisError) -> CacheError {
    if error.is_io_error() || error.is_timeout() || error.is_connection_dropped() {
        CacheError::Unavailable(error.to_string())
    } else {
        CacheError::Backend(error.to_string())
    }
}

#[async_trait::async_trait]
impl CacheBackend for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<Vec<u8>>>(key)
            .await
            .map_err(cache_error)
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        // SETEX rejects a zero expiry
        let seconds = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(key, value, seconds)
            .await
            .map_err(cache_error)
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await.map_err(cache_error)
    }

    #[tracing::instrument(name = "Deleting cache keys by pattern", skip(self))]
    async fn delete_pattern(&self, pattern: &str) -> Result<u64, CacheError> {
        let mut conn = self.conn.clone();
        let mut cursor: u64 = 0;
        let mut removed: u64 = 0;

        loop {
            let (next, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await
                .map_err(cache_error)?;

            if !keys.is_empty() {
                let deleted: u64 = conn.del(&keys).await.map_err(cache_error)?;
                removed += deleted;
            }

            if next == 0 {
                break;
            }
            cursor = next;
        }

        tracing::debug!(removed, "Evicted keys matching pattern");
        Ok(removed)
    }
}
