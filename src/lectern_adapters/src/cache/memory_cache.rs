use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use dashmap::DashMap;
use lectern_core::{CacheBackend, CacheError};
use tokio::time::Instant;

use super::pattern::glob_matches;

/// Minimum spacing between full sweeps of expired entries.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
struct Entry {
    value: Vec<u8>,
    expires_at: Instant,
}

impl Entry {
    fn expired(&self, now: Instant) -> bool {
        self.expires_at <= now
    }
}

/// In-process cache used by tests and single-node setups.
///
/// Expiry is checked on read against the tokio clock, so tests can drive it
/// with `tokio::time::pause` and `advance`. Writes also sweep out entries that
/// expired without being read again, at most once per [`SWEEP_INTERVAL`].
#[derive(Debug, Default, Clone)]
pub struct MemoryCache {
    entries: Arc<DashMap<String, Entry>>,
    last_sweep: Arc<Mutex<Option<Instant>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn sweep_if_due(&self, now: Instant) {
        {
            let mut last_sweep = self.last_sweep.lock().unwrap_or_else(PoisonError::into_inner);
            if last_sweep.is_some_and(|at| now.duration_since(at) < SWEEP_INTERVAL) {
                return;
            }
            *last_sweep = Some(now);
        }

        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.expired(now));
        let swept = before.saturating_sub(self.entries.len());
        if swept > 0 {
            tracing::debug!(swept, "swept expired cache entries");
        }
    }

    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .iter()
            .filter(|entry| !entry.expired(now))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl CacheBackend for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let now = Instant::now();
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.expired(now) => return Ok(Some(entry.value.clone())),
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove_if(key, |_, entry| entry.expired(now));
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError> {
        let now = Instant::now();
        self.sweep_if_due(now);
        let entry = Entry {
            value,
            expires_at: now + ttl,
        };
        self.entries.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.remove(key);
        Ok(())
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<u64, CacheError> {
        let matching: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| glob_matches(pattern, entry.key()))
            .map(|entry| entry.key().clone())
            .collect();

        let mut removed = 0;
        for key in matching {
            if self.entries.remove(&key).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
