use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::warn;

struct Slot<T> {
    value: Option<T>,
    fetched_at: Option<Instant>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            value: None,
            fetched_at: None,
        }
    }
}

/// TTL cache over asynchronous fetches, one entry per logical source key.
///
/// Concurrent `get`s for the same key share a single fetch: each key owns
/// an async mutex slot, the first caller fetches while holding it, and
/// later callers wait on the slot and read the freshly stored entry, so
/// the fetcher runs at most once per refresh. Entries are never evicted; the
/// map is bounded by the number of distinct keys requested in a session.
pub struct SeriesCache<T> {
    slots: Mutex<HashMap<String, Arc<tokio::sync::Mutex<Slot<T>>>>>,
}

impl<T: Clone> SeriesCache<T> {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached value for `key` while it is fresher than `ttl`,
    /// otherwise runs `fetcher` and stores its result. Fetch failures are
    /// swallowed here and cached as `None` with a fresh timestamp; the
    /// caller treats `None` as "not available now", not as an error.
    pub async fn get<F, Fut>(&self, key: &str, ttl: Duration, fetcher: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = eyre::Result<T>>,
    {
        let slot = {
            let mut slots = self.slots.lock();
            slots.entry(key.to_string()).or_default().clone()
        };

        let mut entry = slot.lock().await;
        if let Some(at) = entry.fetched_at {
            if at.elapsed() < ttl {
                return entry.value.clone();
            }
        }

        let result = fetcher().await;
        entry.fetched_at = Some(Instant::now());
        match result {
            Ok(value) => {
                entry.value = Some(value.clone());
                Some(value)
            }
            Err(err) => {
                warn!(key, error = %err, "fetch failed; caching empty result");
                entry.value = None;
                None
            }
        }
    }
}

impl<T: Clone> Default for SeriesCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
