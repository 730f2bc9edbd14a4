//! Shared query cache
//!
//! SQLite-backed caching of list responses, keyed by resource + parameters.
//! Entries survive across invocations; a successful mutation marks every
//! entry of its resource stale so the next read refetches.
//!
//! On top of the storage this module layers the two in-process guarantees
//! the repository relies on:
//!
//! - **Coalescing** - concurrent fetches of an identical cache key share one
//!   network call via a per-key flight lock.
//! - **Stale-response discard** - each resource carries an epoch that every
//!   invalidation bumps; a fetch that was in flight across a bump skips its
//!   cache write, so a late response can never bury fresher data.

pub mod key;
pub mod storage;

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex as StdMutex;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex as AsyncMutex;

use crate::error::Result;

// Re-export main types
pub use key::cache_key;
pub use storage::{CacheStats, CacheStorage, ClearStats};

/// Cache TTL configuration per resource
///
/// Invalidation by mutation is the primary freshness mechanism; the TTLs
/// bound how long an entry can outlive changes made outside this client.
pub struct CacheTtl;

impl CacheTtl {
    // Catalog structure changes rarely
    pub const CATEGORIES: Duration = Duration::from_secs(60 * 60); // 1 hr
    pub const VARIATIONS: Duration = Duration::from_secs(60 * 60); // 1 hr
    pub const VARIATION_OPTIONS: Duration = Duration::from_secs(60 * 60); // 1 hr
    pub const CATEGORY_VARIATIONS: Duration = Duration::from_secs(60 * 60); // 1 hr

    // Merchandise moves faster
    pub const PRODUCTS: Duration = Duration::from_secs(10 * 60); // 10 min
    pub const PRODUCT_ITEMS: Duration = Duration::from_secs(10 * 60); // 10 min

    // Promotions are time-boxed and edited often
    pub const PROMOTIONS: Duration = Duration::from_secs(5 * 60); // 5 min
    pub const PROMOTION_LINKS: Duration = Duration::from_secs(5 * 60); // 5 min
}

/// Shared query cache with per-key coalescing and per-resource epochs.
///
/// Construct with `None` storage for `--no-cache`: every fetch then goes to
/// the network directly.
pub struct QueryCache {
    storage: Option<StdMutex<CacheStorage>>,
    flights: AsyncMutex<HashMap<String, Arc<AsyncMutex<()>>>>,
    epochs: StdMutex<HashMap<String, u64>>,
}

impl QueryCache {
    pub fn new(storage: Option<CacheStorage>) -> Self {
        Self {
            storage: storage.map(StdMutex::new),
            flights: AsyncMutex::new(HashMap::new()),
            epochs: StdMutex::new(HashMap::new()),
        }
    }

    /// Cache that never stores anything.
    pub fn disabled() -> Self {
        Self::new(None)
    }

    /// Read-through fetch for `key` under `resource`.
    ///
    /// Returns the cached value when present, unexpired and not stale;
    /// otherwise runs `load`, stores the result, and returns it. Concurrent
    /// callers with the same key wait for the first and read its result from
    /// the cache instead of dispatching their own call.
    pub async fn fetch<T, F, Fut>(
        &self,
        resource: &str,
        key: &str,
        ttl: Duration,
        load: F,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let Some(storage) = &self.storage else {
            return load().await;
        };

        if let Some(hit) = Self::read_fresh(storage, key) {
            log::debug!("Cache hit: {}", resource);
            return Ok(hit);
        }

        let flight = {
            let mut flights = self.flights.lock().await;
            Arc::clone(
                flights
                    .entry(key.to_string())
                    .or_insert_with(|| Arc::new(AsyncMutex::new(()))),
            )
        };
        let _guard = flight.lock().await;

        // A coalesced waiter lands here after the winner finished; its
        // result is in the cache now.
        if let Some(hit) = Self::read_fresh(storage, key) {
            log::debug!("Cache hit after coalesced fetch: {}", resource);
            return Ok(hit);
        }

        let epoch = self.epoch(resource);
        let value = load().await?;

        if self.epoch(resource) == epoch {
            match serde_json::to_vec(&value) {
                Ok(json) => {
                    if let Ok(guard) = storage.lock() {
                        if let Err(err) = guard.put(key, resource, &json, ttl) {
                            log::warn!("Failed to cache {}: {}", resource, err);
                        }
                    }
                }
                Err(err) => log::warn!("Failed to serialize {} for cache: {}", resource, err),
            }
        } else {
            // A mutation invalidated this resource while the fetch was in
            // flight; the response predates it.
            log::debug!("Discarding superseded response for {}", resource);
        }

        Ok(value)
    }

    /// Mark every entry of `resource` stale and bump its epoch.
    pub fn invalidate(&self, resource: &str) {
        if let Ok(mut epochs) = self.epochs.lock() {
            *epochs.entry(resource.to_string()).or_insert(0) += 1;
        }

        if let Some(storage) = &self.storage {
            if let Ok(guard) = storage.lock() {
                match guard.mark_stale(resource) {
                    Ok(count) => log::debug!("Invalidated {} cache entries for {}", count, resource),
                    Err(err) => log::warn!("Failed to invalidate {}: {}", resource, err),
                }
            }
        }
    }

    /// Remove every entry.
    pub fn clear_all(&self) -> Result<ClearStats> {
        match &self.storage {
            Some(storage) => {
                let guard = storage
                    .lock()
                    .map_err(|_| crate::error::Error::Other("cache lock poisoned".to_string()))?;
                Ok(guard.clear_all()?)
            }
            None => Ok(ClearStats { entries_removed: 0 }),
        }
    }

    /// Storage statistics, when a backing store is attached.
    pub fn stats(&self) -> Result<Option<CacheStats>> {
        match &self.storage {
            Some(storage) => {
                let guard = storage
                    .lock()
                    .map_err(|_| crate::error::Error::Other("cache lock poisoned".to_string()))?;
                Ok(Some(guard.stats()?))
            }
            None => Ok(None),
        }
    }

    fn read_fresh<T: DeserializeOwned>(storage: &StdMutex<CacheStorage>, key: &str) -> Option<T> {
        let guard = storage.lock().ok()?;
        guard
            .get_fresh(key)
            .ok()
            .flatten()
            .and_then(|data| serde_json::from_slice(&data).ok())
    }

    fn epoch(&self, resource: &str) -> u64 {
        self.epochs
            .lock()
            .map(|epochs| epochs.get(resource).copied().unwrap_or(0))
            .unwrap_or(0)
    }
}
