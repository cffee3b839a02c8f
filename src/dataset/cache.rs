//! Freshness-bounded cache of loaded stores.
//!
//! The first request for a source loads it; later requests within the TTL get
//! the same `Arc<RecordStore>`. Entries older than the TTL are reloaded on the
//! next request. Failed loads are never cached, so a fixed file is picked up on
//! the following request.
//!
//! Entries are keyed by canonical path, so `Tweets.csv` and `./Tweets.csv`
//! share one entry. A path that cannot be canonicalized is used as given.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};
use std::time::{Duration, Instant};

use log::debug;
use parking_lot::RwLock;

use crate::dataset::loader::DatasetLoader;
use crate::dataset::store::RecordStore;
use crate::error::Result;

/// Default freshness window: one hour.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

static GLOBAL_CACHE: LazyLock<StoreCache> = LazyLock::new(|| StoreCache::new(DEFAULT_TTL));

#[derive(Debug, Clone)]
struct CachedStore {
    store: Arc<RecordStore>,
    loaded_at: Instant,
}

/// Shared cache of record stores keyed by source path.
#[derive(Debug)]
pub struct StoreCache {
    ttl: RwLock<Duration>,
    entries: RwLock<HashMap<PathBuf, CachedStore>>,
}

impl StoreCache {
    pub fn new(ttl: Duration) -> Self {
        StoreCache {
            ttl: RwLock::new(ttl),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide cache, created on first use with [`DEFAULT_TTL`].
    pub fn global() -> &'static StoreCache {
        &GLOBAL_CACHE
    }

    pub fn ttl(&self) -> Duration {
        *self.ttl.read()
    }

    /// Change the freshness window. Existing entries are judged against the
    /// new window on their next access.
    pub fn set_ttl(&self, ttl: Duration) {
        *self.ttl.write() = ttl;
    }

    /// Return the cached store for `path`, loading it if absent or stale.
    pub fn get_or_load<P: AsRef<Path>>(
        &self,
        path: P,
        loader: &DatasetLoader,
    ) -> Result<Arc<RecordStore>> {
        self.get_or_load_with(path.as_ref(), |path| loader.load_path(path))
    }

    /// Like [`get_or_load`](Self::get_or_load) with a caller-supplied load function.
    pub fn get_or_load_with<F>(&self, path: &Path, load: F) -> Result<Arc<RecordStore>>
    where
        F: FnOnce(&Path) -> Result<RecordStore>,
    {
        let key = cache_key(path);
        if let Some(store) = self.fresh_entry(&key) {
            debug!("Store cache hit for {}", key.display());
            return Ok(store);
        }

        let mut entries = self.entries.write();
        // Another caller may have loaded it while we waited for the lock.
        if let Some(entry) = entries.get(&key) {
            if entry.loaded_at.elapsed() < self.ttl() {
                return Ok(Arc::clone(&entry.store));
            }
        }

        debug!("Store cache miss for {}", key.display());
        let store = Arc::new(load(path)?);
        entries.insert(
            key,
            CachedStore {
                store: Arc::clone(&store),
                loaded_at: Instant::now(),
            },
        );
        Ok(store)
    }

    /// Drop the entry for `path`, forcing a reload on next access.
    pub fn invalidate<P: AsRef<Path>>(&self, path: P) -> bool {
        self.entries.write().remove(&cache_key(path.as_ref())).is_some()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn fresh_entry(&self, key: &Path) -> Option<Arc<RecordStore>> {
        let ttl = self.ttl();
        let entries = self.entries.read();
        entries
            .get(key)
            .filter(|entry| entry.loaded_at.elapsed() < ttl)
            .map(|entry| Arc::clone(&entry.store))
    }
}

fn cache_key(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
