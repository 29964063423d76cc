//! Result caches backing the memoizer
//!
//! Both caches implement get-or-compute with the same guarantees:
//!
//! - A successful result is computed at most once per key and kept until the
//!   cache is dropped. There is no eviction and no TTL, so the cache grows
//!   with the number of distinct keys.
//! - A failed computation stores nothing. The error goes back to the caller
//!   and the next request for that key computes again.
//! - A panic inside the computation releases every lock it held. Neither
//!   cache is poisoned by it.
//!
//! They differ in what a caller waits for:
//!
//! - [`GlobalLockCache`]: one `parking_lot::Mutex` held across the
//!   computation. Every call waits for whoever holds the lock, whatever key
//!   they are working on.
//! - [`PerKeyCache`]: a `DashMap` of `OnceCell` slots. Only callers for the
//!   same key wait on each other.

use dashmap::DashMap;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tracing::trace;

use crate::config::{MemoConfig, MemoStrategy};

/// Cache guarded by a single lock
pub struct GlobalLockCache<K, V> {
    entries: Mutex<HashMap<K, V>>,
}

impl<K: Eq + Hash, V: Clone> GlobalLockCache<K, V> {
    /// Create an empty cache with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        GlobalLockCache {
            entries: Mutex::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Return the cached value for `key`, computing it on a miss
    ///
    /// The lock is held for the whole call, including `compute`.
    ///
    /// # Errors
    ///
    /// Returns whatever `compute` returns on failure; nothing is cached.
    pub fn get_or_try_insert_with<E, F>(&self, key: K, compute: F) -> Result<V, E>
    where
        K: Clone,
        F: FnOnce(K) -> Result<V, E>,
    {
        let mut entries = self.entries.lock();
        match entries.entry(key) {
            Entry::Occupied(entry) => {
                trace!("Memo cache hit");
                Ok(entry.get().clone())
            }
            Entry::Vacant(slot) => {
                trace!("Memo cache miss");
                let value = compute(slot.key().clone())?;
                Ok(slot.insert(value).clone())
            }
        }
    }

    /// Number of cached results
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cache with an independent slot per key
pub struct PerKeyCache<K: Eq + Hash, V> {
    slots: DashMap<K, Arc<OnceCell<V>>>,
}

impl<K: Eq + Hash + Clone, V: Clone> PerKeyCache<K, V> {
    /// Create an empty cache with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        PerKeyCache {
            slots: DashMap::with_capacity(capacity),
        }
    }

    /// Return the cached value for `key`, computing it on a miss
    ///
    /// The map shard lock is only held while the slot is looked up; the
    /// computation runs under the slot's own initialization lock.
    ///
    /// # Errors
    ///
    /// Returns whatever `compute` returns on failure. The key's empty slot is
    /// removed again, on error and on unwind alike.
    pub fn get_or_try_insert_with<E, F>(&self, key: K, compute: F) -> Result<V, E>
    where
        F: FnOnce(K) -> Result<V, E>,
    {
        let slot = Arc::clone(
            self.slots
                .entry(key.clone())
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .value(),
        );

        if let Some(value) = slot.get() {
            trace!("Memo cache hit");
            return Ok(value.clone());
        }

        // Runs on return and on unwind; only an empty, unshared slot is removed
        let guard = EmptySlotGuard {
            slots: &self.slots,
            key: key.clone(),
            slot,
        };
        let result = guard
            .slot
            .get_or_try_init(|| {
                trace!("Memo cache miss");
                compute(key)
            })
            .cloned();
        drop(guard);
        result
    }

    /// Number of cached results
    pub fn len(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.value().get().is_some())
            .count()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Drops a key's slot when the computation left it empty
///
/// The slot is removed only while the map and this guard hold the sole
/// references to it. A caller still waiting on the slot keeps it alive and
/// cleans it up through its own guard.
struct EmptySlotGuard<'a, K: Eq + Hash, V> {
    slots: &'a DashMap<K, Arc<OnceCell<V>>>,
    key: K,
    slot: Arc<OnceCell<V>>,
}

impl<K: Eq + Hash, V> Drop for EmptySlotGuard<'_, K, V> {
    fn drop(&mut self) {
        if self.slot.get().is_some() {
            return;
        }
        let removed = self.slots.remove_if(&self.key, |_, slot| {
            Arc::ptr_eq(slot, &self.slot) && slot.get().is_none() && Arc::strong_count(slot) == 2
        });
        if removed.is_some() {
            trace!("Removed empty memo slot after failed computation");
        }
    }
}

/// The cache a memoizer was configured with
pub(crate) enum CacheStore<K: Eq + Hash, V> {
    GlobalLock(GlobalLockCache<K, V>),
    PerKey(PerKeyCache<K, V>),
}

impl<K: Eq + Hash + Clone, V: Clone> CacheStore<K, V> {
    pub(crate) fn from_config(config: &MemoConfig) -> Self {
        match config.strategy {
            MemoStrategy::GlobalLock => {
                CacheStore::GlobalLock(GlobalLockCache::with_capacity(config.initial_capacity))
            }
            MemoStrategy::PerKey => {
                CacheStore::PerKey(PerKeyCache::with_capacity(config.initial_capacity))
            }
        }
    }

    pub(crate) fn strategy(&self) -> MemoStrategy {
        match self {
            CacheStore::GlobalLock(_) => MemoStrategy::GlobalLock,
            CacheStore::PerKey(_) => MemoStrategy::PerKey,
        }
    }

    pub(crate) fn get_or_try_insert_with<E, F>(&self, key: K, compute: F) -> Result<V, E>
    where
        F: FnOnce(K) -> Result<V, E>,
    {
        match self {
            CacheStore::GlobalLock(cache) => cache.get_or_try_insert_with(key, compute),
            CacheStore::PerKey(cache) => cache.get_or_try_insert_with(key, compute),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            CacheStore::GlobalLock(cache) => cache.len(),
            CacheStore::PerKey(cache) => cache.len(),
        }
    }
}
