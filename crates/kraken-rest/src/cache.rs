//! Bounded-freshness cache for reference data
//!
//! Assets and asset pairs change rarely but are expensive round trips, so the
//! client keeps the last unfiltered fetch of each and serves it while younger
//! than the configured lifetime. The cache is a pair of passive slots: the
//! client decides when to fetch, the slots only answer "is the stored value
//! still fresh" and swap entries wholesale.
//!
//! There is no single-flight: two tasks missing at the same time both fetch
//! and both store, last writer wins. The lock only covers the entry swap, so
//! a reader observes either the old entry or the new one, never a torn state.

use kraken_models::{Asset, AssetPair};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A stored value and the moment it was fetched
struct CacheEntry<T> {
    value: T,
    fetched_at: Instant,
}

/// TTL cache slots for the two reference-data resources
pub struct ReferenceCache {
    enabled: bool,
    ttl: Duration,
    assets: RwLock<Option<CacheEntry<Arc<Vec<Asset>>>>>,
    pairs: RwLock<Option<CacheEntry<Arc<Vec<AssetPair>>>>>,
}

impl ReferenceCache {
    /// Create cache slots; when `enabled` is false every read misses
    pub fn new(enabled: bool, ttl: Duration) -> Self {
        Self {
            enabled,
            ttl,
            assets: RwLock::new(None),
            pairs: RwLock::new(None),
        }
    }

    /// Whether reads can ever hit
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// The cached asset list, if fresh
    pub fn assets(&self) -> Option<Arc<Vec<Asset>>> {
        self.read(&self.assets)
    }

    /// Replace the asset entry
    pub fn store_assets(&self, value: Arc<Vec<Asset>>) {
        Self::store(&self.assets, value);
    }

    /// The cached asset-pair list, if fresh
    pub fn pairs(&self) -> Option<Arc<Vec<AssetPair>>> {
        self.read(&self.pairs)
    }

    /// Replace the asset-pair entry
    pub fn store_pairs(&self, value: Arc<Vec<AssetPair>>) {
        Self::store(&self.pairs, value);
    }

    fn read<T: Clone>(&self, slot: &RwLock<Option<CacheEntry<T>>>) -> Option<T> {
        if !self.enabled {
            return None;
        }
        slot.read()
            .as_ref()
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.value.clone())
    }

    // Storing is unconditional; only the read gate checks `enabled`.
    fn store<T>(slot: &RwLock<Option<CacheEntry<T>>>, value: T) {
        *slot.write() = Some(CacheEntry {
            value,
            fetched_at: Instant::now(),
        });
    }
}
