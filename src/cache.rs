//! In-memory TTL cache for FPL stats snapshots.
//!
//! Every scoring request needs the full bootstrap + fixtures payload; caching
//! it per feed URL keeps page loads from hammering the FPL API. Entries are
//! replaced wholesale, never patched.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::error::AppResult;
use crate::fpl::{FplClient, StatsSnapshot};

#[derive(Debug, Clone)]
struct CachedSnapshot {
    fetched_at: Instant,
    snapshot: Arc<StatsSnapshot>,
}

/// Feed base URL → last snapshot fetched from it.
#[derive(Debug)]
pub struct SnapshotCache {
    ttl: Duration,
    entries: DashMap<String, CachedSnapshot>,
    /// One gate per key so concurrent misses wait on a single fetch.
    fetching: DashMap<String, Arc<Mutex<()>>>,
}

impl SnapshotCache {
    pub fn new(ttl: Duration) -> Self {
        SnapshotCache {
            ttl,
            entries: DashMap::new(),
            fetching: DashMap::new(),
        }
    }

    /// Cached snapshot for `key` if it is younger than the TTL.
    pub fn get(&self, key: &str) -> Option<Arc<StatsSnapshot>> {
        let entry = self.entries.get(key)?;
        if entry.fetched_at.elapsed() < self.ttl {
            Some(entry.snapshot.clone())
        } else {
            None
        }
    }

    pub fn insert(&self, key: &str, snapshot: StatsSnapshot) -> Arc<StatsSnapshot> {
        let snapshot = Arc::new(snapshot);
        self.entries.insert(
            key.to_string(),
            CachedSnapshot {
                fetched_at: Instant::now(),
                snapshot: snapshot.clone(),
            },
        );
        snapshot
    }

    pub fn invalidate(&self, key: &str) {
        self.entries.remove(key);
    }

    /// Serve from cache, or fetch through `client` and remember the result.
    /// Concurrent misses on the same feed share one fetch. Failed fetches are
    /// not cached.
    pub async fn get_or_fetch(&self, client: &FplClient) -> AppResult<Arc<StatsSnapshot>> {
        let key = client.base_url();
        if let Some(hit) = self.get(key) {
            return Ok(hit);
        }

        let gate = self.fetching.entry(key.to_string()).or_default().clone();
        let _guard = gate.lock().await;
        // Filled by whoever held the gate before us.
        if let Some(hit) = self.get(key) {
            return Ok(hit);
        }

        let fresh = client.snapshot().await?;
        Ok(self.insert(key, fresh))
    }
}
