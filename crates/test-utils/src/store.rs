//! In-process archive fake.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use nexrad_common::{NexradError, NexradResult};
use storage::ArchiveStore;

/// [`ArchiveStore`] backed by a prefix map.
///
/// Records every listing and fetch, and the peak number of fetches running
/// at once. Fetched files contain the key bytes.
#[derive(Default)]
pub struct RecordingStore {
    listings: HashMap<String, Vec<String>>,
    failing_prefixes: HashSet<String>,
    failing_keys: HashSet<String>,
    fetch_delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    listed: Mutex<Vec<String>>,
    fetched: Mutex<Vec<String>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `keys` when `prefix` is listed.
    pub fn with_listing(mut self, prefix: &str, keys: Vec<String>) -> Self {
        self.listings.insert(prefix.to_string(), keys);
        self
    }

    /// Make listing `prefix` fail with a storage error.
    pub fn with_failing_prefix(mut self, prefix: &str) -> Self {
        self.failing_prefixes.insert(prefix.to_string());
        self
    }

    /// Make fetching `key` fail with a storage error.
    pub fn with_failing_key(mut self, key: &str) -> Self {
        self.failing_keys.insert(key.to_string());
        self
    }

    /// Hold each fetch open for `delay` so overlap can be observed.
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Prefixes listed so far, in call order.
    pub fn listed_prefixes(&self) -> Vec<String> {
        self.listed.lock().unwrap().clone()
    }

    /// Keys fetched so far, in completion order.
    pub fn fetched_keys(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArchiveStore for RecordingStore {
    async fn list_prefix(&self, prefix: &str) -> NexradResult<Vec<String>> {
        self.listed.lock().unwrap().push(prefix.to_string());

        if self.failing_prefixes.contains(prefix) {
            return Err(NexradError::StorageError(format!(
                "listing {} refused",
                prefix
            )));
        }

        Ok(self.listings.get(prefix).cloned().unwrap_or_default())
    }

    async fn fetch_to_file(&self, key: &str, dest: &Path) -> NexradResult<u64> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }

        let result = if self.failing_keys.contains(key) {
            Err(NexradError::StorageError(format!("fetch of {} refused", key)))
        } else {
            tokio::fs::write(dest, key.as_bytes())
                .await
                .map(|_| key.len() as u64)
                .map_err(NexradError::from)
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.fetched.lock().unwrap().push(key.to_string());
        result
    }
}
