//! Search facade tying matching, enumeration and download together.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use nexrad_common::{BoundingDomain, NexradResult};
use storage::{ArchiveStore, ObjectStorage};

use crate::config::SearchConfig;
use crate::download::{DownloadReport, DownloadScheduler};
use crate::keys::KeyEnumerator;
use crate::matcher::DomainStationMatcher;

/// Searches and retrieves NEXRAD Level II volumes.
pub struct NexradSearch {
    config: SearchConfig,
    matcher: DomainStationMatcher,
    keys: KeyEnumerator,
    downloads: DownloadScheduler,
}

impl NexradSearch {
    /// Search the archive configured in `config.storage`.
    pub fn new(config: SearchConfig) -> NexradResult<Self> {
        config.validate()?;
        let store = Arc::new(ObjectStorage::new(&config.storage)?);
        Ok(Self::build(store, config))
    }

    /// Search an arbitrary store. `config` is validated the same way as in
    /// [`new`](Self::new).
    pub fn with_store(store: Arc<dyn ArchiveStore>, config: SearchConfig) -> NexradResult<Self> {
        config.validate()?;
        Ok(Self::build(store, config))
    }

    fn build(store: Arc<dyn ArchiveStore>, config: SearchConfig) -> Self {
        let matcher =
            DomainStationMatcher::new(config.radius_mode, config.relevant_radius_coefficient);

        Self {
            keys: KeyEnumerator::new(store.clone()),
            downloads: DownloadScheduler::new(store, config.max_concurrent_downloads),
            matcher,
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Ids of the stations whose coverage reaches `domain`, in registry order.
    pub fn stations_in_domain(&self, domain: &BoundingDomain) -> NexradResult<Vec<&'static str>> {
        self.matcher.station_ids(domain)
    }

    /// Keys in `[start, end)` from every station relevant to `domain`.
    pub async fn find(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        domain: &BoundingDomain,
    ) -> NexradResult<Vec<String>> {
        let stations = self.stations_in_domain(domain)?;

        if stations.is_empty() {
            warn!(domain = %domain, "No stations found");
            return Ok(Vec::new());
        }

        if self.config.verbose {
            info!(count = stations.len(), stations = ?stations, "Found stations");
        }

        Ok(self.find_by_stations(start, end, stations.as_slice()).await)
    }

    /// Keys in `[start, end)` for the given station ids.
    ///
    /// Unknown ids are skipped with a warning.
    pub async fn find_by_stations<S: AsRef<str>>(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        station_ids: &[S],
    ) -> Vec<String> {
        let keys = self
            .keys
            .enumerate(start, end, station_ids, Utc::now())
            .await;

        if self.config.verbose {
            for key in &keys {
                info!(key = %key, "Found key");
            }
            info!(count = keys.len(), "Search complete");
        }

        keys
    }

    /// Fetch `keys` into `dest`, returning the intended path of each.
    pub async fn download(&self, dest: &Path, keys: &[String]) -> NexradResult<Vec<PathBuf>> {
        self.downloads.download(dest, keys).await
    }

    /// Like [`download`](Self::download), with per-key outcomes.
    pub async fn download_with_report(
        &self,
        dest: &Path,
        keys: &[String],
    ) -> NexradResult<DownloadReport> {
        self.downloads.run(dest, keys).await
    }
}
