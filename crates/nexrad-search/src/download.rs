//! Retrieve archive keys to a local directory with bounded concurrency.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{debug, error, info};

use nexrad_common::{NexradError, NexradResult};
use storage::ArchiveStore;

/// Concurrency used when none is configured.
pub const DEFAULT_MAX_CONCURRENT_DOWNLOADS: usize = 4;

/// Outcome of one download batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadReport {
    /// Intended local path of every key, in key order.
    pub paths: Vec<PathBuf>,
    pub succeeded: usize,
    /// Keys whose fetch failed.
    pub failed: Vec<String>,
}

/// Fetches keys to files with at most `max_concurrent` fetches in flight.
///
/// Failures are logged and counted. Nothing is retried and nothing is
/// cancelled once started.
pub struct DownloadScheduler {
    store: Arc<dyn ArchiveStore>,
    max_concurrent: usize,
}

impl DownloadScheduler {
    pub fn new(store: Arc<dyn ArchiveStore>, max_concurrent: usize) -> Self {
        Self {
            store,
            max_concurrent: max_concurrent.max(1),
        }
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Fetch every key into `dest` and return the intended paths in key order.
    ///
    /// Paths are returned whether or not their fetch succeeded.
    pub async fn download(&self, dest: &Path, keys: &[String]) -> NexradResult<Vec<PathBuf>> {
        Ok(self.run(dest, keys).await?.paths)
    }

    /// Like [`download`](Self::download), also reporting per-key outcomes.
    pub async fn run(&self, dest: &Path, keys: &[String]) -> NexradResult<DownloadReport> {
        let is_dir = tokio::fs::metadata(dest)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if !is_dir {
            error!(path = %dest.display(), "Download directory does not exist");
            return Err(NexradError::DownloadDirMissing(dest.display().to_string()));
        }

        let paths: Vec<PathBuf> = keys.iter().map(|key| dest.join(file_name(key))).collect();

        info!(
            count = keys.len(),
            max_concurrent = self.max_concurrent,
            dest = %dest.display(),
            "Starting downloads"
        );

        let results = stream::iter(keys.iter().zip(paths.iter()))
            .map(|(key, path)| {
                let store = self.store.clone();
                async move {
                    match store.fetch_to_file(key, path).await {
                        Ok(size) => {
                            debug!(key = %key, path = %path.display(), size, "Download complete");
                            metrics::counter!("nexrad_downloads_total", "status" => "success")
                                .increment(1);
                            metrics::counter!("nexrad_download_bytes_total").increment(size);
                            Ok(())
                        }
                        Err(e) => {
                            error!(key = %key, error = %e, "Download failed");
                            metrics::counter!("nexrad_downloads_total", "status" => "failure")
                                .increment(1);
                            Err(key.clone())
                        }
                    }
                }
            })
            .buffer_unordered(self.max_concurrent)
            .collect::<Vec<_>>()
            .await;

        let mut report = DownloadReport {
            paths,
            ..Default::default()
        };
        for result in results {
            match result {
                Ok(()) => report.succeeded += 1,
                Err(key) => report.failed.push(key),
            }
        }

        info!(
            success = report.succeeded,
            failed = report.failed.len(),
            "Downloads complete"
        );

        Ok(report)
    }
}

/// Local file name for a key: its last `/` segment.
pub fn file_name(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(
            file_name("2015/05/05/KIND/KIND20150505_050412_V06.gz"),
            "KIND20150505_050412_V06.gz"
        );
        assert_eq!(file_name("plain.gz"), "plain.gz");
    }

    #[test]
    fn test_concurrency_floor() {
        let store: Arc<dyn ArchiveStore> = Arc::new(test_utils::RecordingStore::new());
        assert_eq!(DownloadScheduler::new(store.clone(), 0).max_concurrent(), 1);
        assert_eq!(DownloadScheduler::new(store, 8).max_concurrent(), 8);
    }
}
