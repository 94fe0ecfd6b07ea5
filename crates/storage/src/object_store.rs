//! Object storage interface for the NEXRAD archive (S3 compatible).

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;
use object_store::{aws::AmazonS3Builder, path::Path as ObjectPath, ObjectStore};
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument};

use nexrad_common::{NexradError, NexradResult};

/// Public bucket holding the NEXRAD Level II archive.
pub const NEXRAD_BUCKET: &str = "noaa-nexrad-level2";

/// Region of [`NEXRAD_BUCKET`].
pub const NEXRAD_REGION: &str = "us-east-1";

/// Read access to an archive of radar files.
///
/// This is the only surface the search and download code needs from a
/// backing store, so tests can substitute an in-process fake.
#[async_trait]
pub trait ArchiveStore: Send + Sync {
    /// List object names directly under `prefix`, with `/` as the delimiter.
    async fn list_prefix(&self, prefix: &str) -> NexradResult<Vec<String>>;

    /// Stream one object into `dest`, replacing any existing file.
    ///
    /// Returns the number of bytes written.
    async fn fetch_to_file(&self, key: &str, dest: &Path) -> NexradResult<u64>;
}

/// Configuration for object storage connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectStorageConfig {
    /// Bucket name
    pub bucket: String,
    /// AWS region
    pub region: String,
    /// Custom endpoint URL (S3-compatible mirrors)
    pub endpoint: Option<String>,
    /// Send unsigned requests (anonymous access to public buckets)
    pub skip_signature: bool,
    /// Allow plain HTTP endpoints
    pub allow_http: bool,
}

impl Default for ObjectStorageConfig {
    fn default() -> Self {
        Self {
            bucket: NEXRAD_BUCKET.to_string(),
            region: NEXRAD_REGION.to_string(),
            endpoint: None,
            skip_signature: true,
            allow_http: false,
        }
    }
}

/// Object storage client for the radar archive.
pub struct ObjectStorage {
    store: Arc<dyn ObjectStore>,
    bucket: String,
}

impl ObjectStorage {
    /// Create a new object storage client from config.
    pub fn new(config: &ObjectStorageConfig) -> NexradResult<Self> {
        let mut builder = AmazonS3Builder::new()
            .with_bucket_name(&config.bucket)
            .with_region(&config.region)
            .with_skip_signature(config.skip_signature);

        if let Some(endpoint) = &config.endpoint {
            builder = builder.with_endpoint(endpoint);
        }

        if config.allow_http {
            builder = builder.with_allow_http(true);
        }

        let store = builder
            .build()
            .map_err(|e| NexradError::StorageError(format!("Failed to create S3 client: {}", e)))?;

        Ok(Self {
            store: Arc::new(store),
            bucket: config.bucket.clone(),
        })
    }

    /// Wrap an existing store (e.g. `object_store::memory::InMemory`).
    pub fn from_store(store: Arc<dyn ObjectStore>, bucket: impl Into<String>) -> Self {
        Self {
            store,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ArchiveStore for ObjectStorage {
    #[instrument(skip(self), fields(bucket = %self.bucket))]
    async fn list_prefix(&self, prefix: &str) -> NexradResult<Vec<String>> {
        let prefix_path = ObjectPath::from(prefix);

        let listing = self
            .store
            .list_with_delimiter(Some(&prefix_path))
            .await
            .map_err(|e| NexradError::StorageError(format!("List of {} failed: {}", prefix, e)))?;

        let names: Vec<String> = listing
            .objects
            .into_iter()
            .map(|meta| meta.location.to_string())
            .collect();

        debug!(count = names.len(), "Listed objects");
        Ok(names)
    }

    #[instrument(skip(self, dest), fields(bucket = %self.bucket, dest = %dest.display()))]
    async fn fetch_to_file(&self, key: &str, dest: &Path) -> NexradResult<u64> {
        let location = ObjectPath::from(key);

        let result = match self.store.get(&location).await {
            Ok(result) => result,
            Err(object_store::Error::NotFound { .. }) => {
                return Err(NexradError::ObjectNotFound(key.to_string()))
            }
            Err(e) => {
                return Err(NexradError::StorageError(format!(
                    "Failed to read {}: {}",
                    key, e
                )))
            }
        };

        let mut file = tokio::fs::File::create(dest).await?;
        let mut stream = result.into_stream();
        let mut written = 0u64;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk
                .map_err(|e| NexradError::StorageError(format!("Failed to read bytes: {}", e)))?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }

        file.flush().await?;

        debug!(size = written, "Fetched object");
        Ok(written)
    }
}
