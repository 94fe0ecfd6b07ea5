//! Storage access for the NEXRAD Level II archive.
//!
//! Provides:
//! - The [`ArchiveStore`] capability used by key enumeration and downloads
//! - An `object_store`-backed implementation for the public S3 bucket

pub mod object_store;

pub use self::object_store::{
    ArchiveStore, ObjectStorage, ObjectStorageConfig, NEXRAD_BUCKET, NEXRAD_REGION,
};
