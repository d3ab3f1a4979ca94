//! Storage configuration for the reservation store

use std::path::{Path, PathBuf};

/// Default storage file, relative to the working directory.
pub const DEFAULT_STORAGE_FILE: &str = "reservations.csv";

/// Where the store reads and writes its backing file.
///
/// Constructed once at startup and handed to the store, so the storage
/// location is explicit rather than a process-wide constant.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    storage_path: PathBuf,
}

impl StoreConfig {
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            storage_path: storage_path.into(),
        }
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new(DEFAULT_STORAGE_FILE)
    }
}
