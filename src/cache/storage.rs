//! On-disk storage for cached documentation indices.
//!
//! One JSON record per language at a deterministic path derived solely from
//! the language tag. Existence of the record is the only freshness signal:
//! there is no TTL, no content hash, and no invalidation short of deleting
//! the file.

use anyhow::{Context, Result as AnyResult};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::docs::types::Index;
use crate::error::{DocdexError, Result};

/// File name suffix for per-language index records
const INDEX_FILE_SUFFIX: &str = "_index.json";

/// Directory name under the system temp dir used by default
const DEFAULT_CACHE_SUBDIR: &str = "docdex";

/// Manages the file system storage for cached documentation indices
#[derive(Debug, Clone)]
pub struct CacheStorage {
    cache_dir: PathBuf,
}

impl CacheStorage {
    /// Create a new cache storage instance.
    ///
    /// Defaults to a `docdex` directory inside the shared system temp area
    /// when no custom directory is given. The directory is created up front.
    pub fn new(custom_cache_dir: Option<PathBuf>) -> AnyResult<Self> {
        let cache_dir =
            custom_cache_dir.unwrap_or_else(|| env::temp_dir().join(DEFAULT_CACHE_SUBDIR));

        fs::create_dir_all(&cache_dir).with_context(|| {
            format!("Failed to create cache directory: {}", cache_dir.display())
        })?;

        Ok(Self { cache_dir })
    }

    /// Root directory holding the cache records
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Deterministic record path for a language tag
    pub fn index_path(&self, language: &str) -> PathBuf {
        self.cache_dir
            .join(format!("{}{INDEX_FILE_SUFFIX}", language.to_ascii_lowercase()))
    }

    /// Check whether a cache record exists for a language
    pub fn has_index(&self, language: &str) -> bool {
        self.index_path(language).exists()
    }

    /// Read and decode the cache record for a language.
    ///
    /// A record that exists but cannot be read or decoded is an error for
    /// the whole call; the caller must not fall back to a remote fetch.
    pub fn read_index(&self, language: &str) -> Result<Index> {
        let path = self.index_path(language);
        let data = fs::read(&path).map_err(|source| DocdexError::CacheRead {
            path: path.clone(),
            source,
        })?;
        serde_json::from_slice(&data).map_err(|source| DocdexError::CacheDecode { path, source })
    }

    /// Serialize an index and persist it as the record for a language.
    ///
    /// The record is written to a uniquely named temp file in the cache
    /// directory and renamed into place, so a concurrent writer for the same
    /// language can lose the race but never produce a torn record.
    pub fn write_index(&self, language: &str, index: &Index) -> AnyResult<()> {
        let path = self.index_path(language);
        let json = serde_json::to_vec(index).context("Failed to serialize index")?;

        let mut tmp = NamedTempFile::new_in(&self.cache_dir)
            .with_context(|| format!("Failed to create temp file in {}", self.cache_dir.display()))?;
        tmp.write_all(&json)
            .context("Failed to write index record")?;
        tmp.persist(&path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to persist index record: {}", path.display()))?;

        Ok(())
    }
}
