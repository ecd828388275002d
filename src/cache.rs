//! Local cache layout for downloaded artifacts.
//!
//! A cached artifact is identified by a (cache name, file name) pair which
//! maps to exactly one path: `base_dir/cache_name/file_name`. The mapping is
//! pure; directories are created on demand.

use std::path::{Path, PathBuf};

use crate::error::{DatasetError, Result};

/// Maps cache keys to local paths under a base directory.
///
/// The base directory is injected at construction and validated eagerly, so
/// a misconfigured cache location fails up front rather than on first use.
#[derive(Debug, Clone)]
pub struct CacheStore {
    base_dir: PathBuf,
}

impl CacheStore {
    /// Create a store rooted at `base_dir`, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the directory cannot be created.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        std::fs::create_dir_all(&base_dir).map_err(|e| DatasetError::storage(&base_dir, e))?;
        Ok(Self { base_dir })
    }

    /// Default cache location: the per-user cache directory.
    #[must_use]
    pub fn default_dir() -> PathBuf {
        dirs::cache_dir().unwrap_or_else(|| PathBuf::from(".cache")).join("acopiar")
    }

    /// Root directory of this store.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Create `base_dir/cache_name` if absent and return it. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the directory cannot be created.
    pub fn ensure(&self, cache_name: &str) -> Result<PathBuf> {
        let dir = self.base_dir.join(cache_name);
        std::fs::create_dir_all(&dir).map_err(|e| DatasetError::storage(&dir, e))?;
        Ok(dir)
    }

    /// Resolve a cache key to its deterministic path. Pure, no I/O.
    #[must_use]
    pub fn resolve(&self, cache_name: &str, file_name: &str) -> PathBuf {
        self.base_dir.join(cache_name).join(file_name)
    }

    /// Whether `path` exists on disk.
    #[must_use]
    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
