//! Source-keyed cache of loaded observation tables.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use dashmap::DashMap;

use riskdash_core::{Dataset, LoadError};

use crate::csv_source::load_dataset;

/// Identity of a source file at one point in time.
///
/// Two probes of an unchanged file compare equal; rewriting the file changes
/// its modification time or length and therefore its key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceKey {
    /// Canonical path.
    pub path: PathBuf,
    /// Last modification time, where the platform reports one.
    pub modified: Option<SystemTime>,
    /// File length in bytes.
    pub len: u64,
}

impl SourceKey {
    /// Reads the current identity of `path`.
    pub fn probe(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let canonical = std::fs::canonicalize(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LoadError::not_found(path),
            _ => LoadError::io(path, e.to_string()),
        })?;
        let meta = std::fs::metadata(&canonical).map_err(|e| LoadError::io(path, e.to_string()))?;

        Ok(Self {
            path: canonical,
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }
}

struct CacheEntry {
    key: SourceKey,
    data: Arc<Dataset>,
}

/// Memoizes loaded tables per source.
///
/// Repeated [`get_or_load`](Self::get_or_load) calls for an unchanged file
/// return the same `Arc<Dataset>` without re-reading it. Entries are only
/// dropped by [`refresh`](Self::refresh), [`invalidate`](Self::invalidate) or
/// [`clear`](Self::clear). Safe to share between sessions behind an `Arc`.
#[derive(Default)]
pub struct ObservationCache {
    entries: DashMap<PathBuf, CacheEntry>,
}

impl ObservationCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached table for `path`, loading it if absent or if the
    /// file's identity changed since it was cached.
    pub fn get_or_load(&self, path: impl AsRef<Path>) -> Result<Arc<Dataset>, LoadError> {
        let key = SourceKey::probe(path)?;

        if let Some(entry) = self.entries.get(&key.path) {
            if entry.key == key {
                tracing::trace!(path = %key.path.display(), "Observation cache hit");
                return Ok(Arc::clone(&entry.data));
            }
        }

        self.load_into(key)
    }

    /// Drops any cached table for `path` and loads it again.
    pub fn refresh(&self, path: impl AsRef<Path>) -> Result<Arc<Dataset>, LoadError> {
        let key = SourceKey::probe(path)?;
        self.entries.remove(&key.path);
        tracing::info!(path = %key.path.display(), "Refreshing observation cache");
        self.load_into(key)
    }

    /// Drops the cached table for `path`. Returns true if one was cached.
    pub fn invalidate(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let canonical = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        self.entries.remove(&canonical).is_some()
    }

    /// Drops every cached table.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of cached sources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn load_into(&self, key: SourceKey) -> Result<Arc<Dataset>, LoadError> {
        let data = Arc::new(load_dataset(&key.path)?);
        tracing::info!(
            path = %key.path.display(),
            rows = data.len(),
            tickers = data.tickers().len(),
            "Loaded observation table"
        );

        self.entries.insert(
            key.path.clone(),
            CacheEntry {
                key,
                data: Arc::clone(&data),
            },
        );
        Ok(data)
    }
}
