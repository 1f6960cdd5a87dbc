//! Shared weights with atomic snapshot support.
//!
//! Uses `arc-swap` for lock-free reads and whole-value replacement, so a
//! sort pass can never observe a half-applied administrative update.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use super::{ConfigError, SorterConfig};
use crate::queue::CauseWeights;

/// Handle to the process-wide cause weights.
///
/// Cloning is cheap and every clone refers to the same storage: the host
/// scheduler hands one clone to the sorter and keeps another for the
/// administrative surface. Readers never block; stores are single-writer
/// and persist to disk before publishing.
#[derive(Clone)]
pub struct WeightsHandle {
    inner: Arc<HandleInner>,
}

struct HandleInner {
    current: ArcSwap<CauseWeights>,
    path: PathBuf,
    /// Serializes store/reload so persist-then-publish stays atomic
    /// with respect to other writers.
    write_lock: Mutex<()>,
}

impl WeightsHandle {
    /// Load weights from `path` at startup. A missing file means all-zero
    /// defaults, not an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let weights = SorterConfig::load_or_default(&path)?.weights;

        Ok(Self {
            inner: Arc::new(HandleInner {
                current: ArcSwap::from_pointee(weights),
                path,
                write_lock: Mutex::new(()),
            }),
        })
    }

    /// One internally-consistent weights value, for use across an entire
    /// sort pass. Lock-free.
    #[inline]
    pub fn snapshot(&self) -> CauseWeights {
        *self.inner.current.load_full()
    }

    /// Persist new weights, then publish them to readers.
    ///
    /// If persisting fails, readers keep observing the previous value.
    pub fn store(&self, weights: CauseWeights) -> Result<(), ConfigError> {
        let _guard = self.inner.write_lock.lock();

        SorterConfig { weights }.save(&self.inner.path)?;
        self.inner.current.store(Arc::new(weights));
        Ok(())
    }

    /// Re-read the config file after an external edit.
    ///
    /// Returns `Ok(true)` if the weights changed, `Ok(false)` if unchanged.
    pub fn reload(&self) -> Result<bool, ConfigError> {
        let _guard = self.inner.write_lock.lock();

        let fresh = SorterConfig::load_or_default(&self.inner.path)?.weights;
        if fresh == self.snapshot() {
            return Ok(false);
        }

        self.inner.current.store(Arc::new(fresh));
        Ok(true)
    }

    /// Path of the backing config file.
    pub fn path(&self) -> &Path {
        &self.inner.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn handle_in(dir: &TempDir) -> WeightsHandle {
        WeightsHandle::load(dir.path().join("priosort.toml")).unwrap()
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let handle = handle_in(&dir);
        assert_eq!(handle.snapshot(), CauseWeights::default());
    }

    #[test]
    fn test_store_persists_before_publishing() {
        let dir = TempDir::new().unwrap();
        let handle = handle_in(&dir);

        handle.store(CauseWeights::new(10, 5, 1)).unwrap();
        assert_eq!(handle.snapshot(), CauseWeights::new(10, 5, 1));

        // A fresh handle sees the persisted value
        let reopened = handle_in(&dir);
        assert_eq!(reopened.snapshot(), CauseWeights::new(10, 5, 1));
    }

    #[test]
    fn test_clones_share_storage() {
        let dir = TempDir::new().unwrap();
        let handle = handle_in(&dir);
        let clone = handle.clone();

        handle.store(CauseWeights::new(0, 7, 0)).unwrap();
        assert_eq!(clone.snapshot(), CauseWeights::new(0, 7, 0));
    }

    #[test]
    fn test_reload_detects_external_edit() {
        let dir = TempDir::new().unwrap();
        let handle = handle_in(&dir);

        // Nothing on disk changed
        assert!(!handle.reload().unwrap());

        fs::write(handle.path(), "[weights]\ntimer = 4").unwrap();
        assert!(handle.reload().unwrap());
        assert_eq!(handle.snapshot(), CauseWeights::new(0, 0, 4));

        // Second reload of the same content is a no-op
        assert!(!handle.reload().unwrap());
    }

    #[test]
    fn test_snapshots_internally_consistent_under_stores() {
        let dir = TempDir::new().unwrap();
        let handle = handle_in(&dir);

        let writer = handle.clone();
        let t = std::thread::spawn(move || {
            for i in 0..200 {
                writer.store(CauseWeights::new(i, i, i)).unwrap();
            }
        });

        // Every snapshot comes from exactly one store, never a mix
        for _ in 0..200 {
            let w = handle.snapshot();
            assert!(w.user == w.scm && w.scm == w.timer);
        }

        t.join().unwrap();
    }
}
