use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::fs::atomic_write;

/// File name of the cached dictionary list.
pub const DICTIONARIES_FILE: &str = "dictionaries.json";

/// Computes the cache key for a word looked up in a dictionary.
///
/// The key is the hex-encoded SHA-256 digest of `"<word>_<dict>"`, so the
/// same pair always maps to the same cache file.
pub fn derive_key(word: &str, dict: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{word}_{dict}").as_bytes());
    hex::encode(hasher.finalize())
}

/// Returns `true` if `path` exists and was modified less than `ttl` ago.
pub fn is_fresh(path: &Path, ttl: Duration) -> bool {
    is_fresh_at(path, ttl, SystemTime::now())
}

fn is_fresh_at(path: &Path, ttl: Duration, now: SystemTime) -> bool {
    let Ok(modified) = fs::metadata(path).and_then(|m| m.modified()) else {
        return false;
    };
    age(modified, now) < ttl
}

// A modification time in the future counts as age zero.
fn age(modified: SystemTime, now: SystemTime) -> Duration {
    now.duration_since(modified).unwrap_or(Duration::ZERO)
}

/// Outcome of an expiry sweep.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    /// Entries deleted because they outlived the TTL.
    pub removed: usize,
    /// Entries that could not be inspected or deleted.
    pub failed: usize,
}

/// A directory of raw API responses keyed by file name.
///
/// Freshness is the file's modification time compared with the TTL; there
/// is no index or metadata beside the files themselves.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    /// Opens the store at `dir`, creating the directory if needed.
    pub fn open(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create cache directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the cached translation for `key`.
    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Path of the cached dictionary list.
    pub fn dictionaries_path(&self) -> PathBuf {
        self.dir.join(DICTIONARIES_FILE)
    }

    /// Reads a cached response. `Ok(None)` means there is no such entry.
    pub fn read(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        match fs::read(path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("could not read cache file: {}", path.display()))
            }
        }
    }

    /// Reads a cached response only if it is still fresh.
    pub fn read_fresh(&self, path: &Path, ttl: Duration) -> Result<Option<Vec<u8>>> {
        if !is_fresh(path, ttl) {
            return Ok(None);
        }
        self.read(path)
    }

    pub fn write(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        atomic_write(path, bytes)
            .with_context(|| format!("could not write cache file: {}", path.display()))
    }

    /// Deletes every file older than `ttl`.
    ///
    /// Failures on individual entries are logged and counted, never fatal.
    /// Only a failure to list the directory itself is returned as an error.
    pub fn sweep(&self, ttl: Duration) -> Result<SweepReport> {
        self.sweep_at(ttl, SystemTime::now())
    }

    fn sweep_at(&self, ttl: Duration, now: SystemTime) -> Result<SweepReport> {
        let entries = fs::read_dir(&self.dir).with_context(|| {
            format!("could not read cache directory: {}", self.dir.display())
        })?;

        let mut report = SweepReport::default();

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("could not read cache directory entry: {e}");
                    report.failed += 1;
                    continue;
                }
            };
            let path = entry.path();

            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(e) => {
                    tracing::warn!("could not get file info for {}: {e}", path.display());
                    report.failed += 1;
                    continue;
                }
            };
            if metadata.is_dir() {
                continue;
            }

            let modified = match metadata.modified() {
                Ok(modified) => modified,
                Err(e) => {
                    tracing::warn!("could not get modification time for {}: {e}", path.display());
                    report.failed += 1;
                    continue;
                }
            };

            if age(modified, now) > ttl {
                match fs::remove_file(&path) {
                    Ok(()) => {
                        tracing::debug!("removed expired cache file {}", path.display());
                        report.removed += 1;
                    }
                    Err(e) => {
                        tracing::warn!(
                            "could not remove expired cache file {}: {e}",
                            path.display()
                        );
                        report.failed += 1;
                    }
                }
            }
        }

        Ok(report)
    }
}
