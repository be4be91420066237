//! Storage port and backends.
//!
//! The layout store reads and writes opaque string blobs through the
//! [`StorageBackend`] trait, so it never depends on a specific storage
//! medium. Production code embeds [`FileBackend`]; tests substitute
//! [`MemoryBackend`].

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::Local;

use crate::error::{Result, StorageError};

/// Key-value port the stores persist through.
///
/// Keys are flat strings and values are serialized JSON blobs. A missing
/// key reads as `Ok(None)`, never as an error.
pub trait StorageBackend {
    /// Reads the blob stored under `key`, or `None` if absent.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous blob.
    fn store(&mut self, key: &str, value: &str) -> Result<()>;

    /// Deletes the blob under `key`; an absent key is a no-op.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory backend for tests and ephemeral embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    /// Creates an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw blob under `key`, bypassing the store.
    ///
    /// Intended for tests that simulate pre-existing or corrupt stored
    /// data.
    pub fn seed(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    /// Returns the raw blob under `key`, if any.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn store(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed storage: one JSON file per key inside a directory.
///
/// Writes use the temp-file-then-rename pattern:
/// 1. Write to a temp file with a timestamp suffix
/// 2. Fsync to disk
/// 3. Rename the temp file over the target (atomic operation)
///
/// On failure before the rename, the temp file is preserved as a safety
/// copy.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Creates a backend rooted at `dir`. The directory is created lazily
    /// on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn store(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let timestamp = Local::now().format("%Y%m%d-%H%M%S").to_string();
        let temp_path = self.dir.join(format!("{}.json.tmp.{}", key, timestamp));

        fs::write(&temp_path, value)?;

        // Fsync (ensure data is on disk)
        let file = fs::File::open(&temp_path)?;
        file.sync_all()?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(|_| StorageError::WriteAtomic {
            path: path.clone(),
            temp_path: temp_path.clone(),
        })?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Default on-disk location for dashboard layout data.
///
/// Uses XDG data directory conventions:
/// - macOS: `~/Library/Application Support/home-dashboard`
/// - Linux: `~/.local/share/home-dashboard` (or `$XDG_DATA_HOME/home-dashboard`)
///
/// Returns `None` when the platform data directory cannot be determined.
pub fn default_store_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("home-dashboard"))
}
