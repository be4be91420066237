//! Error types for the storage port.
//!
//! Errors exist at the [`StorageBackend`](crate::StorageBackend) seam only.
//! The layout store never surfaces them to callers: layout is cosmetic, so
//! every failed read degrades to the default layout and every failed write
//! is logged and dropped.

use std::path::PathBuf;
use thiserror::Error;

/// Storage backend errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error reading or writing the backing medium
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Stored blob is not valid JSON or has an incompatible shape
    #[error("Failed to parse stored data: {0}")]
    Parse(String),

    /// Atomic rename failed; the temp file is preserved as a safety copy
    #[error("Failed to write atomically: {path} - Safety copy at: {temp_path}")]
    WriteAtomic {
        /// Path to the target file
        path: PathBuf,
        /// Path to the temporary safety copy
        temp_path: PathBuf,
    },
}

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;
