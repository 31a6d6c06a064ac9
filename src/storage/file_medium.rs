//! File-backed medium
//!
//! One record file per key inside a data directory.
//!
//! ## Responsibilities
//! - Create the data directory on open
//! - Map keys to `{key}.rec` files (keys restricted to a safe charset)
//! - Replace files atomically: write `{key}.rec.tmp`, optionally fsync,
//!   then rename over the target

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::SyncStrategy;
use crate::error::{EmsError, Result};

use super::{decode_record, encode_record, KvMedium};

/// Durable medium rooted at a directory
pub struct FileMedium {
    /// Directory holding the record files
    data_dir: PathBuf,

    /// Whether to fsync before renaming a new file into place
    sync_strategy: SyncStrategy,
}

impl FileMedium {
    const EXTENSION: &'static str = "rec";
    const TMP_EXTENSION: &'static str = "rec.tmp";

    /// Open or create a medium in the given directory
    pub fn open(path: &Path, sync_strategy: SyncStrategy) -> Result<Self> {
        fs::create_dir_all(path)?;
        Ok(Self {
            data_dir: path.to_path_buf(),
            sync_strategy,
        })
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the record file for `key`
    pub fn record_path(&self, key: &str) -> Result<PathBuf> {
        Self::check_key(key)?;
        Ok(self.data_dir.join(format!("{}.{}", key, Self::EXTENSION)))
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Keys become file names, so only `[A-Za-z0-9_-]` is accepted
    fn check_key(key: &str) -> Result<()> {
        let valid = !key.is_empty()
            && key
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
        if valid {
            Ok(())
        } else {
            Err(EmsError::Storage(format!("invalid storage key: {:?}", key)))
        }
    }

    fn tmp_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.{}", key, Self::TMP_EXTENSION))
    }
}

impl KvMedium for FileMedium {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.record_path(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let payload = decode_record(&bytes).map_err(|e| match e {
            EmsError::StorageCorruption(msg) => {
                EmsError::StorageCorruption(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;

        debug!(key, bytes = payload.len(), "read record file");
        Ok(Some(payload))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.record_path(key)?;
        let tmp = self.tmp_path(key);
        let encoded = encode_record(value)?;

        {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&tmp)?;
            let mut writer = BufWriter::new(file);
            writer.write_all(&encoded)?;

            let file = writer.into_inner().map_err(|e| {
                EmsError::Storage(format!("failed to flush {}: {}", tmp.display(), e))
            })?;
            if self.sync_strategy == SyncStrategy::EveryWrite {
                file.sync_all()?;
            }
        }

        fs::rename(&tmp, &path)?;
        debug!(key, bytes = value.len(), "replaced record file");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.record_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
