//! # Genesis File Adapter
//!
//! [`GenesisStore`] over a file on disk.
//!
//! Writes go to a temporary file in the same directory, are synced, then
//! renamed over the target. A reader sees the old file or the new one.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::ports::{GenesisStore, StoreError};

/// Genesis document stored at a filesystem path.
#[derive(Debug, Clone)]
pub struct GenesisFile {
    path: PathBuf,
}

impl GenesisFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            location: self.location(),
            source,
        }
    }
}

impl GenesisStore for GenesisFile {
    fn load(&self) -> Result<Vec<u8>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                tracing::debug!(
                    path = %self.path.display(),
                    bytes = bytes.len(),
                    "[qc-18] Loaded genesis file"
                );
                Ok(bytes)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(self.location()))
            }
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn persist(&self, bytes: &[u8]) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(bytes).map_err(|e| self.io_error(e))?;

        if let Ok(metadata) = fs::metadata(&self.path) {
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| self.io_error(e))?;
        }
        tmp.as_file().sync_all().map_err(|e| self.io_error(e))?;

        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        tracing::debug!(
            path = %self.path.display(),
            bytes = bytes.len(),
            "[qc-18] Wrote genesis file"
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
