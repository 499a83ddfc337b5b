//! # Home Directory Locking
//!
//! Prevents two `qc-genesis` processes from rewriting the same genesis file
//! at once.
//!
//! Uses `fs2` for cross-platform file locking (flock on Unix, LockFile on
//! Windows). The lock is advisory and held until the guard is dropped.
//!
//! The lock file is never deleted. Unlinking it on release would let a
//! waiter hold a lock on the orphaned inode while a newcomer locks a fresh
//! file at the same path. Release only clears the recorded PID.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;

/// Errors from home locking
#[derive(Debug, Error)]
pub enum LockError {
    /// Lock file could not be created
    #[error("failed to create lock file {path}: {source}")]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Another process holds the lock
    #[error("genesis is being modified by another process{} ({})", .pid.map(|p| format!(" {}", p)).unwrap_or_default(), .path.display())]
    AlreadyLocked { pid: Option<u32>, path: PathBuf },

    /// Failed to record our PID in the lock file
    #[error("failed to write PID to lock file: {0}")]
    WriteFailed(#[source] io::Error),
}

/// Exclusive lock on a genesis directory.
///
/// # Example
///
/// ```ignore
/// let lock = HomeLock::acquire(Path::new("/root/.quantum-chain/config"))?;
/// // Lock is held until `lock` goes out of scope
/// ```
pub struct HomeLock {
    /// The lock file handle (kept open to maintain lock)
    file: File,
    /// Path to the lock file
    path: PathBuf,
}

impl HomeLock {
    /// Lock file name
    pub const LOCK_FILE: &'static str = ".genesis.lock";

    /// Acquire an exclusive lock on `dir` without blocking.
    ///
    /// # Errors
    ///
    /// Returns `LockError::AlreadyLocked` if another process holds the lock.
    pub fn acquire(dir: &Path) -> Result<Self, LockError> {
        let path = dir.join(Self::LOCK_FILE);

        // Not truncated here: the current holder's PID stays readable
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(|source| LockError::CreateFailed {
                path: path.clone(),
                source,
            })?;

        if file.try_lock_exclusive().is_err() {
            return Err(LockError::AlreadyLocked {
                pid: Self::read_existing_pid(&path),
                path,
            });
        }

        file.set_len(0).map_err(LockError::WriteFailed)?;
        writeln!(file, "{}", std::process::id()).map_err(LockError::WriteFailed)?;
        file.sync_all().map_err(LockError::WriteFailed)?;

        tracing::debug!(path = %path.display(), "Acquired genesis lock");
        Ok(Self { file, path })
    }

    /// Get the path to the lock file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read PID from existing lock file (for error messages)
    fn read_existing_pid(path: &Path) -> Option<u32> {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
    }
}

impl Drop for HomeLock {
    fn drop(&mut self) {
        let _ = self.file.set_len(0);
        let _ = self.file.unlock();
    }
}
