//! # Directory Keyring
//!
//! [`KeyStore`] reading key-info records from a keyring directory.
//!
//! ## Layout
//!
//! ```text
//! <keyring-dir>/
//! ├── keyring-file/<alias>.info
//! └── keyring-test/<alias>.info
//! ```
//!
//! Each record is JSON: `{"name", "type", "address", "pub_key"}`.
//!
//! The `os` backend lives in the platform secret service, which this adapter
//! cannot reach; lookups against it report the keyring as unavailable.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::Address;
use thiserror::Error;

use crate::ports::{KeyStore, KeyStoreError};

/// Where keys are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyringBackend {
    /// Platform secret service.
    #[default]
    Os,
    /// Files under the keyring directory.
    File,
    /// Unprotected files for testing.
    Test,
}

impl KeyringBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyringBackend::Os => "os",
            KeyringBackend::File => "file",
            KeyringBackend::Test => "test",
        }
    }
}

impl fmt::Display for KeyringBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized `--keyring-backend` value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown keyring backend {0:?} (expected os, file or test)")]
pub struct UnknownBackend(pub String);

impl FromStr for KeyringBackend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "os" => Ok(KeyringBackend::Os),
            "file" => Ok(KeyringBackend::File),
            "test" => Ok(KeyringBackend::Test),
            _ => Err(UnknownBackend(s.to_string())),
        }
    }
}

/// Stored key record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInfo {
    pub name: String,
    #[serde(rename = "type", default = "KeyInfo::default_type")]
    pub key_type: String,
    pub address: Address,
    #[serde(default)]
    pub pub_key: Option<Value>,
}

impl KeyInfo {
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            key_type: Self::default_type(),
            address,
            pub_key: None,
        }
    }

    fn default_type() -> String {
        "local".to_string()
    }
}

/// Key-info records under `<keyring-dir>/keyring-<backend>/`.
#[derive(Debug, Clone)]
pub struct DirectoryKeyring {
    dir: PathBuf,
    backend: KeyringBackend,
}

impl DirectoryKeyring {
    pub fn open(keyring_dir: impl AsRef<Path>, backend: KeyringBackend) -> Self {
        Self {
            dir: keyring_dir
                .as_ref()
                .join(format!("keyring-{}", backend.as_str())),
            backend,
        }
    }

    /// Directory holding this backend's records.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn backend(&self) -> KeyringBackend {
        self.backend
    }

    /// Store a key record, replacing any record with the same name.
    pub fn add_key(&self, info: &KeyInfo) -> Result<PathBuf, KeyStoreError> {
        self.ensure_reachable()?;
        let path = self.key_path(&info.name)?;

        let unavailable =
            |e: io::Error| KeyStoreError::Unavailable(format!("{}: {}", path.display(), e));
        fs::create_dir_all(&self.dir).map_err(unavailable)?;
        let json = serde_json::to_vec_pretty(info).map_err(|e| KeyStoreError::Corrupted {
            alias: info.name.clone(),
            reason: e.to_string(),
        })?;
        fs::write(&path, json).map_err(unavailable)?;
        Ok(path)
    }

    fn ensure_reachable(&self) -> Result<(), KeyStoreError> {
        match self.backend {
            KeyringBackend::Os => Err(KeyStoreError::Unavailable(
                "the os keyring backend requires a platform secret service; use --keyring-backend file or test"
                    .to_string(),
            )),
            KeyringBackend::File | KeyringBackend::Test => Ok(()),
        }
    }

    fn key_path(&self, alias: &str) -> Result<PathBuf, KeyStoreError> {
        let bad = alias.is_empty()
            || alias == "."
            || alias == ".."
            || alias.chars().any(|c| matches!(c, '/' | '\\' | '\0'));
        if bad {
            return Err(KeyStoreError::InvalidAlias(alias.to_string()));
        }
        Ok(self.dir.join(format!("{}.info", alias)))
    }
}

impl KeyStore for DirectoryKeyring {
    fn key_address(&self, alias: &str) -> Result<Address, KeyStoreError> {
        let path = self.key_path(alias)?;
        self.ensure_reachable()?;

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(KeyStoreError::NotFound(alias.to_string()))
            }
            Err(e) => {
                return Err(KeyStoreError::Unavailable(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let info: KeyInfo = serde_json::from_str(&raw).map_err(|e| KeyStoreError::Corrupted {
            alias: alias.to_string(),
            reason: e.to_string(),
        })?;

        if info.name != alias {
            tracing::warn!(
                alias,
                stored_name = %info.name,
                "[qc-18] Key record name differs from its file name"
            );
        }
        Ok(info.address)
    }
}
