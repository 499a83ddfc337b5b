//! In-memory adapters for tests and embedding.

use std::collections::HashMap;
use std::io;

use parking_lot::Mutex;
use shared_types::Address;

use crate::ports::{GenesisStore, KeyStore, KeyStoreError, StoreError};

/// Key store backed by a map.
#[derive(Debug, Default)]
pub struct MemoryKeyStore {
    keys: HashMap<String, Address>,
    unavailable: bool,
}

impl MemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A key store that fails every lookup as unreachable.
    pub fn unavailable() -> Self {
        Self {
            keys: HashMap::new(),
            unavailable: true,
        }
    }

    pub fn with_key(mut self, alias: impl Into<String>, address: Address) -> Self {
        self.keys.insert(alias.into(), address);
        self
    }
}

impl KeyStore for MemoryKeyStore {
    fn key_address(&self, alias: &str) -> Result<Address, KeyStoreError> {
        if self.unavailable {
            return Err(KeyStoreError::Unavailable("memory key store offline".to_string()));
        }
        self.keys
            .get(alias)
            .cloned()
            .ok_or_else(|| KeyStoreError::NotFound(alias.to_string()))
    }
}

#[derive(Debug, Default)]
struct StoredGenesis {
    bytes: Option<Vec<u8>>,
    persists: usize,
}

/// Genesis store holding the document in memory.
#[derive(Debug, Default)]
pub struct MemoryGenesisStore {
    inner: Mutex<StoredGenesis>,
    fail_persist: bool,
}

impl MemoryGenesisStore {
    /// An empty store; `load` reports not found.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self {
            inner: Mutex::new(StoredGenesis {
                bytes: Some(bytes),
                persists: 0,
            }),
            fail_persist: false,
        }
    }

    /// Make every `persist` fail with an I/O error.
    pub fn failing_persist(mut self) -> Self {
        self.fail_persist = true;
        self
    }

    pub fn bytes(&self) -> Option<Vec<u8>> {
        self.inner.lock().bytes.clone()
    }

    /// Number of successful `persist` calls.
    pub fn persist_count(&self) -> usize {
        self.inner.lock().persists
    }
}

impl GenesisStore for MemoryGenesisStore {
    fn load(&self) -> Result<Vec<u8>, StoreError> {
        self.inner
            .lock()
            .bytes
            .clone()
            .ok_or_else(|| StoreError::NotFound(self.location()))
    }

    fn persist(&self, bytes: &[u8]) -> Result<(), StoreError> {
        if self.fail_persist {
            return Err(StoreError::Io {
                location: self.location(),
                source: io::Error::new(io::ErrorKind::Other, "persist disabled"),
            });
        }
        let mut inner = self.inner.lock();
        inner.bytes = Some(bytes.to_vec());
        inner.persists += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
