//! Opaque session blob backend.
//!
//! The surrounding application owns session lifecycle (creation, expiry);
//! this trait only models the key-value surface the conversation store
//! needs. Keys are session identifiers, values are opaque byte blobs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;

/// Error from the session backend.
#[derive(Error, Debug)]
#[error("session backend error: {0}")]
pub struct BackendError(pub String);

/// Opaque per-session byte-blob storage.
#[async_trait]
pub trait SessionBackend: Send + Sync {
    /// Fetch the blob stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError>;

    /// Store `blob` under `key`, replacing any previous value atomically.
    async fn put(&self, key: &str, blob: Vec<u8>) -> Result<(), BackendError>;

    /// Remove the blob stored under `key`. Removing an absent key is a
    /// no-op.
    async fn remove(&self, key: &str) -> Result<(), BackendError>;
}

/// In-memory backend for tests and single-process deployments.
///
/// Blobs live as long as the process; sessions "expire" when it exits.
#[derive(Default)]
pub struct InMemorySessionBackend {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemorySessionBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionBackend for InMemorySessionBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    async fn put(&self, key: &str, blob: Vec<u8>) -> Result<(), BackendError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), blob);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), BackendError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}
