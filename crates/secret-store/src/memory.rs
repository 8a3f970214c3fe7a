//! In-memory secret store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::{SecretStore, StoreError};

/// In-memory secret store backed by `RwLock<Option<String>>`.
///
/// Suitable for development and testing. Counts writes so tests can assert
/// the secret is persisted exactly once per generation.
#[derive(Debug, Default)]
pub struct InMemorySecretStore {
    secret: RwLock<Option<String>>,
    writes: AtomicUsize,
}

impl InMemorySecretStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with a secret, as if persisted by a
    /// previous run.
    pub fn with_secret(secret: &str) -> Self {
        Self {
            secret: RwLock::new(Some(secret.to_owned())),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of times [`SecretStore::store`] has been called.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
}

impl SecretStore for InMemorySecretStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.secret.read().unwrap().clone())
    }

    fn store(&self, secret: &str) -> Result<(), StoreError> {
        *self.secret.write().unwrap() = Some(secret.to_owned());
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
