//! Persistence for the wallet-unlocking secret.
//!
//! The front-end keeps exactly one secret: the mnemonic phrase that
//! regenerates the wallet's keys. It is read once at startup and written
//! once when a brand-new wallet is created. Absence is not an error --
//! a missing secret means "create a new wallet".
//!
//! # Design Principles
//!
//! - **No generic key-value trait.** The store holds one value under the
//!   fixed key [`config::MNEMONIC_STORAGE_KEY`]; the trait has typed,
//!   meaningful methods.
//! - **No local format validation.** Whether the stored string is a valid
//!   mnemonic is the wallet collaborator's call, not the store's.
//! - **Plain text, no encryption, no expiry.**

pub mod error;
pub mod file;
pub mod memory;

pub use error::StoreError;
pub use file::FileSecretStore;
pub use memory::InMemorySecretStore;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Persistence for the wallet mnemonic.
///
/// Implementations must be `Send + Sync`; the session holds the store for
/// its lifetime.
pub trait SecretStore: Send + Sync {
    /// Reads the persisted secret.
    ///
    /// Returns `Ok(None)` when no secret has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the backend fails.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Persists the secret, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the backend fails.
    fn store(&self, secret: &str) -> Result<(), StoreError>;
}

// A shared store is still a store.
impl<T: SecretStore + ?Sized> SecretStore for std::sync::Arc<T> {
    fn load(&self) -> Result<Option<String>, StoreError> {
        (**self).load()
    }

    fn store(&self, secret: &str) -> Result<(), StoreError> {
        (**self).store(secret)
    }
}
