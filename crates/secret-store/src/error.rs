//! Secret store error types.

use std::fmt;

/// Errors from a secret store backend.
///
/// Absence of a secret is *not* an error (see
/// [`SecretStore::load`](crate::SecretStore::load)); these variants cover
/// real backend failures only.
#[derive(Debug)]
pub enum StoreError {
    /// Reading the persisted secret failed.
    Read(std::io::Error),

    /// Writing the secret failed (the previous value, if any, is intact).
    Write(std::io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(e) => write!(f, "failed to read secret: {e}"),
            Self::Write(e) => write!(f, "failed to write secret: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read(e) | Self::Write(e) => Some(e),
        }
    }
}
