//! Collaborator error types.
//!
//! [`SparkError`] is the unified error type for all collaborator calls.
//! Variants are zero-size discriminants -- the service reports failure per
//! operation and the front-end retains no subtypes.

use std::fmt;

// ---------------------------------------------------------------------------
// SparkError
// ---------------------------------------------------------------------------

/// Errors reported by the external wallet collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparkError {
    /// Restoring a wallet from a persisted mnemonic failed.
    Restore,

    /// Creating a brand-new wallet failed.
    Creation,

    /// Invoice creation failed.
    Invoice,

    /// A balance query failed.
    Balance,
}

impl fmt::Display for SparkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Restore => write!(f, "wallet restore failed"),
            Self::Creation => write!(f, "wallet creation failed"),
            Self::Invoice => write!(f, "invoice creation failed"),
            Self::Balance => write!(f, "balance query failed"),
        }
    }
}

impl std::error::Error for SparkError {}
