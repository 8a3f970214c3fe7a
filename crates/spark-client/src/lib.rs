//! Spark wallet collaborator interface.
//!
//! The front-end delegates every hard wallet problem -- key derivation,
//! transaction construction, network synchronization, balance accounting --
//! to an external Spark wallet service. This crate is the seam between the
//! two: [`SparkService`] produces live wallet handles from mnemonics, and
//! [`SparkWallet`] exposes the two handle operations the demo consumes
//! (invoice creation and balance queries).
//!
//! # Architecture
//!
//! [`SparkService`] and [`SparkWallet`] are traits so callers can swap in
//! a mock for testing. [`LocalSpark`] is the bundled implementation: a
//! deterministic, network-free simulator that keeps the demo runnable
//! offline.
//!
//! The traits use `impl Future + Send` return types rather than
//! `async_trait` desugaring; callers are generic over the service type.

pub mod error;
pub mod local;

pub use error::SparkError;
pub use local::{LocalSpark, LocalWallet};

use std::future::Future;

// ---------------------------------------------------------------------------
// Balance
// ---------------------------------------------------------------------------

/// A point-in-time balance snapshot for a wallet handle.
///
/// Value semantics; the session keeps only the latest snapshot
/// (last-write-wins, no history).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BalanceInfo {
    /// Spendable balance in satoshis.
    pub balance_sats: u64,
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Factory for live wallet handles.
///
/// Implementations must be `Send + Sync`; the session holds the service
/// for its lifetime and calls it from spawned tasks.
pub trait SparkService: Send + Sync {
    /// The wallet handle type this service produces.
    type Wallet: SparkWallet;

    /// Restores a wallet from a previously persisted mnemonic.
    ///
    /// # Errors
    ///
    /// Returns [`SparkError::Restore`] if the mnemonic is invalid or the
    /// wallet cannot be reconstructed. Mnemonic format validation happens
    /// here, not in the caller.
    fn restore(
        &self,
        mnemonic: &str,
    ) -> impl Future<Output = Result<Self::Wallet, SparkError>> + Send;

    /// Creates a brand-new wallet with a freshly generated mnemonic.
    ///
    /// Returns the handle together with the mnemonic the caller must
    /// persist to restore the wallet on a later run.
    ///
    /// # Errors
    ///
    /// Returns [`SparkError::Creation`] if wallet creation fails.
    fn create(&self)
        -> impl Future<Output = Result<(Self::Wallet, String), SparkError>> + Send;
}

/// A live wallet session object.
///
/// At most one handle exists per running session; the handle is never
/// persisted and is recreated on every process start.
pub trait SparkWallet: Send + Sync + 'static {
    /// Creates a Lightning invoice for receiving funds.
    ///
    /// Returns the encoded payment-request string.
    ///
    /// # Errors
    ///
    /// Returns [`SparkError::Invoice`] if invoice creation fails.
    fn create_invoice(
        &self,
        amount_sats: u64,
        memo: &str,
    ) -> impl Future<Output = Result<String, SparkError>> + Send;

    /// Queries the current wallet balance.
    ///
    /// `force_refresh` requests a non-cached read from the service.
    ///
    /// # Errors
    ///
    /// Returns [`SparkError::Balance`] if the query fails.
    fn get_balance(
        &self,
        force_refresh: bool,
    ) -> impl Future<Output = Result<BalanceInfo, SparkError>> + Send;
}
