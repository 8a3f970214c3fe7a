//! In-process demo collaborator.
//!
//! [`LocalSpark`] implements [`SparkService`] without any network or
//! operator infrastructure: mnemonics are real BIP39 phrases, wallet
//! identities are derived deterministically from the BIP39 seed, and
//! invoices are fabricated regtest-flavored payment strings. Balances
//! start at zero and only move when [`LocalWallet::credit`] is called.
//!
//! This keeps the demo binary runnable offline while exercising the same
//! seam a production service would plug into.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use bip39::Mnemonic;
use tracing::debug;

use crate::{BalanceInfo, SparkError, SparkService, SparkWallet};

// ---------------------------------------------------------------------------
// LocalSpark
// ---------------------------------------------------------------------------

/// A deterministic, network-free wallet service.
#[derive(Debug, Default)]
pub struct LocalSpark;

impl LocalSpark {
    /// Creates a new local service.
    pub fn new() -> Self {
        Self
    }
}

impl SparkService for LocalSpark {
    type Wallet = LocalWallet;

    async fn restore(&self, mnemonic: &str) -> Result<Self::Wallet, SparkError> {
        let parsed = mnemonic
            .parse::<Mnemonic>()
            .map_err(|_| SparkError::Restore)?;
        let wallet = LocalWallet::from_mnemonic(&parsed);
        debug!(identity = %wallet.identity(), "restored local wallet");
        Ok(wallet)
    }

    async fn create(&self) -> Result<(Self::Wallet, String), SparkError> {
        // 12 words = 128 bits = 16 bytes of entropy.
        let mut entropy = [0u8; 16];
        rand_core::RngCore::fill_bytes(&mut rand_core::OsRng, &mut entropy);
        let mnemonic = Mnemonic::from_entropy(&entropy).map_err(|_| SparkError::Creation)?;
        let wallet = LocalWallet::from_mnemonic(&mnemonic);
        debug!(identity = %wallet.identity(), "created local wallet");
        Ok((wallet, mnemonic.to_string()))
    }
}

// ---------------------------------------------------------------------------
// LocalWallet
// ---------------------------------------------------------------------------

/// A live handle produced by [`LocalSpark`].
///
/// Cheap to clone; clones share the same balance.
#[derive(Debug, Clone)]
pub struct LocalWallet {
    /// Hex identity derived from the BIP39 seed.
    identity: String,
    /// Spendable balance in satoshis.
    balance_sats: Arc<AtomicU64>,
    /// Counter making fabricated invoices unique within a session.
    invoice_seq: Arc<AtomicU64>,
}

impl LocalWallet {
    fn from_mnemonic(mnemonic: &Mnemonic) -> Self {
        let seed = mnemonic.to_seed("");
        Self {
            identity: hex_encode(&seed[..8]),
            balance_sats: Arc::new(AtomicU64::new(0)),
            invoice_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The wallet's stable hex identity.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Credits the wallet, simulating an inbound payment.
    ///
    /// The next balance query observes the new total.
    pub fn credit(&self, amount_sats: u64) {
        self.balance_sats.fetch_add(amount_sats, Ordering::Relaxed);
    }
}

impl SparkWallet for LocalWallet {
    async fn create_invoice(&self, amount_sats: u64, memo: &str) -> Result<String, SparkError> {
        let seq = self.invoice_seq.fetch_add(1, Ordering::Relaxed);
        debug!(amount_sats, memo, seq, "fabricating local invoice");
        // Regtest-flavored payment string; not a real BOLT11 encoding.
        Ok(format!(
            "lnbcrt{}n1p{}q{}demo",
            amount_sats, self.identity, seq
        ))
    }

    async fn get_balance(&self, _force_refresh: bool) -> Result<BalanceInfo, SparkError> {
        // There is no cache to bypass locally; force_refresh is accepted
        // for interface parity and ignored.
        Ok(BalanceInfo {
            balance_sats: self.balance_sats.load(Ordering::Relaxed),
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Minimal hex encoding (no extra deps).
fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0xf) as usize] as char);
    }
    s
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[tokio::test]
    async fn restore_accepts_valid_mnemonic() {
        let spark = LocalSpark::new();
        let wallet = spark.restore(MNEMONIC).await.unwrap();
        assert!(!wallet.identity().is_empty());
    }

    #[tokio::test]
    async fn restore_rejects_garbage() {
        let spark = LocalSpark::new();
        assert_eq!(
            spark.restore("not a mnemonic").await.map(|_| ()),
            Err(SparkError::Restore)
        );
    }

    #[tokio::test]
    async fn restore_is_deterministic() {
        let spark = LocalSpark::new();
        let a = spark.restore(MNEMONIC).await.unwrap();
        let b = spark.restore(MNEMONIC).await.unwrap();
        assert_eq!(a.identity(), b.identity());
    }

    #[tokio::test]
    async fn create_returns_restorable_mnemonic() {
        let spark = LocalSpark::new();
        let (wallet, mnemonic) = spark.create().await.unwrap();
        let restored = spark.restore(&mnemonic).await.unwrap();
        assert_eq!(wallet.identity(), restored.identity());
    }

    #[tokio::test]
    async fn balance_starts_at_zero_and_tracks_credits() {
        let spark = LocalSpark::new();
        let (wallet, _) = spark.create().await.unwrap();
        assert_eq!(wallet.get_balance(true).await.unwrap().balance_sats, 0);

        wallet.credit(2500);
        assert_eq!(wallet.get_balance(true).await.unwrap().balance_sats, 2500);
    }

    #[tokio::test]
    async fn invoices_are_unique_per_session() {
        let spark = LocalSpark::new();
        let (wallet, _) = spark.create().await.unwrap();
        let a = wallet.create_invoice(1000, "memo").await.unwrap();
        let b = wallet.create_invoice(1000, "memo").await.unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("lnbcrt1000"));
    }
}
