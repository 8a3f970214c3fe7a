//! Fixed demonstration parameters.
//!
//! The front-end takes no configuration flags; these constants define the
//! entire runtime surface of the demo.

use std::time::Duration;

/// Amount requested for the demonstration invoice, in satoshis.
pub const INVOICE_AMOUNT_SATS: u64 = 1000;

/// Memo attached to the demonstration invoice.
pub const INVOICE_MEMO: &str = "Test invoice";

/// Interval between periodic balance refreshes.
///
/// The first fetch happens immediately when polling starts; each
/// subsequent fetch follows one interval after the previous tick.
pub const BALANCE_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Storage key the wallet mnemonic is persisted under.
///
/// For the file-backed secret store this is the file name inside the
/// data directory.
pub const MNEMONIC_STORAGE_KEY: &str = "sparkMnemonic";
