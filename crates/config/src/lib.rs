//! Demo configuration for the Spark wallet front-end.
//!
//! This crate provides the fixed demonstration parameters: the invoice
//! amount and memo, the balance polling cadence, and the storage key the
//! wallet mnemonic is persisted under.
//!
//! All data is compile-time constant. `config` has no dependencies, so it
//! can be used freely as a leaf crate.

pub mod constants;

pub use constants::{
    BALANCE_POLL_INTERVAL, INVOICE_AMOUNT_SATS, INVOICE_MEMO, MNEMONIC_STORAGE_KEY,
};
