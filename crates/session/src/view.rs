//! View state and rendering.
//!
//! [`ViewState`] is the value published on the session's watch channel;
//! [`ViewState::render`] turns it into the page text. Rendering is pure:
//! no collaborator calls, no session state.

use std::fmt::Write;

/// Column width long invoice strings are wrapped to.
const WRAP_COLUMNS: usize = 72;

/// What the page currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// No wallet handle exists yet (or acquisition failed terminally).
    Loading,
    /// A wallet handle exists.
    Ready {
        /// Latest fetched balance; zero until the first successful fetch.
        balance_sats: u64,
        /// The session invoice, once created.
        invoice: Option<String>,
    },
}

impl ViewState {
    /// The state published the moment a wallet handle becomes available.
    pub fn wallet_ready() -> Self {
        Self::Ready {
            balance_sats: 0,
            invoice: None,
        }
    }

    /// Records the session invoice. No-op while loading.
    pub(crate) fn set_invoice(&mut self, new_invoice: String) {
        if let Self::Ready { invoice, .. } = self {
            *invoice = Some(new_invoice);
        }
    }

    /// Overwrites the displayed balance. No-op while loading.
    pub(crate) fn set_balance(&mut self, sats: u64) {
        if let Self::Ready { balance_sats, .. } = self {
            *balance_sats = sats;
        }
    }

    /// Renders the page text.
    pub fn render(&self) -> String {
        match self {
            Self::Loading => "Loading wallet...".to_owned(),
            Self::Ready {
                balance_sats,
                invoice,
            } => {
                let mut out = String::new();
                out.push_str("Spark Wallet Demo\n");
                let _ = write!(out, "Balance: {balance_sats}");
                if let Some(invoice) = invoice {
                    out.push('\n');
                    out.push_str(&wrap(invoice, WRAP_COLUMNS));
                }
                out
            }
        }
    }
}

/// Hard-wraps a string (no whitespace needed) to `width` columns.
///
/// Payment requests are single unbroken tokens, so word wrapping would
/// never split them.
fn wrap(s: &str, width: usize) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / width + 1);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && i % width == 0 {
            out.push('\n');
        }
        out.push(ch);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
