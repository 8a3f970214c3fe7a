//! Invoice creation and periodic balance polling.
//!
//! Activated once when the wallet handle first becomes available. The
//! invoice request is fully awaited before the first balance fetch;
//! polling never starts if the invoice fails. Fetches run sequentially
//! inside one task, so a slow fetch delays the next tick instead of
//! overlapping it.
//!
//! The running poller is owned by a [`PollerGuard`] stored in the
//! session's single poller slot. The guard cancels and aborts its task on
//! drop, so a torn-down session can never leak periodic work.

use std::sync::Arc;

use config::{BALANCE_POLL_INTERVAL, INVOICE_AMOUNT_SATS, INVOICE_MEMO};
use secret_store::SecretStore;
use spark_client::{SparkService, SparkWallet};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::{Session, ViewState};

// ---------------------------------------------------------------------------
// PollerGuard
// ---------------------------------------------------------------------------

/// Owns the running poller task.
///
/// Scoped to the session (not process-wide): dropping the guard cancels
/// and aborts the task, guaranteeing the repeating timer dies with its
/// owner.
pub(crate) struct PollerGuard {
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl PollerGuard {
    /// Whether the guarded task is still running.
    pub(crate) fn is_live(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancels the task and waits for it to exit.
    pub(crate) async fn join(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for PollerGuard {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.cancel.cancel();
            handle.abort();
        }
    }
}

// ---------------------------------------------------------------------------
// Session impl -- poller activation
// ---------------------------------------------------------------------------

impl<S, P> Session<S, P>
where
    S: SparkService,
    P: SecretStore,
{
    /// Arms the invoice/balance poller for a freshly acquired wallet.
    ///
    /// At most one poller runs per session: arming while a live poller
    /// occupies the slot is a logged no-op, so a redundant activation
    /// never produces a second timer cadence.
    pub fn start_polling(&self, wallet: S::Wallet) {
        let mut slot = self.inner.poller.lock().unwrap();
        if slot.as_ref().is_some_and(PollerGuard::is_live) {
            warn!("balance poller already armed for this session; ignoring");
            return;
        }

        let cancel = self.inner.cancel.child_token();
        let handle = tokio::spawn(poll_loop(
            Arc::new(wallet),
            self.inner.view.clone(),
            cancel.clone(),
        ));
        *slot = Some(PollerGuard {
            cancel,
            handle: Some(handle),
        });
    }
}

// ---------------------------------------------------------------------------
// Poll loop
// ---------------------------------------------------------------------------

/// Requests the demonstration invoice, then refreshes the balance on a
/// fixed cadence until cancelled.
async fn poll_loop<W: SparkWallet>(
    wallet: Arc<W>,
    view: watch::Sender<ViewState>,
    cancel: CancellationToken,
) {
    let invoice = tokio::select! {
        _ = cancel.cancelled() => return,
        res = wallet.create_invoice(INVOICE_AMOUNT_SATS, INVOICE_MEMO) => match res {
            Ok(invoice) => invoice,
            Err(e) => {
                // Polling is tied to invoice success; without one the
                // session shows a zero balance and never polls.
                error!(error = %e, "invoice creation failed; balance polling not started");
                return;
            }
        },
    };
    info!(invoice = %invoice, "invoice created");
    view.send_modify(|v| v.set_invoice(invoice));

    let mut ticks = tokio::time::interval(BALANCE_POLL_INTERVAL);
    // A fetch that outlasts the interval delays the next tick rather than
    // bunching ticks to catch up.
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => return,
            _ = ticks.tick() => {}
        }

        // The first tick fires immediately, giving the initial fetch.
        tokio::select! {
            _ = cancel.cancelled() => return,
            res = wallet.get_balance(true) => match res {
                Ok(balance) => {
                    debug!(balance_sats = balance.balance_sats, "balance refreshed");
                    view.send_modify(|v| v.set_balance(balance.balance_sats));
                }
                // The cadence continues; the next tick retries naturally.
                Err(e) => warn!(error = %e, "balance refresh failed"),
            },
        }
    }
}
