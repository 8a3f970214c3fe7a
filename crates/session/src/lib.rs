//! The wallet session: bootstrap, polling, and view state.
//!
//! A [`Session`] is the page-level controller of the demo. It combines:
//! - **Collaborator** (`SparkService`) for wallet restore/create, invoice
//!   creation, and balance queries
//! - **Secret store** (`SecretStore`) for the persisted mnemonic
//! - **Wallet phase** state machine tracking acquisition progress
//! - **Poller slot** owning the single periodic balance-refresh task
//! - **View channel** publishing [`ViewState`] snapshots to the renderer
//!
//! # Control flow
//!
//! ```text
//! bootstrap: load secret ──> restore ──ok──> Ready
//!                 │             │
//!                 │           fail (logged, explicit fallback)
//!                 │             ▼
//!                 └──none──> create ──ok──> Ready (persist new secret)
//!                               │
//!                             fail
//!                               ▼
//!                            Failed (view stays in loading forever)
//!
//! on Ready: create invoice ──ok──> immediate balance fetch, then one
//!           fetch every BALANCE_POLL_INTERVAL until shutdown
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use secret_store::InMemorySecretStore;
//! use session::Session;
//! use spark_client::LocalSpark;
//!
//! # async fn example() {
//! let session = Session::new(LocalSpark::new(), InMemorySecretStore::new());
//! let mut view = session.subscribe();
//!
//! // Session is Clone -- run it from a background task.
//! let runner = session.clone();
//! tokio::spawn(async move { runner.run().await });
//!
//! while view.changed().await.is_ok() {
//!     println!("{}", view.borrow_and_update().render());
//! }
//!
//! // Graceful shutdown cancels the balance poller.
//! session.shutdown().await;
//! # }
//! ```

pub mod bootstrap;
pub mod poller;
pub mod state;
pub mod view;

pub use state::WalletPhase;
pub use view::ViewState;

use std::sync::{Arc, Mutex};

use secret_store::SecretStore;
use spark_client::SparkService;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::poller::PollerGuard;

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Shared state across the session's tasks.
pub(crate) struct SessionInner<S, P> {
    pub(crate) spark: S,
    pub(crate) secrets: P,
    pub(crate) phase: Mutex<WalletPhase>,
    /// The single poller slot. At most one live guard per session; the
    /// guard cancels its task on drop.
    pub(crate) poller: Mutex<Option<PollerGuard>>,
    pub(crate) view: watch::Sender<ViewState>,
    pub(crate) cancel: CancellationToken,
}

/// The page-level wallet session controller.
///
/// `Clone`-able (wraps an `Arc<SessionInner>`). Exactly one wallet handle
/// and at most one balance-polling timer exist per session.
///
/// # Type Parameters
///
/// - `S`: the external wallet collaborator
/// - `P`: persistence for the wallet mnemonic
pub struct Session<S, P> {
    pub(crate) inner: Arc<SessionInner<S, P>>,
}

// Manual Clone: we don't require S or P to be Clone.
impl<S, P> Clone for Session<S, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, P> std::fmt::Debug for Session<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("phase", &*self.inner.phase.lock().unwrap())
            .finish()
    }
}

impl<S, P> Session<S, P>
where
    S: SparkService,
    P: SecretStore,
{
    /// Creates a new session in the [`WalletPhase::Unloaded`] state.
    ///
    /// No collaborator calls happen during construction; call
    /// [`run`](Self::run) to start the bootstrap sequence.
    pub fn new(spark: S, secrets: P) -> Self {
        let (view, _) = watch::channel(ViewState::Loading);
        Self {
            inner: Arc::new(SessionInner {
                spark,
                secrets,
                phase: Mutex::new(WalletPhase::Unloaded),
                poller: Mutex::new(None),
                view,
                cancel: CancellationToken::new(),
            }),
        }
    }

    /// Subscribes to view-state updates.
    ///
    /// The receiver observes the current state immediately and every
    /// change thereafter.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.inner.view.subscribe()
    }

    /// The current wallet acquisition phase.
    pub fn phase(&self) -> WalletPhase {
        *self.inner.phase.lock().unwrap()
    }

    /// Returns a reference to the cancellation token.
    pub fn cancel(&self) -> &CancellationToken {
        &self.inner.cancel
    }

    /// Graceful shutdown: signals cancellation and waits for the balance
    /// poller (if armed) to exit.
    pub async fn shutdown(&self) {
        self.inner.cancel.cancel();
        let guard = self.inner.poller.lock().unwrap().take();
        if let Some(guard) = guard {
            guard.join().await;
        }
    }

    /// Moves the wallet phase forward along a named transition.
    ///
    /// Illegal transitions are rejected and logged as invariant breaches;
    /// the phase is left unchanged.
    pub(crate) fn transition(&self, next: WalletPhase) {
        let mut phase = self.inner.phase.lock().unwrap();
        if !phase.permits(next) {
            error!(from = %*phase, to = %next, "invalid wallet phase transition");
            return;
        }
        debug!(from = %*phase, to = %next, "wallet phase transition");
        *phase = next;
    }
}
