//! Wallet bootstrap: secret loading and wallet acquisition.
//!
//! Runs exactly once per session. Every collaborator failure is caught at
//! its call site and logged; the only automatic corrective action is the
//! restore-to-create fallback, which always leaves the session with *some*
//! usable wallet at the cost of silently abandoning the unrestorable one.

use secret_store::SecretStore;
use spark_client::SparkService;
use tracing::{error, info, warn};

use crate::{Session, ViewState, WalletPhase};

impl<S, P> Session<S, P>
where
    S: SparkService,
    P: SecretStore,
{
    /// Runs the full session sequence: bootstrap the wallet, then (on
    /// success) activate the invoice/balance poller.
    ///
    /// Returns once the poller is armed or acquisition has failed; the
    /// poller itself keeps running in the background until shutdown.
    pub async fn run(&self) {
        if let Some(wallet) = self.bootstrap().await {
            self.start_polling(wallet);
        }
    }

    /// Acquires the wallet handle: restore from the persisted secret if
    /// one exists, otherwise (or on restore failure) create a new wallet
    /// and persist its secret.
    ///
    /// Runs once per session; a second call is a logged no-op returning
    /// `None`.
    pub async fn bootstrap(&self) -> Option<S::Wallet> {
        if self.phase() != WalletPhase::Unloaded {
            warn!(phase = %self.phase(), "bootstrap already ran for this session");
            return None;
        }

        let stored = match self.inner.secrets.load() {
            Ok(s) => s,
            Err(e) => {
                // Treated the same as an absent secret: the session still
                // ends up with a usable wallet.
                warn!(error = %e, "secret store read failed; creating a new wallet");
                None
            }
        };

        let wallet = match stored {
            Some(secret) => {
                self.transition(WalletPhase::Restoring);
                match self.inner.spark.restore(&secret).await {
                    Ok(wallet) => {
                        // The secret is already persisted; do not rewrite it.
                        info!("wallet restored from persisted secret");
                        self.transition(WalletPhase::Ready);
                        Some(wallet)
                    }
                    Err(e) => {
                        warn!(error = %e, "restore failed; falling back to a new wallet");
                        self.transition(WalletPhase::Creating);
                        self.create_wallet().await
                    }
                }
            }
            None => {
                self.transition(WalletPhase::Creating);
                self.create_wallet().await
            }
        };

        if wallet.is_some() {
            self.inner.view.send_replace(ViewState::wallet_ready());
        }
        wallet
    }

    /// Creates a brand-new wallet and persists its freshly generated
    /// secret, overwriting any prior value.
    async fn create_wallet(&self) -> Option<S::Wallet> {
        match self.inner.spark.create().await {
            Ok((wallet, mnemonic)) => {
                if let Err(e) = self.inner.secrets.store(&mnemonic) {
                    // The wallet is usable this session; the next start
                    // will simply create another one.
                    error!(error = %e, "failed to persist wallet secret");
                }
                info!("new wallet created");
                self.transition(WalletPhase::Ready);
                Some(wallet)
            }
            Err(e) => {
                // Terminal: no retry is scheduled, the view stays loading.
                error!(error = %e, "wallet creation failed; session has no wallet");
                self.transition(WalletPhase::Failed);
                None
            }
        }
    }
}
