//! Wallet acquisition state machine.
//!
//! Acquisition moves through named states with an explicit transition
//! table; the restore-to-create fallback is a first-class transition, not
//! an exception handler's side effect.
//!
//! ```text
//! Unloaded ──secret found──> Restoring ──ok──> Ready
//!     │                          │
//!     │                        fail
//!     │                          ▼
//!     └──────no secret──────> Creating ──ok──> Ready
//!                                │
//!                              fail
//!                                ▼
//!                             Failed
//! ```

use std::fmt;

/// Where the session stands in acquiring its wallet handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletPhase {
    /// Startup; the secret store has not been consulted yet.
    Unloaded,
    /// A persisted secret was found; the collaborator is restoring it.
    Restoring,
    /// A brand-new wallet is being created (no secret, or restore failed).
    Creating,
    /// A live wallet handle exists.
    Ready,
    /// Wallet creation failed. Terminal; no retry is scheduled and the
    /// view stays in loading.
    Failed,
}

impl WalletPhase {
    /// Whether moving from `self` to `next` is a named transition.
    pub fn permits(self, next: WalletPhase) -> bool {
        use WalletPhase::*;
        matches!(
            (self, next),
            (Unloaded, Restoring)
                | (Unloaded, Creating)
                | (Restoring, Ready)
                | (Restoring, Creating)
                | (Creating, Ready)
                | (Creating, Failed)
        )
    }

    /// Whether acquisition has finished, successfully or not.
    pub fn is_terminal(self) -> bool {
        matches!(self, WalletPhase::Ready | WalletPhase::Failed)
    }
}

impl fmt::Display for WalletPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unloaded => write!(f, "unloaded"),
            Self::Restoring => write!(f, "restoring"),
            Self::Creating => write!(f, "creating"),
            Self::Ready => write!(f, "ready"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
