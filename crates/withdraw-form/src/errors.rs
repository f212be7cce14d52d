use thiserror::Error;
use vault_tx_lifecycle::{LifecycleError, TxFailure, TxStep};

/// Reasons a withdraw did not go through.
///
/// The first three are guard failures, nothing was forwarded to the
/// lifecycle and the button was already disabled for them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WithdrawError {
    #[error("wallet not connected")]
    NotConnected,

    #[error("no amount entered")]
    ZeroAmount,

    #[error("transaction already in progress ({0})")]
    LifecycleBusy(TxStep),

    #[error("withdraw failed: {0}")]
    LifecycleFailure(TxFailure),

    #[error("lifecycle: {0}")]
    Lifecycle(LifecycleError),

    #[error("lifecycle update channel closed")]
    UpdatesClosed,
}

impl From<LifecycleError> for WithdrawError {
    fn from(e: LifecycleError) -> Self {
        match e {
            LifecycleError::Busy(step) => WithdrawError::LifecycleBusy(step),
            e => WithdrawError::Lifecycle(e),
        }
    }
}

pub type WithdrawResult<T> = Result<T, WithdrawError>;
