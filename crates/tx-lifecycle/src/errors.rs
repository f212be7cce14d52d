//! Errors returned synchronously by lifecycle operations.

use thiserror::Error;

use crate::step::TxStep;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// Submit was called while the lifecycle was not [`TxStep::Ready`].
    #[error("lifecycle busy in step {0}")]
    Busy(TxStep),

    /// Reset was called while a submission is still in flight.
    #[error("cannot reset while {0}")]
    InFlight(TxStep),

    /// The state machine refused a transition.
    #[error("invalid transition {from} -> {to}")]
    InvalidTransition { from: TxStep, to: TxStep },

    /// Submit needs a tokio runtime to drive the submission.
    #[error("no async runtime to drive the submission")]
    NoRuntime,
}

pub type LifecycleResult<T> = Result<T, LifecycleError>;
