//! Lifecycle of a withdraw transaction, from submission to a terminal
//! [`TxStep::Success`] or [`TxStep::Error`].
//!
//! [`TxLifecycle`] is the state machine. It publishes its current status
//! through a watch channel and every transition as an ordered
//! [`LifecycleUpdate`] on a single update channel. The actual construction,
//! signing and broadcasting of the transaction sits behind [`TxSubmitter`].

pub mod errors;
pub mod event;
pub mod failure;
pub mod lifecycle;
pub mod step;
pub mod submitter;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
pub mod traits;

pub use errors::{LifecycleError, LifecycleResult};
pub use event::{LifecycleEvent, LifecycleUpdate};
pub use failure::{FailureKind, TxFailure};
pub use lifecycle::{TxLifecycle, TxStatus};
pub use step::TxStep;
pub use submitter::{FeeEstimate, SignedTx, TxSubmitter};
pub use traits::TransactionLifecycle;
#[cfg(any(test, feature = "test_utils"))]
pub use traits::MockTransactionLifecycle;
