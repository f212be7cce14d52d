use vault_primitives::prelude::WithdrawRequest;

use crate::{errors::LifecycleResult, step::TxStep};

/// The contract the withdraw form relies on.
///
/// `submit` must move the lifecycle from [`TxStep::Ready`] to
/// [`TxStep::Estimating`] before returning, or fail without touching the state.
#[cfg_attr(any(test, feature = "test_utils"), mockall::automock)]
pub trait TransactionLifecycle {
    /// Seq of the last update the lifecycle published.
    fn seq(&self) -> u64;

    /// Current step of the state machine.
    fn current_step(&self) -> TxStep;

    /// Custom label for the action button, if the lifecycle has one for the
    /// current step.
    fn button_label(&self) -> Option<String>;

    /// Starts a new submission. Fails fast unless ready.
    fn submit(&mut self, request: WithdrawRequest) -> LifecycleResult<()>;

    /// Returns to [`TxStep::Ready`] after a terminal step. Not allowed while a
    /// submission is in flight.
    fn reset(&mut self) -> LifecycleResult<()>;
}
