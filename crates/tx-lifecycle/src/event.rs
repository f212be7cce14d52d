use vault_primitives::prelude::TxHash;

use crate::{failure::TxFailure, step::TxStep};

/// Something the lifecycle wants its observer to know about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Moved to a non-terminal step, `label` is the in-progress label to show.
    StepChanged {
        step: TxStep,
        label: Option<String>,
    },

    /// The transaction was accepted, the step is now [`TxStep::Success`].
    Success { tx_hash: TxHash },

    /// The submission failed, the step is now [`TxStep::Error`].
    Error { failure: TxFailure },
}

impl LifecycleEvent {
    /// Step the lifecycle is in right after this event.
    pub fn step(&self) -> TxStep {
        match self {
            LifecycleEvent::StepChanged { step, .. } => *step,
            LifecycleEvent::Success { .. } => TxStep::Success,
            LifecycleEvent::Error { .. } => TxStep::Error,
        }
    }
}

/// Event tagged with its position in the lifecycle's history.
///
/// `seq` strictly increases for the lifetime of a lifecycle, across resets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifecycleUpdate {
    pub seq: u64,
    pub event: LifecycleEvent,
}

impl LifecycleUpdate {
    pub fn new(seq: u64, event: LifecycleEvent) -> Self {
        Self { seq, event }
    }
}
