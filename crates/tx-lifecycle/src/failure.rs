use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad reason a submission failed, the form only needs enough to pick a
/// label.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    InsufficientFunds,
    Rejected,
    Estimation,
    Broadcast,
    Other,
}

impl FailureKind {
    pub fn button_label(&self) -> &'static str {
        match self {
            FailureKind::InsufficientFunds => "Insufficient Funds",
            FailureKind::Rejected => "Rejected",
            FailureKind::Estimation => "Failed to estimate fees",
            FailureKind::Broadcast => "Failed to broadcast",
            FailureKind::Other => "Transaction Failed",
        }
    }
}

/// Failure reported by the transaction side.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TxFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl TxFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Other, message)
    }

    pub fn button_label(&self) -> &'static str {
        self.kind.button_label()
    }
}

impl fmt::Display for TxFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for TxFailure {}
