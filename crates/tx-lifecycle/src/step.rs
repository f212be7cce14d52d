use std::fmt;

use serde::{Deserialize, Serialize};

/// Phase of a withdraw transaction as the form sees it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TxStep {
    /// Idle, a new submission can be accepted.
    #[default]
    Ready,
    /// Simulating the transaction to get a fee.
    Estimating,
    /// Handed to the wallet for approval and signing.
    Posting,
    /// Signed and sent to the chain, waiting for the hash.
    Broadcasting,
    /// Accepted by the chain. Terminal for this attempt.
    Success,
    /// Failed somewhere along the way. Terminal for this attempt.
    Error,
}

impl TxStep {
    pub const ALL: [TxStep; 6] = [
        TxStep::Ready,
        TxStep::Estimating,
        TxStep::Posting,
        TxStep::Broadcasting,
        TxStep::Success,
        TxStep::Error,
    ];

    /// A submission is being worked on.
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            TxStep::Estimating | TxStep::Posting | TxStep::Broadcasting
        )
    }

    /// The attempt is over, only a reset leaves this step.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TxStep::Success | TxStep::Error)
    }

    /// Checks if the state machine may move from `self` to `next`.
    pub fn can_advance_to(&self, next: TxStep) -> bool {
        use TxStep::*;
        match (self, next) {
            (Ready, Estimating)
            | (Estimating, Posting)
            | (Posting, Broadcasting)
            | (Broadcasting, Success) => true,
            (from, Error) => from.is_in_flight(),
            (from, Ready) => from.is_terminal(),
            _ => false,
        }
    }

    /// Label shown on the action button while this step is in progress.
    pub fn progress_label(&self) -> Option<&'static str> {
        match self {
            TxStep::Estimating => Some("Estimating Fees"),
            TxStep::Posting => Some("Waiting for Approval"),
            TxStep::Broadcasting => Some("Broadcasting"),
            _ => None,
        }
    }
}

impl fmt::Display for TxStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TxStep::Ready => "ready",
            TxStep::Estimating => "estimating",
            TxStep::Posting => "posting",
            TxStep::Broadcasting => "broadcasting",
            TxStep::Success => "success",
            TxStep::Error => "error",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for TxStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TxStep::ALL
            .into_iter()
            .find(|step| step.to_string() == s.to_lowercase())
            .ok_or_else(|| format!("unknown tx step '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_transitions() {
        let path = [
            TxStep::Ready,
            TxStep::Estimating,
            TxStep::Posting,
            TxStep::Broadcasting,
            TxStep::Success,
            TxStep::Ready,
        ];
        for pair in path.windows(2) {
            assert!(
                pair[0].can_advance_to(pair[1]),
                "{} -> {} should be allowed",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_error_only_from_in_flight() {
        for step in TxStep::ALL {
            assert_eq!(step.can_advance_to(TxStep::Error), step.is_in_flight());
        }
    }

    #[test]
    fn test_ready_only_from_terminal() {
        for step in TxStep::ALL {
            assert_eq!(step.can_advance_to(TxStep::Ready), step.is_terminal());
        }
    }

    #[test]
    fn test_no_skipping_steps() {
        assert!(!TxStep::Ready.can_advance_to(TxStep::Posting));
        assert!(!TxStep::Ready.can_advance_to(TxStep::Success));
        assert!(!TxStep::Estimating.can_advance_to(TxStep::Broadcasting));
        assert!(!TxStep::Posting.can_advance_to(TxStep::Success));
        assert!(!TxStep::Success.can_advance_to(TxStep::Estimating));
        assert!(!TxStep::Error.can_advance_to(TxStep::Estimating));
    }

    #[test]
    fn test_progress_labels() {
        for step in TxStep::ALL {
            assert_eq!(step.progress_label().is_some(), step.is_in_flight());
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        assert_eq!("Broadcasting".parse::<TxStep>().unwrap(), TxStep::Broadcasting);
        assert!("mining".parse::<TxStep>().is_err());
    }
}
