use std::time::Duration;

use serde::Serialize;
use vault_primitives::prelude::{ChainId, TxHash};

use crate::link::FinderLink;

pub const WITHDRAW_SUCCESS_TITLE: &str = "Withdraw from Vault Success.";

/// How long the success toast stays up.
pub const SUCCESS_DURATION: Duration = Duration::from_millis(9000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Top,
    TopRight,
    Bottom,
    BottomRight,
}

/// Toast-style notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    /// Rendered description, for tx notifications this carries the Finder link.
    pub description: String,
    pub severity: Severity,
    pub duration: Duration,
    pub position: Position,
    pub closable: bool,
}

impl Notification {
    /// Notification shown once a withdraw lands on chain.
    pub fn withdraw_success(tx_hash: &TxHash, chain_id: &ChainId, explorer_domain: &str) -> Self {
        Self {
            title: WITHDRAW_SUCCESS_TITLE.to_owned(),
            description: FinderLink::from((tx_hash, chain_id, explorer_domain)).to_string(),
            severity: Severity::Success,
            duration: SUCCESS_DURATION,
            position: Position::TopRight,
            closable: true,
        }
    }
}

/// Where the form sends user-facing notifications.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Keeps every notification, for tests.
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub notifications: Vec<Notification>,
}

#[cfg(any(test, feature = "test_utils"))]
impl NotificationSink for RecordingSink {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_withdraw_success_toast() {
        let n = Notification::withdraw_success(
            &"0xabc".parse().unwrap(),
            &"phoenix-1".parse().unwrap(),
            "finder.terra.money",
        );
        assert_eq!(n.title, WITHDRAW_SUCCESS_TITLE);
        assert_eq!(n.severity, Severity::Success);
        assert_eq!(n.duration, Duration::from_secs(9));
        assert_eq!(n.position, Position::TopRight);
        assert!(n.closable);
        assert!(n.description.contains("0xabc"));
        assert!(n.description.contains("phoenix-1"));
    }
}
