use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chain::ChainId;

/// Connection status as published by the wallet store.
///
/// Serialized with the store's own identifiers, ie. `@wallet-state/connected`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ConnectionStatus {
    #[serde(rename = "@wallet-state/idle")]
    Idle,
    #[serde(rename = "@wallet-state/connecting")]
    Connecting,
    #[serde(rename = "@wallet-state/connected")]
    Connected,
    #[serde(rename = "@wallet-state/disconnected")]
    Disconnected,
    #[serde(rename = "@wallet-state/error")]
    Error,
}

impl ConnectionStatus {
    pub const ALL: [ConnectionStatus; 5] = [
        ConnectionStatus::Idle,
        ConnectionStatus::Connecting,
        ConnectionStatus::Connected,
        ConnectionStatus::Disconnected,
        ConnectionStatus::Error,
    ];

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConnectionStatus::Idle => "idle",
            ConnectionStatus::Connecting => "connecting",
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Disconnected => "disconnected",
            ConnectionStatus::Error => "error",
        };
        f.write_str(s)
    }
}

/// Snapshot of the wallet store that the form reads.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct WalletState {
    pub status: ConnectionStatus,
    pub chain_id: ChainId,
    pub address: Option<String>,
}

impl WalletState {
    pub fn disconnected(chain_id: ChainId) -> Self {
        Self {
            status: ConnectionStatus::Disconnected,
            chain_id,
            address: None,
        }
    }

    pub fn connected(chain_id: ChainId, address: impl Into<String>) -> Self {
        Self {
            status: ConnectionStatus::Connected,
            chain_id,
            address: Some(address.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let s = serde_json::to_string(&ConnectionStatus::Connected).unwrap();
        assert_eq!(s, "\"@wallet-state/connected\"");

        let st: ConnectionStatus = serde_json::from_str("\"@wallet-state/disconnected\"").unwrap();
        assert_eq!(st, ConnectionStatus::Disconnected);
    }

    #[test]
    fn test_only_connected_is_connected() {
        let connected: Vec<_> = ConnectionStatus::ALL
            .iter()
            .filter(|s| s.is_connected())
            .collect();
        assert_eq!(connected, vec![&ConnectionStatus::Connected]);
    }
}
