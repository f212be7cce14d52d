//! Publishes the wallet connection status and active chain.
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch::{self, error::RecvError};
use tracing::warn;
use vault_primitives::prelude::*;

#[derive(Debug, Error)]
pub enum StatusError {
    #[error("wallet store closed")]
    Closed(#[from] RecvError),
}

/// A wrapper around the wallet state sender and receiver.
///
/// Cloned handles all point at the same store, whoever holds the channel can
/// publish.
#[derive(Clone, Debug)]
pub struct WalletChannel {
    /// Shared reference to the state sender.
    sender: Arc<watch::Sender<WalletState>>,
    /// Receiver the getters read from.
    receiver: watch::Receiver<WalletState>,
}

impl WalletChannel {
    /// Creates a new `WalletChannel` starting from `initial`.
    pub fn new(initial: WalletState) -> Self {
        let (tx, rx) = watch::channel(initial);
        Self {
            sender: Arc::new(tx),
            receiver: rx,
        }
    }

    // Receiver methods

    /// Gets the latest [`WalletState`].
    pub fn get_wallet_state(&self) -> WalletState {
        self.receiver.borrow().clone()
    }

    /// Gets the latest [`ConnectionStatus`].
    pub fn get_connection_status(&self) -> ConnectionStatus {
        self.receiver.borrow().status
    }

    /// Gets the chain the wallet is currently on.
    pub fn get_chain_id(&self) -> ChainId {
        self.receiver.borrow().chain_id.clone()
    }

    /// Create a subscription to the wallet state watcher.
    pub fn subscribe(&self) -> watch::Receiver<WalletState> {
        self.sender.subscribe()
    }

    /// Waits until the wallet reports it's connected and returns that state.
    pub async fn wait_until_connected(&self) -> Result<WalletState, StatusError> {
        let mut rx = self.receiver.clone();
        let state = rx.wait_for(|st| st.status.is_connected()).await?;
        Ok(state.clone())
    }

    // Sender methods

    /// Replaces the whole wallet state. Logs a warning if every receiver is
    /// dropped.
    pub fn update_wallet_state(&self, state: WalletState) {
        if self.sender.send(state).is_err() {
            warn!("wallet state receiver dropped");
        }
    }

    /// Updates only the connection status, leaving chain and address alone.
    pub fn update_connection_status(&self, status: ConnectionStatus) {
        self.sender.send_if_modified(|st| {
            if st.status == status {
                return false;
            }
            st.status = status;
            true
        });
    }
}
