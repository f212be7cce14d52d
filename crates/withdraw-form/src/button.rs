use serde::Serialize;
use vault_primitives::prelude::{AmountInput, ConnectionStatus};
use vault_tx_lifecycle::TxStep;

pub const CONNECT_WALLET: &str = "Connect Wallet";
pub const ENTER_AMOUNT: &str = "Enter Amount";
pub const WITHDRAW: &str = "Withdraw";

/// Picks the action button label.
///
/// Connection dominates the amount, which dominates whatever label the
/// lifecycle wants to show.
pub fn compute_button_label(
    status: ConnectionStatus,
    amount: &AmountInput,
    lifecycle_label: Option<&str>,
) -> String {
    if !status.is_connected() {
        CONNECT_WALLET.to_owned()
    } else if amount.is_empty() {
        ENTER_AMOUNT.to_owned()
    } else if let Some(label) = lifecycle_label {
        label.to_owned()
    } else {
        WITHDRAW.to_owned()
    }
}

/// What the action button looks like.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ButtonState {
    pub label: String,
    pub enabled: bool,
    pub loading: bool,
}

impl ButtonState {
    /// Derives the button from its three inputs and nothing else.
    pub fn derive(
        status: ConnectionStatus,
        amount: &AmountInput,
        step: TxStep,
        lifecycle_label: Option<&str>,
    ) -> Self {
        Self {
            label: compute_button_label(status, amount, lifecycle_label),
            enabled: status.is_connected() && !amount.is_empty() && step == TxStep::Ready,
            loading: step.is_in_flight(),
        }
    }
}
