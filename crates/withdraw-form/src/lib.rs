//! Withdraw-from-vault form logic.
//!
//! The [`WithdrawFormController`] owns the amount the user typed, derives the
//! action button from the wallet connection, the amount and the transaction
//! step, and forwards submissions to a
//! [`TransactionLifecycle`](vault_tx_lifecycle::TransactionLifecycle).

pub mod asset_input;
pub mod button;
pub mod controller;
pub mod errors;
pub mod link;
pub mod notify;

pub use button::{compute_button_label, ButtonState};
pub use controller::{FormConfig, WithdrawFormController};
pub use errors::WithdrawError;
pub use link::{pretty_tx_hash, FinderLink};
pub use notify::{Notification, NotificationSink, Position, Severity};
#[cfg(any(test, feature = "test_utils"))]
pub use notify::RecordingSink;
