//! Wallet-state store shared read-only with the withdraw form.

mod wallet;

pub use wallet::*;
