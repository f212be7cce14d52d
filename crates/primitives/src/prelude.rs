pub use crate::amount::{from_chain_amount, to_chain_amount, AmountInput};
pub use crate::chain::{ChainId, ContractAddr, TxHash};
pub use crate::request::WithdrawRequest;
pub use crate::wallet::{ConnectionStatus, WalletState};
