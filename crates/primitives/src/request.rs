use serde::{Deserialize, Serialize};

use crate::{
    amount::{to_chain_amount, AmountInput},
    chain::ContractAddr,
    errors::AmountError,
};

/// Everything the transaction side needs to withdraw from a vault.
///
/// Built at submit time from the form's current input, never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawRequest {
    pub vault_address: ContractAddr,
    pub lp_token: ContractAddr,
    pub amount: AmountInput,
}

impl WithdrawRequest {
    pub fn new(vault_address: ContractAddr, lp_token: ContractAddr, amount: AmountInput) -> Self {
        Self {
            vault_address,
            lp_token,
            amount,
        }
    }

    /// LP token amount to burn, in chain units.
    pub fn chain_amount(&self, decimals: u32) -> Result<u128, AmountError> {
        to_chain_amount(self.amount.amount, decimals)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_chain_amount() {
        let req = WithdrawRequest::new(
            "terra1vault".parse().unwrap(),
            "terra1lp".parse().unwrap(),
            AmountInput::new(Decimal::new(25, 1), "LP"),
        );
        assert_eq!(req.chain_amount(6).unwrap(), 2_500_000);
    }
}
