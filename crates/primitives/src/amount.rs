//! Amounts as the user enters them and their conversion to chain units.

use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{Deserialize, Serialize};

use crate::{constants::MAX_DECIMALS, errors::AmountError};

/// Amount the user wants to withdraw, in display units, together with the
/// symbol of the token it is denominated in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountInput {
    pub amount: Decimal,
    pub token_symbol: String,
}

impl AmountInput {
    pub fn new(amount: Decimal, token_symbol: impl Into<String>) -> Self {
        Self {
            amount,
            token_symbol: token_symbol.into(),
        }
    }

    /// An input with nothing entered yet.
    pub fn empty(token_symbol: impl Into<String>) -> Self {
        Self::new(Decimal::ZERO, token_symbol)
    }

    /// Zero means "no entry".
    pub fn is_empty(&self) -> bool {
        self.amount.is_zero()
    }

    /// Same token, amount back to zero.
    pub fn cleared(&self) -> Self {
        Self::empty(self.token_symbol.clone())
    }
}

fn scale(decimals: u32) -> Result<Decimal, AmountError> {
    if decimals > MAX_DECIMALS {
        return Err(AmountError::Decimals(decimals));
    }
    Ok(Decimal::from(10u64.pow(decimals)))
}

/// Converts a raw chain amount (ie. micro units) into display units.
pub fn from_chain_amount(raw: u128, decimals: u32) -> Result<Decimal, AmountError> {
    if decimals > MAX_DECIMALS {
        return Err(AmountError::Decimals(decimals));
    }
    let raw = i128::try_from(raw).map_err(|_| AmountError::Overflow)?;
    Decimal::try_from_i128_with_scale(raw, decimals)
        .map(|d| d.normalize())
        .map_err(|_| AmountError::Overflow)
}

/// Converts display units into raw chain units, truncating any precision the
/// chain can't represent.
pub fn to_chain_amount(amount: Decimal, decimals: u32) -> Result<u128, AmountError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AmountError::Negative);
    }
    amount
        .checked_mul(scale(decimals)?)
        .map(|d| d.trunc())
        .and_then(|d| d.to_u128())
        .ok_or(AmountError::Overflow)
}
