//! Sanitising what the user types into the amount field.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;
use vault_primitives::{amount::from_chain_amount, errors::AmountError, prelude::AmountInput};

/// Gas reserve kept back from the max amount unless slack is ignored.
pub const GAS_SLACK: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("amount must not be negative")]
    Negative,

    #[error("amount exceeds balance of {0}")]
    ExceedsBalance(Decimal),

    #[error("balance: {0}")]
    Balance(#[from] AmountError),
}

/// Parses the amount field. Blank input is "no entry", not an error.
pub fn parse_amount(text: &str, token_symbol: &str) -> Result<AmountInput, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(AmountInput::empty(token_symbol));
    }

    let amount = Decimal::from_str(text).map_err(|_| InputError::NotANumber(text.to_owned()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(InputError::Negative);
    }
    Ok(AmountInput::new(amount, token_symbol))
}

/// Largest amount the user may pick for a `balance` in chain units.
///
/// Withdrawing burns LP tokens so the form ignores slack, native token inputs
/// keep [`GAS_SLACK`] back for fees.
pub fn max_amount(balance: u128, decimals: u32, ignore_slack: bool) -> Result<Decimal, InputError> {
    let balance = from_chain_amount(balance, decimals)?;
    if ignore_slack {
        return Ok(balance);
    }
    Ok((balance - GAS_SLACK).max(Decimal::ZERO))
}

/// Checks `input` against the balance the asset input was given.
pub fn check_within_balance(
    input: &AmountInput,
    balance: u128,
    decimals: u32,
) -> Result<(), InputError> {
    let max = max_amount(balance, decimals, true)?;
    if input.amount > max {
        return Err(InputError::ExceedsBalance(max));
    }
    Ok(())
}
