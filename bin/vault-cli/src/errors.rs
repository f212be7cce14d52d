use thiserror::Error;
use vault_primitives::errors::ParseError;
use vault_withdraw_form::{asset_input::InputError, WithdrawError};

#[derive(Debug, Error)]
pub enum UserInputError {
    #[error("invalid amount: {0}")]
    InvalidAmount(#[from] InputError),

    #[error("invalid contract address: {0}")]
    InvalidAddress(ParseError),

    #[error("no vault address. Pass --vault or set vault_address in the config.")]
    MissingVault,

    #[error("no LP token address. Pass --lp-token or set lp_token in the config.")]
    MissingLpToken,

    #[error("unknown tx step '{0}'. Use --help to see available options.")]
    UnknownStep(String),

    #[error("unknown wallet status '{0}'. Use --help to see available options.")]
    UnknownStatus(String),

    #[error("cannot withdraw: {0}")]
    Rejected(WithdrawError),
}

#[derive(Debug, Error)]
pub enum InternalError {
    #[error("withdraw failed: {0}")]
    Withdraw(WithdrawError),

    #[error("could not serialize output: {0}")]
    Serialize(String),
}
