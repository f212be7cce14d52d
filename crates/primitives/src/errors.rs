//! Errors during parsing/conversion of primitives.

use thiserror::Error;

/// Parsing errors for identifiers handed over by the wallet or the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An identifier that must not be empty was.
    #[error("empty {0}")]
    Empty(&'static str),

    /// The identifier contains whitespace.
    #[error("{0} must not contain whitespace")]
    Whitespace(&'static str),
}

/// Errors converting between display amounts and chain units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount must not be negative")]
    Negative,

    #[error("amount does not fit chain units")]
    Overflow,

    #[error("unsupported decimals {0}")]
    Decimals(u32),
}
