/// Number of decimals used by chain-native token amounts (micro units).
pub const DEFAULT_DECIMALS: u32 = 6;

/// Largest decimals value we accept, `10^18` still fits a `u64` scale factor.
pub const MAX_DECIMALS: u32 = 18;

/// Chain the wallet store starts on before the wallet reports one.
pub const DEFAULT_CHAIN_ID: &str = "phoenix-1";
