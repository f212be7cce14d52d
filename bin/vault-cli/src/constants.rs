/// Explorer used for transaction links unless configured otherwise.
pub const DEFAULT_EXPLORER_DOMAIN: &str = "finder.terra.money";

/// Token symbol the amount input starts with.
pub const DEFAULT_TOKEN: &str = "LP";

/// How long each dry-run step pretends to take.
pub const DEFAULT_STEP_DELAY_MS: u64 = 500;

/// Env override for [`DEFAULT_STEP_DELAY_MS`].
pub const STEP_DELAY_ENVVAR: &str = "VAULT_STEP_DELAY_MS";

/// Address the dry-run wallet reports as connected.
pub const DRY_RUN_WALLET: &str = "terra1dryrunwallet";

/// Gas and fee the dry-run submitter "estimates".
pub const DRY_RUN_GAS_LIMIT: u64 = 250_000;
pub const DRY_RUN_FEE_AMOUNT: u128 = 37_500;
pub const DRY_RUN_FEE_DENOM: &str = "uluna";
