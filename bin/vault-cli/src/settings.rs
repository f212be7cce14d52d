use std::{
    fs::{create_dir_all, File},
    io,
    path::PathBuf,
    str::FromStr,
};

use config::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use terrors::OneOf;
use vault_common::env::parse_env_or;
use vault_primitives::{
    constants::{DEFAULT_CHAIN_ID, DEFAULT_DECIMALS},
    errors::ParseError,
    prelude::{ChainId, ContractAddr},
};

use crate::constants::{
    DEFAULT_EXPLORER_DOMAIN, DEFAULT_STEP_DELAY_MS, DEFAULT_TOKEN, DRY_RUN_WALLET,
    STEP_DELAY_ENVVAR,
};

#[derive(Serialize, Deserialize, Default)]
pub struct SettingsFromFile {
    pub explorer_domain: Option<String>,
    pub chain_id: Option<String>,
    pub decimals: Option<u32>,
    pub default_token: Option<String>,
    pub vault_address: Option<String>,
    pub lp_token: Option<String>,
    pub wallet_address: Option<String>,
    pub step_delay_ms: Option<u64>,
}

/// Settings struct filled with either config values or
/// opinionated defaults
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Settings {
    pub explorer_domain: String,
    pub chain_id: ChainId,
    pub decimals: u32,
    pub default_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault_address: Option<ContractAddr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lp_token: Option<ContractAddr>,
    pub wallet_address: String,
    pub step_delay_ms: u64,
    pub config_file: PathBuf,
}

impl Settings {
    pub fn load() -> Result<Self, OneOf<(io::Error, config::ConfigError, ParseError)>> {
        let proj_dirs = ProjectDirs::from("money", "vaults", "vault")
            .ok_or_else(|| OneOf::new(io::Error::other("no home directory")))?;
        let config_file = proj_dirs.config_dir().to_owned().join("config.toml");
        create_dir_all(proj_dirs.config_dir()).map_err(OneOf::new)?;
        let _ = File::create_new(&config_file);
        let from_file = Config::builder()
            .add_source(config::File::from(config_file.clone()))
            .build()
            .map_err(OneOf::new)?
            .try_deserialize::<SettingsFromFile>()
            .map_err(OneOf::new)?;
        Self::from_file(from_file, config_file).map_err(OneOf::new)
    }

    /// Fills in defaults for everything the file left out.
    pub fn from_file(from_file: SettingsFromFile, config_file: PathBuf) -> Result<Self, ParseError> {
        let parse_addr = |a: Option<String>| a.map(|a| ContractAddr::from_str(&a)).transpose();
        Ok(Settings {
            explorer_domain: from_file
                .explorer_domain
                .unwrap_or(DEFAULT_EXPLORER_DOMAIN.to_owned()),
            chain_id: ChainId::from_str(
                from_file.chain_id.as_deref().unwrap_or(DEFAULT_CHAIN_ID),
            )?,
            decimals: from_file.decimals.unwrap_or(DEFAULT_DECIMALS),
            default_token: from_file
                .default_token
                .unwrap_or(DEFAULT_TOKEN.to_owned()),
            vault_address: parse_addr(from_file.vault_address)?,
            lp_token: parse_addr(from_file.lp_token)?,
            wallet_address: from_file
                .wallet_address
                .unwrap_or(DRY_RUN_WALLET.to_owned()),
            step_delay_ms: from_file.step_delay_ms.unwrap_or_else(|| {
                parse_env_or(STEP_DELAY_ENVVAR, DEFAULT_STEP_DELAY_MS)
            }),
            config_file,
        })
    }
}
