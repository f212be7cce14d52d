use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ParseError;

fn check_ident(s: &str, what: &'static str) -> Result<(), ParseError> {
    if s.is_empty() {
        return Err(ParseError::Empty(what));
    }
    if s.chars().any(char::is_whitespace) {
        return Err(ParseError::Whitespace(what));
    }
    Ok(())
}

/// Identifier of the chain the wallet is connected to, ie. `phoenix-1`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(String);

impl ChainId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ChainId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_ident(s, "chain id")?;
        Ok(Self(s.to_owned()))
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Address of a contract, used for both the vault and its LP token.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractAddr(String);

impl ContractAddr {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ContractAddr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_ident(s, "contract address")?;
        Ok(Self(s.to_owned()))
    }
}

impl fmt::Display for ContractAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Transaction hash as reported back by the chain after broadcasting.
///
/// Kept opaque, different chains encode it differently (hex with or without
/// `0x`, upper or lower case).
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxHash(String);

impl TxHash {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TxHash {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_ident(s, "tx hash")?;
        Ok(Self(s.to_owned()))
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_idents() {
        let hash: TxHash = "0xabc".parse().unwrap();
        assert_eq!(hash.to_string(), "0xabc");

        let chain: ChainId = "phoenix-1".parse().unwrap();
        assert_eq!(chain.as_str(), "phoenix-1");

        assert_eq!(
            "".parse::<ContractAddr>(),
            Err(ParseError::Empty("contract address"))
        );
        assert_eq!(
            "terra1 abc".parse::<ContractAddr>(),
            Err(ParseError::Whitespace("contract address"))
        );
    }

    #[test]
    fn test_serde_transparent() {
        let hash: TxHash = "ABCDEF".parse().unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, "\"ABCDEF\"");
    }
}
