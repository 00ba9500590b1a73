//! EVM token contract addresses

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const ADDRESS_LEN: usize = 42;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid token address. Must be 42 characters starting with 0x (got {0} characters)")]
    WrongLength(usize),

    #[error("Invalid token address. Must start with 0x")]
    MissingPrefix,

    #[error("Invalid token address. Contains non-hex character '{0}'")]
    NotHex(char),
}

/// A validated, lowercased `0x`-prefixed contract address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TokenAddress(String);

impl TokenAddress {
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        let trimmed = raw.trim();

        let len = trimmed.chars().count();
        if len != ADDRESS_LEN {
            return Err(AddressError::WrongLength(len));
        }

        let lowered = trimmed.to_ascii_lowercase();
        let Some(hex) = lowered.strip_prefix("0x") else {
            return Err(AddressError::MissingPrefix);
        };

        if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(AddressError::NotHex(bad));
        }

        Ok(Self(lowered))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TokenAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TokenAddress {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TokenAddress> for String {
    fn from(address: TokenAddress) -> Self {
        address.0
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
