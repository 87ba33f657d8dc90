//! Record identity: a type prefix plus a key (`BOM-1`, `OP-01J8...`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use ulid::Ulid;

/// Record type prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityPrefix {
    /// Style (the project a dossier describes)
    Style,
    /// Bill-of-materials line
    Bom,
    /// Sewing operation
    Op,
    /// Packaging line
    Pk,
    /// Decision log entry
    D,
    /// Request for quotation
    Rfq,
    /// Vendor quote
    Q,
    /// Engineering change request
    Ecr,
    /// Engineering change order
    Eco,
    /// Physical sample
    Smp,
    /// Lab test result
    Lab,
    /// Browzwear 3D asset
    Bw,
}

impl EntityPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::Style => "STYLE",
            EntityPrefix::Bom => "BOM",
            EntityPrefix::Op => "OP",
            EntityPrefix::Pk => "PK",
            EntityPrefix::D => "D",
            EntityPrefix::Rfq => "RFQ",
            EntityPrefix::Q => "Q",
            EntityPrefix::Ecr => "ECR",
            EntityPrefix::Eco => "ECO",
            EntityPrefix::Smp => "SMP",
            EntityPrefix::Lab => "LAB",
            EntityPrefix::Bw => "BW",
        }
    }

    pub fn all() -> &'static [EntityPrefix] {
        &[
            EntityPrefix::Style,
            EntityPrefix::Bom,
            EntityPrefix::Op,
            EntityPrefix::Pk,
            EntityPrefix::D,
            EntityPrefix::Rfq,
            EntityPrefix::Q,
            EntityPrefix::Ecr,
            EntityPrefix::Eco,
            EntityPrefix::Smp,
            EntityPrefix::Lab,
            EntityPrefix::Bw,
        ]
    }
}

impl fmt::Display for EntityPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityPrefix {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == upper)
            .ok_or_else(|| IdParseError::InvalidPrefix(s.to_string()))
    }
}

/// A record identifier: prefix, a dash, then a key.
///
/// Keys from imported data are kept verbatim (`BOM-1`, `STYLE-SS25-TEECREW-001`);
/// ids minted locally use a ULID key so concurrent sessions never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId {
    prefix: EntityPrefix,
    key: String,
}

impl EntityId {
    /// Mint a fresh id with the given prefix
    pub fn new(prefix: EntityPrefix) -> Self {
        Self {
            prefix,
            key: Ulid::new().to_string(),
        }
    }

    pub fn from_parts(prefix: EntityPrefix, key: impl Into<String>) -> Result<Self, IdParseError> {
        let key = key.into();
        validate_key(&key)?;
        Ok(Self { prefix, key })
    }

    /// Id for built-in data whose keys are literals
    pub(crate) fn fixed(prefix: EntityPrefix, key: &str) -> Self {
        Self {
            prefix,
            key: key.to_string(),
        }
    }

    pub fn prefix(&self) -> EntityPrefix {
        self.prefix
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        s.parse()
    }
}

fn validate_key(key: &str) -> Result<(), IdParseError> {
    if key.is_empty() {
        return Err(IdParseError::EmptyKey);
    }
    if let Some(bad) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_' || *c == '.'))
    {
        return Err(IdParseError::InvalidKey(key.to_string(), bad));
    }
    Ok(())
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.prefix, self.key)
    }
}

impl FromStr for EntityId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix_str, key) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| IdParseError::MissingDelimiter(s.to_string()))?;

        let prefix = prefix_str.parse()?;
        Self::from_parts(prefix, key)
    }
}

impl Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing record ids
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdParseError {
    #[error("invalid record prefix: '{0}' (valid: STYLE, BOM, OP, PK, D, RFQ, Q, ECR, ECO, SMP, LAB, BW)")]
    InvalidPrefix(String),

    #[error("missing '-' delimiter in record id: '{0}'")]
    MissingDelimiter(String),

    #[error("record id has an empty key")]
    EmptyKey,

    #[error("invalid character '{1}' in record key '{0}'")]
    InvalidKey(String, char),
}
