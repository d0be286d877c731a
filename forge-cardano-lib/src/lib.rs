use std::fmt;

use cml_chain::PolicyId;
use cml_crypto::TransactionHash;

pub mod address;
pub mod constants;
pub mod min_utxo;
pub mod output;
pub mod protocol_params;
pub mod transaction;
pub mod value;

pub use address::Address;

/// Name of a native asset, a UTF-8 string of at most 32 bytes.
///
/// An empty name is legal: such an asset is identified by its policy id
/// alone and contributes no name bytes to min-UTxO accounting.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, derive_more::Display)]
pub struct AssetName(String);

impl AssetName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len_bytes(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("asset name exceeds {} bytes", constants::MAX_ASSET_NAME_LEN)]
pub struct AssetNameTooLong;

impl TryFrom<String> for AssetName {
    type Error = AssetNameTooLong;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.len() > constants::MAX_ASSET_NAME_LEN {
            return Err(AssetNameTooLong);
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for AssetName {
    type Error = AssetNameTooLong;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

pub type Token = (PolicyId, AssetName);

#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum AssetClass {
    Native,
    Token(Token),
}

impl AssetClass {
    pub fn into_token(self) -> Option<Token> {
        match self {
            AssetClass::Token(tkn) => Some(tkn),
            AssetClass::Native => None,
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetClass::Native => write!(f, "lovelace"),
            AssetClass::Token((policy, name)) => write!(f, "{}.{}", policy.to_hex(), name),
        }
    }
}

/// Reference to a transaction output, `(tx_hash, output_index)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct OutputRef {
    tx_hash: TransactionHash,
    index: u64,
}

impl OutputRef {
    pub fn new(tx_hash: TransactionHash, index: u64) -> Self {
        Self { tx_hash, index }
    }

    pub fn tx_hash(&self) -> TransactionHash {
        self.tx_hash
    }

    pub fn index(&self) -> u64 {
        self.index
    }
}

impl From<(TransactionHash, u64)> for OutputRef {
    fn from((tx_hash, index): (TransactionHash, u64)) -> Self {
        Self { tx_hash, index }
    }
}

impl fmt::Display for OutputRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.tx_hash.to_hex(), self.index)
    }
}

#[cfg(test)]
mod tests {
    use cml_crypto::TransactionHash;

    use super::{AssetName, OutputRef};

    #[test]
    fn asset_name_rejects_oversized_input() {
        assert!(AssetName::try_from("a".repeat(33)).is_err());
        assert!(AssetName::try_from("a".repeat(32)).is_ok());
    }

    #[test]
    fn output_ref_displays_as_hash_and_index() {
        let oref = OutputRef::new(TransactionHash::from([0u8; TransactionHash::BYTE_COUNT]), 3);
        assert!(oref.to_string().ends_with("#3"));
    }
}
