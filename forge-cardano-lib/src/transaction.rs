use cml_chain::Coin;
use linked_hash_map::LinkedHashMap;

use crate::address::Address;
use crate::value::Value;
use crate::{OutputRef, Token};

/// One planned transaction output: destination plus the value it carries.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TxOutSpec {
    pub address: Address,
    pub value: Value,
}

impl TxOutSpec {
    pub fn new(address: Address, value: Value) -> Self {
        Self { address, value }
    }
}

/// Signed mint deltas keyed by token: positive quantities create supply,
/// negative quantities burn it. Insertion-ordered.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct MintDelta(LinkedHashMap<Token, i64>);

impl MintDelta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, token: Token, delta: i64) {
        *self.0.entry(token).or_insert(0) += delta;
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Token, i64)> {
        self.0.iter().map(|(token, delta)| (token, *delta))
    }
}

/// Opaque reference to a metadata payload the external builder will attach.
#[derive(Debug, Clone, Eq, PartialEq, derive_more::Display, derive_more::From)]
pub struct MetadataRef(String);

impl MetadataRef {
    pub fn new<S: Into<String>>(reference: S) -> Self {
        Self(reference.into())
    }
}

/// Opaque reference to a certificate the external builder will attach.
#[derive(Debug, Clone, Eq, PartialEq, derive_more::Display, derive_more::From)]
pub struct CertificateRef(String);

impl CertificateRef {
    pub fn new<S: Into<String>>(reference: S) -> Self {
        Self(reference.into())
    }
}

/// A zero-fee, zero-validity transaction shape built only so the fee
/// oracle can size it.
#[derive(Debug, Clone)]
pub struct TxDraft {
    pub inputs: Vec<OutputRef>,
    pub outputs: Vec<TxOutSpec>,
    pub mint: Option<MintDelta>,
    pub metadata: Option<MetadataRef>,
    pub certificates: Vec<CertificateRef>,
}

impl TxDraft {
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }
}

/// The finished plan: everything the external raw-transaction builder
/// needs to serialize, sign and submit.
#[derive(Debug, Clone)]
pub struct TxPlan {
    pub inputs: Vec<OutputRef>,
    pub outputs: Vec<TxOutSpec>,
    pub fee: Coin,
    pub valid_until: u64,
    pub mint: Option<MintDelta>,
    pub metadata: Option<MetadataRef>,
    pub certificates: Vec<CertificateRef>,
}
