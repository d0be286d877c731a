use std::fmt;

use cml_chain::Coin;

use cardano_node_gateway::error::QueryError;
use forge_cardano_lib::constants::LOVELACE_PER_ADA;
use forge_cardano_lib::{Address, AssetClass};

/// Why an account could not fund a plan. Only the wording differs; both
/// variants abort the build the same way.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ShortfallReason {
    /// No spendable ada was found at the address at all.
    Empty,
    /// Ada was found, but not enough to cover fee and output floors.
    Underfunded,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FundsShortfall {
    pub address: Address,
    pub required: Coin,
    pub available: Coin,
    pub reason: ShortfallReason,
}

impl fmt::Display for FundsShortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            ShortfallReason::Empty => {
                write!(f, "account {} is empty", self.address)
            }
            ShortfallReason::Underfunded => write!(
                f,
                "account {} cannot pay transaction costs of {} ADA because it only contains {} ADA",
                self.address,
                self.required as f64 / LOVELACE_PER_ADA as f64,
                self.available as f64 / LOVELACE_PER_ADA as f64,
            ),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TxPlanError {
    #[error("insufficient asset {asset}: {required} requested, {available} discoverable")]
    InsufficientAsset {
        asset: AssetClass,
        required: u64,
        available: u64,
    },

    #[error("transaction failed due to insufficient funds: {0}")]
    InsufficientFunds(FundsShortfall),

    #[error("invalid quantity for {op}: quantities must be positive")]
    InvalidQuantity { op: &'static str },

    #[error("selection bookkeeping failed: {0}")]
    AccountingInvariant(String),

    #[error(transparent)]
    Query(#[from] QueryError),
}
