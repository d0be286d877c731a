use cml_crypto::TransactionHash;

use forge_cardano_lib::output::UnspentOutput;
use forge_cardano_lib::protocol_params::ProtocolParameters;
use forge_cardano_lib::transaction::TxPlan;
use forge_cardano_lib::{Address, AssetClass};

use crate::error::QueryError;

pub mod data;
pub mod error;
pub mod fees;
pub mod mock;

/// Typed capability over the node/wallet backend.
///
/// Implementations wrap whatever transport they like (local socket, CLI,
/// HTTP indexer); planning code never formats queries itself. The UTXO
/// order returned by `utxos_at` must be stable within one call, and
/// implementations must document which order their backend yields —
/// selection walks it as-is.
pub trait ChainQuery {
    /// Unspent outputs at `address`, optionally narrowed to outputs that
    /// carry the given asset class. `Some(Native)` means outputs holding
    /// nothing but lovelace.
    fn utxos_at(&self, address: &Address, filter: Option<&AssetClass>)
        -> Result<Vec<UnspentOutput>, QueryError>;

    fn chain_tip_slot(&self) -> Result<u64, QueryError>;

    fn protocol_parameters(&self) -> Result<ProtocolParameters, QueryError>;
}

/// Terminal collaborator: serialize, sign and submit a finished plan.
/// All-or-nothing; a plan is never partially submitted.
pub trait TxSubmit {
    fn build_and_submit(&self, plan: &TxPlan) -> Result<TransactionHash, QueryError>;
}
