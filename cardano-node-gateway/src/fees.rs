use std::collections::HashSet;

use cml_chain::{Coin, PolicyId};

use forge_cardano_lib::protocol_params::ProtocolParameters;
use forge_cardano_lib::transaction::{MintDelta, TxDraft};
use forge_cardano_lib::value::MultiAsset;

use crate::error::QueryError;

/// Fee oracle queried against a size-only draft.
///
/// Treated as a black box by planning code, with one contract: the quote
/// must be monotone in input count, output count and witness count.
pub trait FeeEstimator {
    fn min_fee(
        &self,
        draft: &TxDraft,
        tx_in_count: usize,
        tx_out_count: usize,
        witness_count: usize,
    ) -> Result<Coin, QueryError>;
}

const TX_BASE_BYTES: u64 = 16;
const INPUT_BYTES: u64 = 40;
const OUTPUT_BASE_BYTES: u64 = 64;
const POLICY_BYTES: u64 = 38;
const ASSET_BYTES: u64 = 17;
const WITNESS_BYTES: u64 = 102;
const CERTIFICATE_BYTES: u64 = 110;
const METADATA_BYTES: u64 = 128;

/// Reference `fee = constant + coefficient * size` estimator.
///
/// The size model is a coarse upper bound over the draft shape, not the
/// node's CBOR accounting; production deployments should wrap the node's
/// own fee calculation behind the same trait.
#[derive(Debug, Clone, Copy)]
pub struct LinearFeeEstimator {
    coefficient: Coin,
    constant: Coin,
}

impl LinearFeeEstimator {
    pub fn new(coefficient: Coin, constant: Coin) -> Self {
        Self { coefficient, constant }
    }

    pub fn mainnet() -> Self {
        Self::new(44, 155381)
    }

    pub fn from_parameters(params: &ProtocolParameters) -> Self {
        Self::new(params.min_fee_a, params.min_fee_b)
    }

    fn draft_size(
        &self,
        draft: &TxDraft,
        tx_in_count: usize,
        tx_out_count: usize,
        witness_count: usize,
    ) -> u64 {
        let mut size = TX_BASE_BYTES
            + tx_in_count as u64 * INPUT_BYTES
            + tx_out_count as u64 * OUTPUT_BASE_BYTES
            + witness_count as u64 * WITNESS_BYTES
            + draft.certificates.len() as u64 * CERTIFICATE_BYTES;
        if draft.metadata.is_some() {
            size += METADATA_BYTES;
        }
        for out in &draft.outputs {
            size += bundle_bytes(&out.value.multiasset);
        }
        if let Some(mint) = &draft.mint {
            size += mint_bytes(mint);
        }
        size
    }
}

impl FeeEstimator for LinearFeeEstimator {
    fn min_fee(
        &self,
        draft: &TxDraft,
        tx_in_count: usize,
        tx_out_count: usize,
        witness_count: usize,
    ) -> Result<Coin, QueryError> {
        let size = self.draft_size(draft, tx_in_count, tx_out_count, witness_count);
        Ok(self.constant + self.coefficient * size)
    }
}

fn bundle_bytes(bundle: &MultiAsset) -> u64 {
    let policies = bundle.policies().count() as u64 * POLICY_BYTES;
    let assets: u64 = bundle
        .iter()
        .map(|((_, name), _)| ASSET_BYTES + name.len_bytes() as u64)
        .sum();
    policies + assets
}

fn mint_bytes(mint: &MintDelta) -> u64 {
    let policies: HashSet<&PolicyId> = mint.iter().map(|((policy, _), _)| policy).collect();
    let assets: u64 = mint
        .iter()
        .map(|((_, name), _)| ASSET_BYTES + name.len_bytes() as u64)
        .sum();
    policies.len() as u64 * POLICY_BYTES + assets
}

#[cfg(test)]
mod tests {
    use cml_chain::PolicyId;

    use forge_cardano_lib::transaction::{TxDraft, TxOutSpec};
    use forge_cardano_lib::value::{MultiAsset, Value};
    use forge_cardano_lib::{Address, AssetName};

    use super::{FeeEstimator, LinearFeeEstimator};

    fn draft(with_assets: bool) -> TxDraft {
        let mut bundle = MultiAsset::new();
        if with_assets {
            bundle.add(
                (PolicyId::from([1u8; 28]), AssetName::try_from("tokenA").unwrap()),
                10,
            );
        }
        TxDraft {
            inputs: vec![],
            outputs: vec![TxOutSpec::new(Address::from("addr_test1draft"), Value::new(0, bundle))],
            mint: None,
            metadata: None,
            certificates: vec![],
        }
    }

    #[test]
    fn fee_grows_with_every_count() {
        let fees = LinearFeeEstimator::mainnet();
        let base = fees.min_fee(&draft(false), 1, 1, 1).unwrap();
        assert!(fees.min_fee(&draft(false), 2, 1, 1).unwrap() > base);
        assert!(fees.min_fee(&draft(false), 1, 2, 1).unwrap() > base);
        assert!(fees.min_fee(&draft(false), 1, 1, 2).unwrap() > base);
        assert!(fees.min_fee(&draft(true), 1, 1, 1).unwrap() > base);
    }
}
