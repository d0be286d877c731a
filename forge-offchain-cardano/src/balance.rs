use std::collections::HashSet;

use cml_chain::Coin;

use cardano_node_gateway::fees::FeeEstimator;
use cardano_node_gateway::ChainQuery;
use forge_cardano_lib::output::UnspentOutput;
use forge_cardano_lib::transaction::{CertificateRef, MetadataRef, MintDelta, TxDraft, TxOutSpec};
use forge_cardano_lib::value::{MultiAsset, Value};
use forge_cardano_lib::{Address, AssetClass, OutputRef};

use crate::error::{FundsShortfall, ShortfallReason, TxPlanError};
use crate::gather::SelectionResult;

/// How supplementary ada-only UTXOs are ordered before consumption.
/// Largest-first keeps the input count, and with it the fee, low.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdaUtxoOrdering {
    #[default]
    LargestFirst,
    SmallestFirst,
}

/// What the balancer needs besides the frozen selection.
///
/// `draft_assets` is the asset bundle the eventual outputs will carry;
/// every draft rebuilt during iteration parks it in a single output so
/// the fee oracle sees a realistically sized transaction.
pub struct BalanceRequest<'a> {
    pub address: &'a Address,
    pub required_floor: Coin,
    pub witness_count: usize,
    pub ordering: AdaUtxoOrdering,
    pub draft_assets: &'a MultiAsset,
    pub mint: Option<&'a MintDelta>,
    pub metadata: Option<&'a MetadataRef>,
    pub certificates: &'a [CertificateRef],
}

#[derive(Debug, Clone)]
pub struct BalancedFunds {
    pub fee: Coin,
    pub extra_inputs: Vec<UnspentOutput>,
    pub input_lovelace: Coin,
}

/// Grow the input set until it covers `fee + required_floor`.
///
/// The fee depends on the input count, so every added UTXO triggers a
/// draft rebuild and a fresh quote. The loop starts from a sentinel fee
/// of 1 lovelace so an empty selection can never pass the check without
/// at least one quote.
pub fn balance<Q, F>(
    query: &Q,
    fees: &F,
    selection: &SelectionResult,
    req: &BalanceRequest<'_>,
) -> Result<BalancedFunds, TxPlanError>
where
    Q: ChainQuery + ?Sized,
    F: FeeEstimator + ?Sized,
{
    let mut inputs: Vec<OutputRef> = selection.input_refs();
    let selected: HashSet<OutputRef> = inputs.iter().copied().collect();
    let mut input_total = selection.input_lovelace;
    let mut min_fee: Coin = 1;

    if !inputs.is_empty() {
        min_fee = quote(fees, req, &inputs, input_total)?;
        if input_total > min_fee + req.required_floor {
            return Ok(BalancedFunds {
                fee: min_fee,
                extra_inputs: Vec::new(),
                input_lovelace: input_total,
            });
        }
    }

    let mut candidates = query.utxos_at(req.address, Some(&AssetClass::Native))?;
    match req.ordering {
        // Stable sorts, so equal-value UTXOs keep the query order.
        AdaUtxoOrdering::LargestFirst => candidates.sort_by(|a, b| b.value.coin.cmp(&a.value.coin)),
        AdaUtxoOrdering::SmallestFirst => candidates.sort_by(|a, b| a.value.coin.cmp(&b.value.coin)),
    }

    let mut extra_inputs: Vec<UnspentOutput> = Vec::new();
    for utxo in candidates {
        if selected.contains(&utxo.reference) {
            continue;
        }
        input_total += utxo.value.coin;
        inputs.push(utxo.reference);
        extra_inputs.push(utxo);

        min_fee = quote(fees, req, &inputs, input_total)?;
        log::trace!(
            "fee iteration: {} inputs, fee {}, {} lovelace gathered",
            inputs.len(),
            min_fee,
            input_total
        );
        if input_total > min_fee + req.required_floor {
            return Ok(BalancedFunds {
                fee: min_fee,
                extra_inputs,
                input_lovelace: input_total,
            });
        }
    }

    let reason = if input_total == 0 {
        ShortfallReason::Empty
    } else {
        ShortfallReason::Underfunded
    };
    Err(TxPlanError::InsufficientFunds(FundsShortfall {
        address: req.address.clone(),
        required: min_fee + req.required_floor,
        available: input_total,
        reason,
    }))
}

fn quote<F: FeeEstimator + ?Sized>(
    fees: &F,
    req: &BalanceRequest<'_>,
    inputs: &[OutputRef],
    input_total: Coin,
) -> Result<Coin, TxPlanError> {
    let draft = TxDraft {
        inputs: inputs.to_vec(),
        outputs: vec![TxOutSpec::new(
            req.address.clone(),
            Value::new(input_total, req.draft_assets.clone()),
        )],
        mint: req.mint.cloned(),
        metadata: req.metadata.cloned(),
        certificates: req.certificates.to_vec(),
    };
    Ok(fees.min_fee(&draft, inputs.len(), 1, req.witness_count)?)
}

#[cfg(test)]
mod tests {
    use cml_crypto::TransactionHash;

    use cardano_node_gateway::fees::LinearFeeEstimator;
    use cardano_node_gateway::mock::InMemoryChainQuery;
    use forge_cardano_lib::output::UnspentOutput;
    use forge_cardano_lib::protocol_params::ProtocolParameters;
    use forge_cardano_lib::value::{MultiAsset, Value};
    use forge_cardano_lib::{Address, OutputRef};

    use crate::error::{ShortfallReason, TxPlanError};
    use crate::gather::SelectionResult;

    use super::{balance, AdaUtxoOrdering, BalanceRequest};

    fn params() -> ProtocolParameters {
        ProtocolParameters {
            min_fee_a: 44,
            min_fee_b: 155381,
            min_utxo_value: 1_000_000,
            key_deposit: 2_000_000,
            pool_deposit: 500_000_000,
            max_tx_size: 16384,
        }
    }

    fn ada_utxo(ix: u64, coin: u64) -> UnspentOutput {
        UnspentOutput::new(
            OutputRef::new(TransactionHash::from([3u8; TransactionHash::BYTE_COUNT]), ix),
            Value::ada_only(coin),
        )
    }

    fn addr() -> Address {
        Address::from("addr_test1payer")
    }

    fn request<'a>(address: &'a Address, assets: &'a MultiAsset, floor: u64) -> BalanceRequest<'a> {
        BalanceRequest {
            address,
            required_floor: floor,
            witness_count: 1,
            ordering: AdaUtxoOrdering::LargestFirst,
            draft_assets: assets,
            mint: None,
            metadata: None,
            certificates: &[],
        }
    }

    #[test]
    fn no_spendable_ada_reads_as_empty() {
        let query = InMemoryChainQuery::new(params(), 0);
        let fees = LinearFeeEstimator::mainnet();
        let assets = MultiAsset::new();
        let address = addr();
        match balance(&query, &fees, &SelectionResult::empty(), &request(&address, &assets, 1_000_000)) {
            Err(TxPlanError::InsufficientFunds(shortfall)) => {
                assert_eq!(shortfall.reason, ShortfallReason::Empty);
                assert_eq!(shortfall.available, 0);
            }
            other => panic!("expected InsufficientFunds, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn dust_reads_as_underfunded() {
        let query = InMemoryChainQuery::new(params(), 0).with_utxos(addr(), vec![ada_utxo(0, 100)]);
        let fees = LinearFeeEstimator::mainnet();
        let assets = MultiAsset::new();
        let address = addr();
        match balance(&query, &fees, &SelectionResult::empty(), &request(&address, &assets, 2_000_000)) {
            Err(TxPlanError::InsufficientFunds(shortfall)) => {
                assert_eq!(shortfall.reason, ShortfallReason::Underfunded);
                assert_eq!(shortfall.available, 100);
                assert!(shortfall.required > 2_000_000);
                let rendered = shortfall.to_string();
                assert!(rendered.contains("ADA"), "{rendered}");
            }
            other => panic!("expected InsufficientFunds, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn stops_adding_inputs_once_covered() {
        let query = InMemoryChainQuery::new(params(), 0).with_utxos(
            addr(),
            vec![ada_utxo(0, 1_500_000), ada_utxo(1, 5_000_000), ada_utxo(2, 2_000_000)],
        );
        let fees = LinearFeeEstimator::mainnet();
        let assets = MultiAsset::new();
        let address = addr();
        let funds =
            balance(&query, &fees, &SelectionResult::empty(), &request(&address, &assets, 1_000_000)).unwrap();
        // Largest-first: the 5 ada UTXO alone covers floor + fee.
        assert_eq!(funds.extra_inputs.len(), 1);
        assert_eq!(funds.input_lovelace, 5_000_000);
        assert!(funds.input_lovelace > funds.fee + 1_000_000);
    }

    #[test]
    fn smallest_first_consumes_more_inputs() {
        let seed = vec![ada_utxo(0, 1_500_000), ada_utxo(1, 5_000_000), ada_utxo(2, 2_000_000)];
        let fees = LinearFeeEstimator::mainnet();
        let assets = MultiAsset::new();
        let query = InMemoryChainQuery::new(params(), 0).with_utxos(addr(), seed);
        let address = addr();
        let req = BalanceRequest {
            ordering: AdaUtxoOrdering::SmallestFirst,
            ..request(&address, &assets, 1_000_000)
        };
        let funds = balance(&query, &fees, &SelectionResult::empty(), &req).unwrap();
        assert!(funds.extra_inputs.len() > 1);
        assert!(funds.input_lovelace > funds.fee + 1_000_000);
    }

    #[test]
    fn preselected_inputs_can_already_cover_the_floor() {
        let query = InMemoryChainQuery::new(params(), 0);
        let fees = LinearFeeEstimator::mainnet();
        let assets = MultiAsset::new();
        let selection = SelectionResult {
            inputs: vec![ada_utxo(9, 10_000_000)],
            output_bundle: MultiAsset::new(),
            change_bundle: MultiAsset::new(),
            input_lovelace: 10_000_000,
        };
        let address = addr();
        let funds = balance(&query, &fees, &selection, &request(&address, &assets, 1_000_000)).unwrap();
        assert!(funds.extra_inputs.is_empty());
        assert_eq!(funds.input_lovelace, 10_000_000);
    }
}
