use std::collections::HashSet;

use cml_chain::Coin;
use linked_hash_map::LinkedHashMap;

use cardano_node_gateway::ChainQuery;
use forge_cardano_lib::output::UnspentOutput;
use forge_cardano_lib::value::MultiAsset;
use forge_cardano_lib::{Address, AssetClass, OutputRef, Token};

use crate::demand::AssetDemand;
use crate::error::TxPlanError;

/// A frozen input selection together with its asset accounting.
///
/// For every token carried by a selected UTXO,
/// `output_bundle[token] + change_bundle[token]` equals the token's total
/// across the selection. Ada is tallied separately in `input_lovelace`
/// and resolved against the fee later.
#[derive(Debug, Clone, Default)]
pub struct SelectionResult {
    pub inputs: Vec<UnspentOutput>,
    pub output_bundle: MultiAsset,
    pub change_bundle: MultiAsset,
    pub input_lovelace: Coin,
}

impl SelectionResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn input_refs(&self) -> Vec<OutputRef> {
        self.inputs.iter().map(|utxo| utxo.reference).collect()
    }
}

/// Select a covering set of UTXOs for the demanded assets at `address`.
///
/// One query per distinct token; returned UTXOs are walked in query order
/// and deduplicated by output reference, since one UTXO may satisfy
/// several demands. A UTXO's holdings count toward a demand even when the
/// UTXO was already selected for an earlier one. Accounting runs only
/// after the selection is frozen, so nothing is double counted.
pub fn gather<Q: ChainQuery + ?Sized>(
    query: &Q,
    address: &Address,
    demand: &AssetDemand,
) -> Result<SelectionResult, TxPlanError> {
    let mut selected: Vec<UnspentOutput> = Vec::new();
    let mut seen: HashSet<OutputRef> = HashSet::new();
    let mut leftovers: Vec<u64> = Vec::new();

    for (token, required) in demand.iter() {
        let asset = AssetClass::Token(token.clone());
        // Potentially slow when the address holds many UTXOs of one asset.
        let found = query.utxos_at(address, Some(&asset))?;
        let mut asset_count: u64 = 0;
        let mut covered = false;
        for utxo in found {
            let held = utxo.value.amount_of(&asset).unwrap_or(0);
            if seen.insert(utxo.reference) {
                selected.push(utxo);
            }
            asset_count += held;
            if asset_count >= required {
                leftovers.push(asset_count - required);
                covered = true;
                break;
            }
        }
        if !covered && asset_count < required {
            return Err(TxPlanError::InsufficientAsset {
                asset,
                required,
                available: asset_count,
            });
        }
        log::debug!(
            "demand for {} covered, {} in excess",
            asset,
            leftovers.last().copied().unwrap_or(0)
        );
    }

    if leftovers.len() != demand.len() {
        return Err(TxPlanError::AccountingInvariant(format!(
            "tracked {} leftover quantities for {} demanded assets",
            leftovers.len(),
            demand.len()
        )));
    }

    let mut totals: LinkedHashMap<Token, u64> = LinkedHashMap::new();
    let mut input_lovelace: Coin = 0;
    for utxo in &selected {
        input_lovelace += utxo.value.coin;
        for (token, amount) in utxo.value.multiasset.iter() {
            *totals.entry(token).or_insert(0) += amount;
        }
    }

    let mut output_bundle = MultiAsset::new();
    let mut change_bundle = MultiAsset::new();
    for (token, total) in totals {
        let destined = demand.get(&token).min(total);
        if destined > 0 {
            output_bundle.add(token.clone(), destined);
        }
        if total > destined {
            change_bundle.add(token, total - destined);
        }
    }

    Ok(SelectionResult {
        inputs: selected,
        output_bundle,
        change_bundle,
        input_lovelace,
    })
}

#[cfg(test)]
mod tests {
    use cml_chain::PolicyId;
    use cml_crypto::TransactionHash;
    use proptest::collection::vec;
    use proptest::prelude::*;

    use cardano_node_gateway::mock::InMemoryChainQuery;
    use forge_cardano_lib::output::UnspentOutput;
    use forge_cardano_lib::protocol_params::ProtocolParameters;
    use forge_cardano_lib::value::{MultiAsset, Value};
    use forge_cardano_lib::{Address, AssetName, OutputRef, Token};

    use crate::demand::AssetDemand;
    use crate::error::TxPlanError;

    use super::gather;

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

    fn token(tag: u8, name: &str) -> Token {
        (PolicyId::from([tag; 28]), AssetName::try_from(name).unwrap())
    }

    fn utxo(ix: u64, coin: u64, assets: &[(Token, u64)]) -> UnspentOutput {
        let mut bundle = MultiAsset::new();
        for (token, amount) in assets {
            bundle.add(token.clone(), *amount);
        }
        UnspentOutput::new(
            OutputRef::new(TransactionHash::from([7u8; TransactionHash::BYTE_COUNT]), ix),
            Value::new(coin, bundle),
        )
    }

    fn addr() -> Address {
        Address::from("addr_test1sender")
    }

    #[test]
    fn empty_wallet_reports_the_missing_asset() {
        let query = InMemoryChainQuery::new(params(), 0);
        let demand: AssetDemand = vec![(token(1, "tokenA"), 5)].into_iter().collect();
        match gather(&query, &addr(), &demand) {
            Err(TxPlanError::InsufficientAsset {
                asset,
                required,
                available,
            }) => {
                assert_eq!(asset.into_token(), Some(token(1, "tokenA")));
                assert_eq!(required, 5);
                assert_eq!(available, 0);
            }
            other => panic!("expected InsufficientAsset, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn exact_cover_leaves_no_change() {
        let query = InMemoryChainQuery::new(params(), 0).with_utxos(
            addr(),
            vec![utxo(0, 2_000_000, &[(token(1, "tokenA"), 10)])],
        );
        let demand: AssetDemand = vec![(token(1, "tokenA"), 10)].into_iter().collect();
        let selection = gather(&query, &addr(), &demand).unwrap();
        assert_eq!(selection.inputs.len(), 1);
        assert_eq!(selection.output_bundle.amount_of(&token(1, "tokenA")), Some(10));
        assert!(selection.change_bundle.is_empty());
        assert_eq!(selection.input_lovelace, 2_000_000);
    }

    #[test]
    fn one_utxo_satisfying_two_demands_is_selected_once() {
        let query = InMemoryChainQuery::new(params(), 0).with_utxos(
            addr(),
            vec![utxo(
                0,
                3_000_000,
                &[(token(1, "tokenA"), 4), (token(1, "tokenB"), 6)],
            )],
        );
        let demand: AssetDemand =
            vec![(token(1, "tokenA"), 4), (token(1, "tokenB"), 2)].into_iter().collect();
        let selection = gather(&query, &addr(), &demand).unwrap();
        assert_eq!(selection.inputs.len(), 1);
        assert_eq!(selection.input_lovelace, 3_000_000);
        assert_eq!(selection.output_bundle.amount_of(&token(1, "tokenB")), Some(2));
        assert_eq!(selection.change_bundle.amount_of(&token(1, "tokenB")), Some(4));
    }

    #[test]
    fn unrelated_assets_ride_along_into_change() {
        let query = InMemoryChainQuery::new(params(), 0).with_utxos(
            addr(),
            vec![utxo(
                0,
                2_000_000,
                &[(token(1, "tokenA"), 10), (token(2, "bystander"), 3)],
            )],
        );
        let demand: AssetDemand = vec![(token(1, "tokenA"), 7)].into_iter().collect();
        let selection = gather(&query, &addr(), &demand).unwrap();
        assert_eq!(selection.output_bundle.amount_of(&token(1, "tokenA")), Some(7));
        assert_eq!(selection.change_bundle.amount_of(&token(1, "tokenA")), Some(3));
        assert_eq!(selection.change_bundle.amount_of(&token(2, "bystander")), Some(3));
    }

    #[test]
    fn selection_stops_once_a_demand_is_covered() {
        let query = InMemoryChainQuery::new(params(), 0).with_utxos(
            addr(),
            vec![
                utxo(0, 1_000_000, &[(token(1, "tokenA"), 8)]),
                utxo(1, 1_000_000, &[(token(1, "tokenA"), 8)]),
            ],
        );
        let demand: AssetDemand = vec![(token(1, "tokenA"), 5)].into_iter().collect();
        let selection = gather(&query, &addr(), &demand).unwrap();
        assert_eq!(selection.inputs.len(), 1);
        assert_eq!(selection.input_lovelace, 1_000_000);
    }

    fn arb_utxos() -> impl Strategy<Value = Vec<(u64, Vec<(u8, u64)>)>> {
        vec((1_000_000u64..4_000_000, vec((0u8..3, 1u64..20), 0..3)), 1..6)
    }

    proptest! {
        #[test]
        fn conservation_holds_per_selected_token(raw in arb_utxos(), share in 1u64..100) {
            let names = ["tokenA", "tokenB", "tokenC"];
            let utxos: Vec<UnspentOutput> = raw
                .iter()
                .enumerate()
                .map(|(ix, (coin, assets))| {
                    let assets: Vec<(Token, u64)> = assets
                        .iter()
                        .map(|(tag, qty)| (token(*tag, names[*tag as usize]), *qty))
                        .collect();
                    utxo(ix as u64, *coin, &assets)
                })
                .collect();

            let mut totals: std::collections::HashMap<Token, u64> = std::collections::HashMap::new();
            for u in &utxos {
                for (t, q) in u.value.multiasset.iter() {
                    *totals.entry(t).or_insert(0) += q;
                }
            }
            let demand: AssetDemand = totals
                .iter()
                .map(|(t, total)| (t.clone(), (total * share / 100).max(1)))
                .collect();
            prop_assume!(!demand.is_empty());

            let query = InMemoryChainQuery::new(params(), 0).with_utxos(addr(), utxos);
            let selection = gather(&query, &addr(), &demand).unwrap();

            let mut selected_totals: std::collections::HashMap<Token, u64> = std::collections::HashMap::new();
            for u in &selection.inputs {
                for (t, q) in u.value.multiasset.iter() {
                    *selected_totals.entry(t).or_insert(0) += q;
                }
            }
            for (t, total) in selected_totals {
                let destined = selection.output_bundle.amount_of(&t).unwrap_or(0);
                let change = selection.change_bundle.amount_of(&t).unwrap_or(0);
                prop_assert_eq!(destined + change, total);
            }
        }
    }
}
