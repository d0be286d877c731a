use std::collections::HashSet;

use cml_chain::{Coin, PolicyId};

use crate::protocol_params::ProtocolSizeParameters;
use crate::{AssetName, Token};

/// Fixed per-entry overhead of the token bundle, in bytes.
const ASSET_OVERHEAD_BYTES: u64 = 12;
/// Fixed token-bundle header, in words.
const BUNDLE_HEADER_WORDS: u64 = 6;

/// Minimum lovelace an output must carry alongside the given asset bundle.
///
/// Pass the union of every asset the output will hold. Distinct policy ids
/// and distinct asset names are each counted once; an asset name recurring
/// under several policies contributes its bytes only once, and nameless
/// assets contribute no name accounting at all. The result is not additive
/// per asset, so it must be recomputed whenever the bundle composition
/// changes.
pub fn min_utxo_value<I>(assets: I, params: &ProtocolSizeParameters) -> Coin
where
    I: IntoIterator<Item = Token>,
{
    let mut policies: HashSet<PolicyId> = HashSet::new();
    let mut names: HashSet<AssetName> = HashSet::new();
    let mut empty = true;
    for (policy, name) in assets {
        empty = false;
        policies.insert(policy);
        if !name.is_empty() {
            names.insert(name);
        }
    }
    if empty {
        return params.min_utxo_value;
    }

    let pid_count = policies.len() as u64;
    let name_count = names.len() as u64;
    let name_bytes: u64 = names.iter().map(|name| name.len_bytes() as u64).sum();

    let bundle_bytes = pid_count * ASSET_OVERHEAD_BYTES + name_bytes + name_count * params.policy_id_size;
    let bundle_words = BUNDLE_HEADER_WORDS + ceil_div(bundle_bytes, params.word_size);

    let ada_only_entry_words = params.utxo_entry_size_without_val + params.coin_size;
    let candidate =
        (params.min_utxo_value / ada_only_entry_words) * (params.utxo_entry_size_without_val + bundle_words);

    params.min_utxo_value.max(candidate)
}

fn ceil_div(numerator: u64, denominator: u64) -> u64 {
    (numerator + denominator - 1) / denominator
}

#[cfg(test)]
mod tests {
    use cml_chain::PolicyId;
    use proptest::collection::vec;
    use proptest::prelude::*;

    use crate::protocol_params::ProtocolSizeParameters;
    use crate::{AssetName, Token};

    use super::min_utxo_value;

    fn params() -> ProtocolSizeParameters {
        ProtocolSizeParameters::mary_era(1_000_000)
    }

    fn token(tag: u8, name: &str) -> Token {
        (PolicyId::from([tag; 28]), AssetName::try_from(name).unwrap())
    }

    #[test]
    fn empty_bundle_returns_the_bare_minimum_exactly() {
        assert_eq!(min_utxo_value(vec![], &params()), 1_000_000);
    }

    #[test]
    fn single_asset_with_five_byte_name() {
        // bundle_words = 6 + ceil((12 + 5 + 28) / 8) = 12
        // candidate = (1_000_000 / 27) * (27 + 12) = 37_037 * 39
        assert_eq!(min_utxo_value(vec![token(1, "forge")], &params()), 1_444_443);
    }

    #[test]
    fn shared_policy_is_counted_once() {
        let one = min_utxo_value(vec![token(1, "aaaaa")], &params());
        let two_same_policy = min_utxo_value(vec![token(1, "aaaaa"), token(1, "bbbbb")], &params());
        let two_policies = min_utxo_value(vec![token(1, "aaaaa"), token(2, "bbbbb")], &params());
        assert!(two_same_policy > one);
        assert!(two_policies > two_same_policy);
    }

    #[test]
    fn recurring_name_contributes_bytes_once() {
        let across_policies = min_utxo_value(vec![token(1, "same"), token(2, "same")], &params());
        let distinct_names = min_utxo_value(vec![token(1, "same"), token(2, "other")], &params());
        assert!(distinct_names > across_policies);
    }

    #[test]
    fn nameless_assets_skip_name_accounting() {
        let nameless = min_utxo_value(vec![token(1, "")], &params());
        // bundle_words = 6 + ceil(12 / 8) = 8
        assert_eq!(nameless, 37_037 * (27 + 8));
    }

    #[test]
    fn calculation_is_idempotent() {
        let assets = vec![token(1, "tokenA"), token(2, "tokenB")];
        let first = min_utxo_value(assets.clone(), &params());
        let second = min_utxo_value(assets, &params());
        assert_eq!(first, second);
    }

    fn arb_token() -> impl Strategy<Value = Token> {
        (0u8..=4, "[a-z]{0,12}").prop_map(|(tag, name)| token(tag, &name))
    }

    proptest! {
        #[test]
        fn adding_an_asset_never_lowers_the_minimum(assets in vec(arb_token(), 0..8), extra in arb_token()) {
            let base = min_utxo_value(assets.clone(), &params());
            let mut grown = assets;
            grown.push(extra);
            prop_assert!(min_utxo_value(grown, &params()) >= base);
        }

        #[test]
        fn never_below_the_bare_minimum(assets in vec(arb_token(), 0..8)) {
            prop_assert!(min_utxo_value(assets, &params()) >= 1_000_000);
        }
    }
}
