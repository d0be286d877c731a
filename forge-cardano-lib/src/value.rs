use cml_chain::{Coin, PolicyId};
use linked_hash_map::LinkedHashMap;

use crate::{AssetClass, AssetName, Token};

/// A bundle of native assets grouped by policy.
///
/// Backed by insertion-ordered maps so that iteration order is the order
/// in which assets were first recorded, never hash order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct MultiAsset(LinkedHashMap<PolicyId, LinkedHashMap<AssetName, u64>>);

impl MultiAsset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn amount_of(&self, (policy, name): &Token) -> Option<u64> {
        self.0.get(policy).and_then(|assets| assets.get(name)).copied()
    }

    pub fn add(&mut self, (policy, name): Token, amount: u64) {
        let assets = self.0.entry(policy).or_insert_with(LinkedHashMap::new);
        *assets.entry(name).or_insert(0) += amount;
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        for (token, amount) in other.iter() {
            merged.add(token, amount);
        }
        merged
    }

    pub fn policies(&self) -> impl Iterator<Item = &PolicyId> {
        self.0.keys()
    }

    /// Flattened view in insertion order: policies in the order first seen,
    /// names in the order first seen within each policy.
    pub fn iter(&self) -> impl Iterator<Item = (Token, u64)> + '_ {
        self.0.iter().flat_map(|(policy, assets)| {
            assets
                .iter()
                .map(move |(name, amount)| ((*policy, name.clone()), *amount))
        })
    }

    pub fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.iter().map(|(token, _)| token)
    }

    pub fn num_tokens(&self) -> usize {
        self.0.values().map(|assets| assets.len()).sum()
    }
}

impl FromIterator<(Token, u64)> for MultiAsset {
    fn from_iter<I: IntoIterator<Item = (Token, u64)>>(iter: I) -> Self {
        let mut bundle = Self::new();
        for (token, amount) in iter {
            bundle.add(token, amount);
        }
        bundle
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Value {
    pub coin: Coin,
    pub multiasset: MultiAsset,
}

impl Value {
    pub fn new(coin: Coin, multiasset: MultiAsset) -> Self {
        Self { coin, multiasset }
    }

    pub fn ada_only(coin: Coin) -> Self {
        Self {
            coin,
            multiasset: MultiAsset::new(),
        }
    }

    pub fn amount_of(&self, ac: &AssetClass) -> Option<u64> {
        match ac {
            AssetClass::Native => Some(self.coin),
            AssetClass::Token(token) => self.multiasset.amount_of(token),
        }
    }

    pub fn contains_only_ada(&self) -> bool {
        self.multiasset.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use cml_chain::PolicyId;

    use crate::{AssetClass, AssetName, Token};

    use super::{MultiAsset, Value};

    fn token(tag: u8, name: &str) -> Token {
        (PolicyId::from([tag; 28]), AssetName::try_from(name).unwrap())
    }

    #[test]
    fn add_merges_repeated_tokens() {
        let mut bundle = MultiAsset::new();
        bundle.add(token(1, "tokenA"), 3);
        bundle.add(token(1, "tokenA"), 4);
        assert_eq!(bundle.amount_of(&token(1, "tokenA")), Some(7));
        assert_eq!(bundle.num_tokens(), 1);
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut bundle = MultiAsset::new();
        bundle.add(token(2, "later"), 1);
        bundle.add(token(1, "earlier"), 1);
        bundle.add(token(2, "last"), 1);
        let names: Vec<String> = bundle.iter().map(|((_, name), _)| name.to_string()).collect();
        assert_eq!(names, vec!["later", "last", "earlier"]);
    }

    #[test]
    fn value_amount_of_distinguishes_ada_from_tokens() {
        let mut bundle = MultiAsset::new();
        bundle.add(token(1, "tokenA"), 10);
        let value = Value::new(2_000_000, bundle);
        assert_eq!(value.amount_of(&AssetClass::Native), Some(2_000_000));
        assert_eq!(value.amount_of(&AssetClass::Token(token(1, "tokenA"))), Some(10));
        assert_eq!(value.amount_of(&AssetClass::Token(token(9, "other"))), None);
        assert!(!value.contains_only_ada());
    }
}
