use cml_crypto::TransactionHash;
use serde::Deserialize;

use forge_cardano_lib::output::UnspentOutput;
use forge_cardano_lib::OutputRef;

use crate::data::value::{value_from_entities, ValueEntity};
use crate::error::QueryError;

/// An unspent output in the shape backends report it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtxoEntity {
    pub tx_hash: String,
    pub index: u64,
    pub value: Vec<ValueEntity>,
}

impl TryFrom<UtxoEntity> for UnspentOutput {
    type Error = QueryError;

    fn try_from(entity: UtxoEntity) -> Result<Self, Self::Error> {
        let tx_hash = TransactionHash::from_hex(&entity.tx_hash)
            .map_err(|_| QueryError::InvalidValueEntry(entity.tx_hash.clone()))?;
        let value = value_from_entities(&entity.value)?;
        Ok(UnspentOutput::new(OutputRef::new(tx_hash, entity.index), value))
    }
}

#[cfg(test)]
mod tests {
    use forge_cardano_lib::output::UnspentOutput;
    use forge_cardano_lib::AssetClass;

    use super::UtxoEntity;

    #[test]
    fn parses_backend_utxo_with_assets() {
        let raw = r#"{
            "txHash": "a44450b6a1b315ac4e57b54f5d9d96947658559e83d568c04c0475f465384f8f",
            "index": 1,
            "value": [
                {"policyId": "", "name": "", "quantity": 2000000},
                {"policyId": "01010101010101010101010101010101010101010101010101010101",
                 "name": "tokenA", "quantity": 10}
            ]
        }"#;
        let entity: UtxoEntity = serde_json::from_str(raw).unwrap();
        let utxo = UnspentOutput::try_from(entity).unwrap();
        assert_eq!(utxo.reference.index(), 1);
        assert_eq!(utxo.value.amount_of(&AssetClass::Native), Some(2_000_000));
        assert!(!utxo.is_ada_only());
    }
}
