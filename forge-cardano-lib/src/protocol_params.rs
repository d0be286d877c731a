use cml_chain::Coin;

pub const COIN_SIZE: u64 = 0;
pub const UTXO_ENTRY_SIZE_WITHOUT_VAL: u64 = 27;
pub const POLICY_ID_SIZE: u64 = 28;
pub const WORD_SIZE: u64 = 8;

/// Live protocol parameters in the shape the node reports them
/// (`query protocol-parameters` JSON). Unknown fields are ignored.
#[derive(Debug, Clone, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolParameters {
    pub min_fee_a: Coin,
    pub min_fee_b: Coin,
    #[serde(rename = "minUTxOValue")]
    pub min_utxo_value: Coin,
    pub key_deposit: Coin,
    pub pool_deposit: Coin,
    pub max_tx_size: u64,
}

/// The size constants feeding min-UTxO accounting, threaded explicitly
/// into every calculation instead of being cached on a long-lived object.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ProtocolSizeParameters {
    pub min_utxo_value: Coin,
    pub coin_size: u64,
    pub utxo_entry_size_without_val: u64,
    pub policy_id_size: u64,
    pub word_size: u64,
}

impl ProtocolSizeParameters {
    pub fn mary_era(min_utxo_value: Coin) -> Self {
        Self {
            min_utxo_value,
            coin_size: COIN_SIZE,
            utxo_entry_size_without_val: UTXO_ENTRY_SIZE_WITHOUT_VAL,
            policy_id_size: POLICY_ID_SIZE,
            word_size: WORD_SIZE,
        }
    }
}

impl From<&ProtocolParameters> for ProtocolSizeParameters {
    fn from(params: &ProtocolParameters) -> Self {
        Self::mary_era(params.min_utxo_value)
    }
}

#[cfg(test)]
mod tests {
    use super::{ProtocolParameters, ProtocolSizeParameters};

    #[test]
    fn deserializes_node_reported_parameters() {
        let raw = r#"{
            "minFeeA": 44,
            "minFeeB": 155381,
            "minUTxOValue": 1000000,
            "keyDeposit": 2000000,
            "poolDeposit": 500000000,
            "maxTxSize": 16384,
            "protocolVersion": {"major": 4, "minor": 0}
        }"#;
        let params: ProtocolParameters = serde_json::from_str(raw).unwrap();
        assert_eq!(params.min_utxo_value, 1_000_000);
        assert_eq!(params.key_deposit, 2_000_000);
        let sizes = ProtocolSizeParameters::from(&params);
        assert_eq!(sizes.utxo_entry_size_without_val, 27);
        assert_eq!(sizes.min_utxo_value, 1_000_000);
    }
}
