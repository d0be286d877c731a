use cml_chain::PolicyId;
use serde::Deserialize;

use forge_cardano_lib::value::Value;
use forge_cardano_lib::AssetName;

use crate::error::QueryError;

/// One entry of a backend-reported value: an empty policy id denotes the
/// lovelace component.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueEntity {
    pub policy_id: String,
    pub name: String,
    pub quantity: u64,
}

pub fn value_from_entities(entities: &[ValueEntity]) -> Result<Value, QueryError> {
    let mut value = Value::default();
    for entity in entities {
        if entity.policy_id.is_empty() {
            value.coin += entity.quantity;
        } else {
            let policy_id = PolicyId::from_hex(&entity.policy_id)
                .map_err(|_| QueryError::InvalidValueEntry(entity.policy_id.clone()))?;
            let name = AssetName::try_from(entity.name.as_str())
                .map_err(|_| QueryError::InvalidValueEntry(entity.name.clone()))?;
            value.multiasset.add((policy_id, name), entity.quantity);
        }
    }
    Ok(value)
}
