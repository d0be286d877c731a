use cml_chain::Coin;

use forge_cardano_lib::min_utxo::min_utxo_value;
use forge_cardano_lib::protocol_params::ProtocolSizeParameters;
use forge_cardano_lib::transaction::TxOutSpec;
use forge_cardano_lib::value::{MultiAsset, Value};
use forge_cardano_lib::Address;

use crate::error::{FundsShortfall, ShortfallReason, TxPlanError};

/// The output the plan exists to produce, if any. Burns and bare
/// certificate transactions have none.
pub struct PrimaryOutput<'a> {
    pub destination: &'a Address,
    pub requested_ada: Coin,
    pub bundle: &'a MultiAsset,
}

pub struct AssembleRequest<'a> {
    pub fee: Coin,
    pub input_lovelace: Coin,
    pub primary: Option<PrimaryOutput<'a>>,
    pub change_address: &'a Address,
    pub change_bundle: &'a MultiAsset,
    /// Ada leaving the balance without an output, e.g. a key deposit.
    pub deposit: Coin,
    pub params: &'a ProtocolSizeParameters,
}

/// Final output amounts plus the fee, which may have grown by a folded-in
/// residual.
#[derive(Debug, Clone)]
pub struct OutputPlan {
    pub outputs: Vec<TxOutSpec>,
    pub fee: Coin,
}

/// Split the gathered ada across the primary output, the asset change
/// output and an optional ada-only change output.
///
/// No output below its min-UTxO floor is ever created: a residual smaller
/// than the bare minimum is folded into the fee when no asset-bearing
/// change output exists, and merged into that output's ada component when
/// one does. Sufficiency is re-checked here even though the balancer
/// nominally guaranteed it, because floors can shift once the change
/// bundle is final.
pub fn assemble(req: &AssembleRequest<'_>) -> Result<OutputPlan, TxPlanError> {
    let mut fee = req.fee;
    let mut outputs: Vec<TxOutSpec> = Vec::new();

    let mut allocated = fee + req.deposit;
    if let Some(primary) = &req.primary {
        let floor = min_utxo_value(primary.bundle.tokens(), req.params);
        let primary_ada = floor.max(primary.requested_ada);
        allocated += primary_ada;
        outputs.push(TxOutSpec::new(
            primary.destination.clone(),
            Value::new(primary_ada, primary.bundle.clone()),
        ));
    }

    let change_floor = if req.change_bundle.is_empty() {
        0
    } else {
        min_utxo_value(req.change_bundle.tokens(), req.params)
    };
    allocated += change_floor;

    let residual = match req.input_lovelace.checked_sub(allocated) {
        Some(residual) => residual,
        None => {
            return Err(TxPlanError::InsufficientFunds(FundsShortfall {
                address: req.change_address.clone(),
                required: allocated,
                available: req.input_lovelace,
                reason: ShortfallReason::Underfunded,
            }))
        }
    };

    if !req.change_bundle.is_empty() {
        if residual < req.params.min_utxo_value {
            // Residual too small for its own output: it rides on the
            // asset-bearing change.
            outputs.push(TxOutSpec::new(
                req.change_address.clone(),
                Value::new(change_floor + residual, req.change_bundle.clone()),
            ));
        } else {
            outputs.push(TxOutSpec::new(
                req.change_address.clone(),
                Value::new(change_floor, req.change_bundle.clone()),
            ));
            outputs.push(TxOutSpec::new(
                req.change_address.clone(),
                Value::ada_only(residual),
            ));
        }
    } else if residual > 0 {
        if residual < req.params.min_utxo_value {
            fee += residual;
        } else {
            outputs.push(TxOutSpec::new(req.change_address.clone(), Value::ada_only(residual)));
        }
    }

    Ok(OutputPlan { outputs, fee })
}

#[cfg(test)]
mod tests {
    use cml_chain::PolicyId;

    use forge_cardano_lib::min_utxo::min_utxo_value;
    use forge_cardano_lib::protocol_params::ProtocolSizeParameters;
    use forge_cardano_lib::value::MultiAsset;
    use forge_cardano_lib::{Address, AssetName, Token};

    use crate::error::TxPlanError;

    use super::{assemble, AssembleRequest, PrimaryOutput};

    fn params() -> ProtocolSizeParameters {
        ProtocolSizeParameters::mary_era(1_000_000)
    }

    fn token(tag: u8, name: &str) -> Token {
        (PolicyId::from([tag; 28]), AssetName::try_from(name).unwrap())
    }

    fn recipient() -> Address {
        Address::from("addr_test1recipient")
    }

    fn payer() -> Address {
        Address::from("addr_test1payer")
    }

    #[test]
    fn small_residual_folds_into_the_fee() {
        let empty = MultiAsset::new();
        let recipient = recipient();
        let payer = payer();
        let plan = assemble(&AssembleRequest {
            fee: 200_000,
            input_lovelace: 5_500_000,
            primary: Some(PrimaryOutput {
                destination: &recipient,
                requested_ada: 5_000_000,
                bundle: &empty,
            }),
            change_address: &payer,
            change_bundle: &empty,
            deposit: 0,
            params: &params(),
        })
        .unwrap();
        // 300_000 left over is below the bare minimum.
        assert_eq!(plan.outputs.len(), 1);
        assert_eq!(plan.fee, 500_000);
        assert_eq!(plan.outputs[0].value.coin, 5_000_000);
    }

    #[test]
    fn large_residual_becomes_an_ada_change_output() {
        let empty = MultiAsset::new();
        let recipient = recipient();
        let payer = payer();
        let plan = assemble(&AssembleRequest {
            fee: 200_000,
            input_lovelace: 9_000_000,
            primary: Some(PrimaryOutput {
                destination: &recipient,
                requested_ada: 5_000_000,
                bundle: &empty,
            }),
            change_address: &payer,
            change_bundle: &empty,
            deposit: 0,
            params: &params(),
        })
        .unwrap();
        assert_eq!(plan.outputs.len(), 2);
        assert_eq!(plan.fee, 200_000);
        assert_eq!(plan.outputs[1].address, payer);
        assert_eq!(plan.outputs[1].value.coin, 3_800_000);
    }

    #[test]
    fn small_residual_merges_into_asset_change() {
        let mut change: MultiAsset = MultiAsset::new();
        change.add(token(1, "tokenA"), 3);
        let change_floor = min_utxo_value(change.tokens(), &params());
        let payer = payer();
        let plan = assemble(&AssembleRequest {
            fee: 200_000,
            input_lovelace: change_floor + 200_000 + 400_000,
            primary: None,
            change_address: &payer,
            change_bundle: &change,
            deposit: 0,
            params: &params(),
        })
        .unwrap();
        assert_eq!(plan.outputs.len(), 1);
        assert_eq!(plan.fee, 200_000);
        assert_eq!(plan.outputs[0].value.coin, change_floor + 400_000);
        assert!(!plan.outputs[0].value.contains_only_ada());
    }

    #[test]
    fn large_residual_splits_off_the_asset_change() {
        let mut change: MultiAsset = MultiAsset::new();
        change.add(token(1, "tokenA"), 3);
        let change_floor = min_utxo_value(change.tokens(), &params());
        let payer = payer();
        let plan = assemble(&AssembleRequest {
            fee: 200_000,
            input_lovelace: change_floor + 200_000 + 2_500_000,
            primary: None,
            change_address: &payer,
            change_bundle: &change,
            deposit: 0,
            params: &params(),
        })
        .unwrap();
        assert_eq!(plan.outputs.len(), 2);
        assert_eq!(plan.outputs[0].value.coin, change_floor);
        assert_eq!(plan.outputs[1].value.coin, 2_500_000);
        assert!(plan.outputs[1].value.contains_only_ada());
    }

    #[test]
    fn revalidation_catches_floors_the_balancer_missed() {
        let mut bundle = MultiAsset::new();
        bundle.add(token(1, "tokenA"), 1);
        let empty = MultiAsset::new();
        let recipient = recipient();
        let payer = payer();
        let result = assemble(&AssembleRequest {
            fee: 200_000,
            input_lovelace: 1_000_000,
            primary: Some(PrimaryOutput {
                destination: &recipient,
                requested_ada: 0,
                bundle: &bundle,
            }),
            change_address: &payer,
            change_bundle: &empty,
            deposit: 0,
            params: &params(),
        });
        assert!(matches!(result, Err(TxPlanError::InsufficientFunds(_))));
    }

    #[test]
    fn deposit_reduces_the_residual() {
        let empty = MultiAsset::new();
        let payer = payer();
        let plan = assemble(&AssembleRequest {
            fee: 180_000,
            input_lovelace: 6_000_000,
            primary: None,
            change_address: &payer,
            change_bundle: &empty,
            deposit: 2_000_000,
            params: &params(),
        })
        .unwrap();
        assert_eq!(plan.outputs.len(), 1);
        assert_eq!(plan.outputs[0].value.coin, 3_820_000);
    }
}
