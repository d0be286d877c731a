use cml_chain::PolicyId;
use cml_crypto::TransactionHash;

use cardano_node_gateway::fees::LinearFeeEstimator;
use cardano_node_gateway::mock::{InMemoryChainQuery, RecordingTxSubmit};
use cardano_node_gateway::TxSubmit;
use forge_cardano_lib::min_utxo::min_utxo_value;
use forge_cardano_lib::output::UnspentOutput;
use forge_cardano_lib::protocol_params::{ProtocolParameters, ProtocolSizeParameters};
use forge_cardano_lib::transaction::{CertificateRef, TxPlan};
use forge_cardano_lib::value::{MultiAsset, Value};
use forge_cardano_lib::{Address, AssetName, OutputRef, Token};
use forge_offchain_cardano::balance::AdaUtxoOrdering;
use forge_offchain_cardano::error::{ShortfallReason, TxPlanError};
use forge_offchain_cardano::planner::{
    BurnRequest, CertificateRequest, MintRequest, PaymentRequest, PlannerConfig, SendAssetsRequest,
    TxPlanner,
};

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

fn ada_utxo(ix: u64, coin: u64) -> UnspentOutput {
    UnspentOutput::new(
        OutputRef::new(TransactionHash::from([5u8; TransactionHash::BYTE_COUNT]), ix),
        Value::ada_only(coin),
    )
}

fn asset_utxo(ix: u64, coin: u64, assets: &[(Token, u64)]) -> UnspentOutput {
    let mut bundle = MultiAsset::new();
    for (token, amount) in assets {
        bundle.add(token.clone(), *amount);
    }
    UnspentOutput::new(
        OutputRef::new(TransactionHash::from([5u8; TransactionHash::BYTE_COUNT]), ix),
        Value::new(coin, bundle),
    )
}

fn payer() -> Address {
    Address::from("addr_test1payer")
}

fn recipient() -> Address {
    Address::from("addr_test1recipient")
}

fn ada_entering(plan: &TxPlan, seeded: &[UnspentOutput]) -> u64 {
    plan.inputs
        .iter()
        .map(|input| {
            seeded
                .iter()
                .find(|utxo| utxo.reference == *input)
                .expect("plan consumed a UTXO that was never seeded")
                .value
                .coin
        })
        .sum()
}

fn ada_leaving(plan: &TxPlan) -> u64 {
    plan.outputs.iter().map(|out| out.value.coin).sum::<u64>() + plan.fee
}

fn assert_no_sub_minimum_outputs(plan: &TxPlan) {
    let sizes = ProtocolSizeParameters::mary_era(params().min_utxo_value);
    for out in &plan.outputs {
        let floor = min_utxo_value(out.value.multiasset.tokens(), &sizes);
        assert!(
            out.value.coin >= floor,
            "output of {} lovelace below its floor of {}",
            out.value.coin,
            floor
        );
    }
}

#[test]
fn mint_plan_pays_the_floor_and_returns_the_rest() {
    let seeded = vec![ada_utxo(0, 5_000_000), ada_utxo(1, 2_000_000)];
    let query = InMemoryChainQuery::new(params(), 100).with_utxos(payer(), seeded.clone());
    let fees = LinearFeeEstimator::mainnet();
    let planner = TxPlanner::new(&query, &fees);

    let plan = planner
        .mint(MintRequest {
            policy: PolicyId::from([1u8; 28]),
            assets: vec![(AssetName::try_from("tokenA").unwrap(), 100)],
            payment_address: payer(),
            witness_count: 1,
            metadata: None,
        })
        .unwrap();

    // Largest-first: the 5 ada UTXO alone covers floor + fee.
    assert_eq!(plan.inputs.len(), 1);
    let minted = token(1, "tokenA");
    assert_eq!(plan.outputs[0].value.multiasset.amount_of(&minted), Some(100));
    assert_eq!(plan.outputs[0].value.coin, 1_444_443);
    let delta = plan.mint.as_ref().unwrap();
    assert_eq!(delta.iter().next().unwrap().1, 100);

    assert_no_sub_minimum_outputs(&plan);
    assert_eq!(ada_entering(&plan, &seeded), ada_leaving(&plan));
}

#[test]
fn mint_against_an_empty_wallet_is_rejected_as_empty() {
    let query = InMemoryChainQuery::new(params(), 100);
    let fees = LinearFeeEstimator::mainnet();
    let planner = TxPlanner::new(&query, &fees);

    let result = planner.mint(MintRequest {
        policy: PolicyId::from([1u8; 28]),
        assets: vec![(AssetName::try_from("tokenA").unwrap(), 100)],
        payment_address: payer(),
        witness_count: 1,
        metadata: None,
    });
    match result {
        Err(TxPlanError::InsufficientFunds(shortfall)) => {
            assert_eq!(shortfall.reason, ShortfallReason::Empty);
            assert!(shortfall.to_string().contains("is empty"));
        }
        other => panic!("expected InsufficientFunds, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn mint_rejects_a_zero_quantity() {
    let query = InMemoryChainQuery::new(params(), 100);
    let fees = LinearFeeEstimator::mainnet();
    let planner = TxPlanner::new(&query, &fees);

    let result = planner.mint(MintRequest {
        policy: PolicyId::from([1u8; 28]),
        assets: vec![(AssetName::try_from("tokenA").unwrap(), 0)],
        payment_address: payer(),
        witness_count: 1,
        metadata: None,
    });
    assert!(matches!(result, Err(TxPlanError::InvalidQuantity { op: "mint" })));
}

#[test]
fn burn_keeps_the_remainder_and_merges_small_residual_into_change() {
    let seeded = vec![asset_utxo(0, 2_000_000, &[(token(1, "tokenA"), 10)])];
    let query = InMemoryChainQuery::new(params(), 100).with_utxos(payer(), seeded.clone());
    let fees = LinearFeeEstimator::mainnet();
    let planner = TxPlanner::new(&query, &fees);

    let plan = planner
        .burn(BurnRequest {
            policy: PolicyId::from([1u8; 28]),
            assets: vec![(AssetName::try_from("tokenA").unwrap(), -4)],
            payment_address: payer(),
            witness_count: 1,
            metadata: None,
        })
        .unwrap();

    assert_eq!(plan.inputs.len(), 1);
    assert_eq!(plan.outputs.len(), 1);
    // Residual below the bare minimum rides on the asset change output.
    assert_eq!(plan.outputs[0].value.coin, 2_000_000 - plan.fee);
    assert_eq!(plan.outputs[0].value.multiasset.amount_of(&token(1, "tokenA")), Some(6));
    let delta = plan.mint.as_ref().unwrap();
    assert_eq!(delta.iter().next().unwrap().1, -4);

    assert_no_sub_minimum_outputs(&plan);
    assert_eq!(ada_entering(&plan, &seeded), ada_leaving(&plan));
}

#[test]
fn burning_everything_leaves_an_ada_only_change_output() {
    let seeded = vec![asset_utxo(0, 2_000_000, &[(token(1, "tokenA"), 10)])];
    let query = InMemoryChainQuery::new(params(), 100).with_utxos(payer(), seeded.clone());
    let fees = LinearFeeEstimator::mainnet();
    let planner = TxPlanner::new(&query, &fees);

    let plan = planner
        .burn(BurnRequest {
            policy: PolicyId::from([1u8; 28]),
            assets: vec![(AssetName::try_from("tokenA").unwrap(), 10)],
            payment_address: payer(),
            witness_count: 1,
            metadata: None,
        })
        .unwrap();

    assert_eq!(plan.outputs.len(), 1);
    assert!(plan.outputs[0].value.contains_only_ada());
    assert_eq!(ada_entering(&plan, &seeded), ada_leaving(&plan));
}

#[test]
fn burn_demanding_more_than_held_names_the_asset() {
    let seeded = vec![asset_utxo(0, 2_000_000, &[(token(1, "tokenA"), 3)])];
    let query = InMemoryChainQuery::new(params(), 100).with_utxos(payer(), seeded);
    let fees = LinearFeeEstimator::mainnet();
    let planner = TxPlanner::new(&query, &fees);

    let result = planner.burn(BurnRequest {
        policy: PolicyId::from([1u8; 28]),
        assets: vec![(AssetName::try_from("tokenA").unwrap(), 5)],
        payment_address: payer(),
        witness_count: 1,
        metadata: None,
    });
    match result {
        Err(TxPlanError::InsufficientAsset {
            asset,
            required,
            available,
        }) => {
            assert_eq!(asset.into_token(), Some(token(1, "tokenA")));
            assert_eq!(required, 5);
            assert_eq!(available, 3);
        }
        other => panic!("expected InsufficientAsset, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn send_assets_produces_recipient_change_and_ada_outputs() {
    let seeded = vec![
        asset_utxo(
            0,
            2_000_000,
            &[(token(1, "tokenA"), 10), (token(2, "bystander"), 3)],
        ),
        ada_utxo(1, 5_000_000),
    ];
    let query = InMemoryChainQuery::new(params(), 100).with_utxos(payer(), seeded.clone());
    let fees = LinearFeeEstimator::mainnet();
    let planner = TxPlanner::new(&query, &fees);

    let plan = planner
        .send_assets(SendAssetsRequest {
            assets: vec![(token(1, "tokenA"), 7)],
            ada: 0,
            recipient: recipient(),
            from_address: payer(),
            witness_count: 1,
            metadata: None,
        })
        .unwrap();

    assert_eq!(plan.inputs.len(), 2);
    assert_eq!(plan.outputs.len(), 3);

    let to_recipient = &plan.outputs[0];
    assert_eq!(to_recipient.address, recipient());
    assert_eq!(to_recipient.value.multiasset.amount_of(&token(1, "tokenA")), Some(7));

    let asset_change = &plan.outputs[1];
    assert_eq!(asset_change.address, payer());
    assert_eq!(asset_change.value.multiasset.amount_of(&token(1, "tokenA")), Some(3));
    assert_eq!(asset_change.value.multiasset.amount_of(&token(2, "bystander")), Some(3));

    assert!(plan.outputs[2].value.contains_only_ada());

    assert_no_sub_minimum_outputs(&plan);
    assert_eq!(ada_entering(&plan, &seeded), ada_leaving(&plan));
}

#[test]
fn payment_change_below_the_minimum_folds_into_the_fee() {
    let seeded = vec![ada_utxo(0, 5_400_000)];
    let query = InMemoryChainQuery::new(params(), 100).with_utxos(payer(), seeded.clone());
    let fees = LinearFeeEstimator::mainnet();
    let planner = TxPlanner::new(&query, &fees);

    let plan = planner
        .send_payment(PaymentRequest {
            amount: 5_000_000,
            recipient: recipient(),
            from_address: payer(),
            witness_count: 1,
            metadata: None,
        })
        .unwrap();

    assert_eq!(plan.outputs.len(), 1);
    assert_eq!(plan.outputs[0].value.coin, 5_000_000);
    assert_eq!(plan.fee, 400_000);
    assert_eq!(ada_entering(&plan, &seeded), ada_leaving(&plan));
}

#[test]
fn payment_with_room_creates_a_change_output() {
    let seeded = vec![ada_utxo(0, 10_000_000)];
    let query = InMemoryChainQuery::new(params(), 100).with_utxos(payer(), seeded.clone());
    let fees = LinearFeeEstimator::mainnet();
    let planner = TxPlanner::new(&query, &fees);

    let plan = planner
        .send_payment(PaymentRequest {
            amount: 5_000_000,
            recipient: recipient(),
            from_address: payer(),
            witness_count: 1,
            metadata: None,
        })
        .unwrap();

    assert_eq!(plan.outputs.len(), 2);
    assert_eq!(plan.outputs[0].address, recipient());
    assert_eq!(plan.outputs[0].value.coin, 5_000_000);
    assert_eq!(plan.outputs[1].address, payer());
    assert_no_sub_minimum_outputs(&plan);
    assert_eq!(ada_entering(&plan, &seeded), ada_leaving(&plan));
}

#[test]
fn certificate_plan_accounts_for_the_deposit() {
    let seeded = vec![ada_utxo(0, 5_000_000)];
    let query = InMemoryChainQuery::new(params(), 100).with_utxos(payer(), seeded.clone());
    let fees = LinearFeeEstimator::mainnet();
    let planner = TxPlanner::new(&query, &fees);

    let plan = planner
        .with_certificates(CertificateRequest {
            certificates: vec![CertificateRef::new("stake.cert")],
            deposit: None,
            from_address: payer(),
            witness_count: 2,
            metadata: None,
        })
        .unwrap();

    assert_eq!(plan.certificates.len(), 1);
    assert_eq!(plan.outputs.len(), 1);
    // keyDeposit leaves the balance without an output.
    assert_eq!(ada_entering(&plan, &seeded), ada_leaving(&plan) + 2_000_000);
    assert_no_sub_minimum_outputs(&plan);
}

#[test]
fn validity_horizon_is_tip_plus_buffer() {
    let seeded = vec![ada_utxo(0, 10_000_000)];
    let query = InMemoryChainQuery::new(params(), 1_234).with_utxos(payer(), seeded);
    let fees = LinearFeeEstimator::mainnet();
    let planner = TxPlanner::new(&query, &fees);

    let plan = planner
        .send_payment(PaymentRequest {
            amount: 5_000_000,
            recipient: recipient(),
            from_address: payer(),
            witness_count: 1,
            metadata: None,
        })
        .unwrap();
    assert_eq!(plan.valid_until, 2_234);
}

#[test]
fn ordering_policy_changes_how_many_inputs_are_consumed() {
    let seeded = vec![ada_utxo(0, 1_500_000), ada_utxo(1, 5_000_000), ada_utxo(2, 2_000_000)];
    let fees = LinearFeeEstimator::mainnet();

    let query = InMemoryChainQuery::new(params(), 100).with_utxos(payer(), seeded.clone());
    let planner = TxPlanner::new(&query, &fees);
    let request = || PaymentRequest {
        amount: 2_000_000,
        recipient: recipient(),
        from_address: payer(),
        witness_count: 1,
        metadata: None,
    };
    let largest = planner.send_payment(request()).unwrap();
    assert_eq!(largest.inputs.len(), 1);

    let query = InMemoryChainQuery::new(params(), 100).with_utxos(payer(), seeded);
    let planner = TxPlanner::with_config(
        &query,
        &fees,
        PlannerConfig {
            ttl_buffer: 1_000,
            ada_utxo_ordering: AdaUtxoOrdering::SmallestFirst,
        },
    );
    let smallest = planner.send_payment(request()).unwrap();
    assert!(smallest.inputs.len() > largest.inputs.len());
}

#[test]
fn a_finished_plan_can_be_handed_to_the_submitter() {
    let seeded = vec![ada_utxo(0, 10_000_000)];
    let query = InMemoryChainQuery::new(params(), 100).with_utxos(payer(), seeded);
    let fees = LinearFeeEstimator::mainnet();
    let planner = TxPlanner::new(&query, &fees);

    let plan = planner
        .send_payment(PaymentRequest {
            amount: 5_000_000,
            recipient: recipient(),
            from_address: payer(),
            witness_count: 1,
            metadata: None,
        })
        .unwrap();

    let submitter = RecordingTxSubmit::default();
    submitter.build_and_submit(&plan).unwrap();
    assert_eq!(submitter.submitted.borrow().len(), 1);
    assert_eq!(submitter.submitted.borrow()[0].fee, plan.fee);
}
