use cml_chain::{Coin, PolicyId};

use cardano_node_gateway::fees::FeeEstimator;
use cardano_node_gateway::ChainQuery;
use forge_cardano_lib::constants::DEFAULT_TTL_BUFFER;
use forge_cardano_lib::min_utxo::min_utxo_value;
use forge_cardano_lib::protocol_params::ProtocolSizeParameters;
use forge_cardano_lib::transaction::{CertificateRef, MetadataRef, MintDelta, TxPlan};
use forge_cardano_lib::value::MultiAsset;
use forge_cardano_lib::{Address, AssetName, Token};

use crate::assemble::{assemble, AssembleRequest, OutputPlan, PrimaryOutput};
use crate::balance::{balance, AdaUtxoOrdering, BalanceRequest, BalancedFunds};
use crate::demand::AssetDemand;
use crate::error::TxPlanError;
use crate::gather::{gather, SelectionResult};

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerConfig {
    pub ttl_buffer: u64,
    pub ada_utxo_ordering: AdaUtxoOrdering,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            ttl_buffer: DEFAULT_TTL_BUFFER,
            ada_utxo_ordering: AdaUtxoOrdering::default(),
        }
    }
}

pub struct MintRequest {
    pub policy: PolicyId,
    pub assets: Vec<(AssetName, u64)>,
    pub payment_address: Address,
    pub witness_count: usize,
    pub metadata: Option<MetadataRef>,
}

/// Burn quantities may arrive in either sign; magnitudes are burned.
pub struct BurnRequest {
    pub policy: PolicyId,
    pub assets: Vec<(AssetName, i64)>,
    pub payment_address: Address,
    pub witness_count: usize,
    pub metadata: Option<MetadataRef>,
}

pub struct SendAssetsRequest {
    pub assets: Vec<(Token, u64)>,
    /// Extra ada for the recipient on top of the min-UTxO floor.
    pub ada: Coin,
    pub recipient: Address,
    pub from_address: Address,
    pub witness_count: usize,
    pub metadata: Option<MetadataRef>,
}

pub struct PaymentRequest {
    pub amount: Coin,
    pub recipient: Address,
    pub from_address: Address,
    pub witness_count: usize,
    pub metadata: Option<MetadataRef>,
}

pub struct CertificateRequest {
    pub certificates: Vec<CertificateRef>,
    /// Protocol deposit the certificates carry; defaults to the live
    /// `keyDeposit` when absent.
    pub deposit: Option<Coin>,
    pub from_address: Address,
    pub witness_count: usize,
    pub metadata: Option<MetadataRef>,
}

/// Builds transaction plans against a chain view and a fee oracle.
///
/// Planning is synchronous and blocking; concurrent plans for the same
/// address must be serialized by the caller, or both may select the same
/// UTXO.
pub struct TxPlanner<'a, Q: ?Sized, F: ?Sized> {
    query: &'a Q,
    fees: &'a F,
    conf: PlannerConfig,
}

impl<'a, Q, F> TxPlanner<'a, Q, F>
where
    Q: ChainQuery + ?Sized,
    F: FeeEstimator + ?Sized,
{
    pub fn new(query: &'a Q, fees: &'a F) -> Self {
        Self::with_config(query, fees, PlannerConfig::default())
    }

    pub fn with_config(query: &'a Q, fees: &'a F, conf: PlannerConfig) -> Self {
        Self { query, fees, conf }
    }

    /// Plan a transaction minting native assets under one policy. The
    /// payer funds the fee and receives the minted tokens.
    pub fn mint(&self, req: MintRequest) -> Result<TxPlan, TxPlanError> {
        if req.assets.is_empty() {
            return Err(TxPlanError::InvalidQuantity { op: "mint" });
        }
        let mut delta = MintDelta::new();
        let mut minted = MultiAsset::new();
        for (name, quantity) in &req.assets {
            if *quantity == 0 {
                return Err(TxPlanError::InvalidQuantity { op: "mint" });
            }
            delta.add((req.policy, name.clone()), *quantity as i64);
            minted.add((req.policy, name.clone()), *quantity);
        }
        log::info!(
            "planning mint of {} asset(s) under policy {}",
            delta.len(),
            req.policy.to_hex()
        );

        let live = self.query.protocol_parameters()?;
        let params = ProtocolSizeParameters::from(&live);
        let floor = min_utxo_value(minted.tokens(), &params);

        let selection = SelectionResult::empty();
        let funds = balance(
            self.query,
            self.fees,
            &selection,
            &BalanceRequest {
                address: &req.payment_address,
                required_floor: floor,
                witness_count: req.witness_count,
                ordering: self.conf.ada_utxo_ordering,
                draft_assets: &minted,
                mint: Some(&delta),
                metadata: req.metadata.as_ref(),
                certificates: &[],
            },
        )?;

        let empty = MultiAsset::new();
        let assembled = assemble(&AssembleRequest {
            fee: funds.fee,
            input_lovelace: funds.input_lovelace,
            primary: Some(PrimaryOutput {
                destination: &req.payment_address,
                requested_ada: 0,
                bundle: &minted,
            }),
            change_address: &req.payment_address,
            change_bundle: &empty,
            deposit: 0,
            params: &params,
        })?;

        self.finish(selection, funds, assembled, Some(delta), req.metadata, Vec::new())
    }

    /// Plan a transaction burning native assets. The demanded quantities
    /// are covered from the address's UTXOs and destroyed via a negative
    /// mint; everything else those UTXOs carried returns to the payer.
    pub fn burn(&self, req: BurnRequest) -> Result<TxPlan, TxPlanError> {
        if req.assets.is_empty() {
            return Err(TxPlanError::InvalidQuantity { op: "burn" });
        }
        let mut delta = MintDelta::new();
        let mut demand = AssetDemand::new();
        for (name, quantity) in &req.assets {
            let magnitude = quantity.unsigned_abs();
            if magnitude == 0 {
                return Err(TxPlanError::InvalidQuantity { op: "burn" });
            }
            demand.add((req.policy, name.clone()), magnitude);
            delta.add((req.policy, name.clone()), -(magnitude as i64));
        }
        log::info!(
            "planning burn of {} asset(s) under policy {}",
            delta.len(),
            req.policy.to_hex()
        );

        let live = self.query.protocol_parameters()?;
        let params = ProtocolSizeParameters::from(&live);

        let selection = gather(self.query, &req.payment_address, &demand)?;
        log::debug!(
            "burn demand covered by {} input(s) holding {} lovelace",
            selection.inputs.len(),
            selection.input_lovelace
        );
        let floor = min_utxo_value(selection.change_bundle.tokens(), &params);

        let funds = balance(
            self.query,
            self.fees,
            &selection,
            &BalanceRequest {
                address: &req.payment_address,
                required_floor: floor,
                witness_count: req.witness_count,
                ordering: self.conf.ada_utxo_ordering,
                draft_assets: &selection.change_bundle,
                mint: Some(&delta),
                metadata: req.metadata.as_ref(),
                certificates: &[],
            },
        )?;

        let assembled = assemble(&AssembleRequest {
            fee: funds.fee,
            input_lovelace: funds.input_lovelace,
            primary: None,
            change_address: &req.payment_address,
            change_bundle: &selection.change_bundle,
            deposit: 0,
            params: &params,
        })?;

        self.finish(selection, funds, assembled, Some(delta), req.metadata, Vec::new())
    }

    /// Plan a transfer of native assets to another address.
    pub fn send_assets(&self, req: SendAssetsRequest) -> Result<TxPlan, TxPlanError> {
        if req.assets.is_empty() {
            return Err(TxPlanError::InvalidQuantity { op: "send" });
        }
        let mut demand = AssetDemand::new();
        for (token, quantity) in &req.assets {
            if *quantity == 0 {
                return Err(TxPlanError::InvalidQuantity { op: "send" });
            }
            demand.add(token.clone(), *quantity);
        }

        let live = self.query.protocol_parameters()?;
        let params = ProtocolSizeParameters::from(&live);

        let selection = gather(self.query, &req.from_address, &demand)?;
        let primary_floor = min_utxo_value(selection.output_bundle.tokens(), &params).max(req.ada);
        let change_floor = if selection.change_bundle.is_empty() {
            0
        } else {
            min_utxo_value(selection.change_bundle.tokens(), &params)
        };
        let combined = selection.output_bundle.union(&selection.change_bundle);

        let funds = balance(
            self.query,
            self.fees,
            &selection,
            &BalanceRequest {
                address: &req.from_address,
                required_floor: primary_floor + change_floor,
                witness_count: req.witness_count,
                ordering: self.conf.ada_utxo_ordering,
                draft_assets: &combined,
                mint: None,
                metadata: req.metadata.as_ref(),
                certificates: &[],
            },
        )?;

        let assembled = assemble(&AssembleRequest {
            fee: funds.fee,
            input_lovelace: funds.input_lovelace,
            primary: Some(PrimaryOutput {
                destination: &req.recipient,
                requested_ada: req.ada,
                bundle: &selection.output_bundle,
            }),
            change_address: &req.from_address,
            change_bundle: &selection.change_bundle,
            deposit: 0,
            params: &params,
        })?;

        self.finish(selection, funds, assembled, None, req.metadata, Vec::new())
    }

    /// Plan a plain ada payment.
    pub fn send_payment(&self, req: PaymentRequest) -> Result<TxPlan, TxPlanError> {
        if req.amount == 0 {
            return Err(TxPlanError::InvalidQuantity { op: "payment" });
        }
        let live = self.query.protocol_parameters()?;
        let params = ProtocolSizeParameters::from(&live);

        let empty = MultiAsset::new();
        let selection = SelectionResult::empty();
        let funds = balance(
            self.query,
            self.fees,
            &selection,
            &BalanceRequest {
                address: &req.from_address,
                required_floor: params.min_utxo_value.max(req.amount),
                witness_count: req.witness_count,
                ordering: self.conf.ada_utxo_ordering,
                draft_assets: &empty,
                mint: None,
                metadata: req.metadata.as_ref(),
                certificates: &[],
            },
        )?;

        let assembled = assemble(&AssembleRequest {
            fee: funds.fee,
            input_lovelace: funds.input_lovelace,
            primary: Some(PrimaryOutput {
                destination: &req.recipient,
                requested_ada: req.amount,
                bundle: &empty,
            }),
            change_address: &req.from_address,
            change_bundle: &empty,
            deposit: 0,
            params: &params,
        })?;

        self.finish(selection, funds, assembled, None, req.metadata, Vec::new())
    }

    /// Plan a transaction that attaches certificates and pays their
    /// deposit; the remainder returns to the payer as change.
    pub fn with_certificates(&self, req: CertificateRequest) -> Result<TxPlan, TxPlanError> {
        let live = self.query.protocol_parameters()?;
        let params = ProtocolSizeParameters::from(&live);
        let deposit = req.deposit.unwrap_or(live.key_deposit);

        let empty = MultiAsset::new();
        let selection = SelectionResult::empty();
        let funds = balance(
            self.query,
            self.fees,
            &selection,
            &BalanceRequest {
                address: &req.from_address,
                required_floor: deposit + params.min_utxo_value,
                witness_count: req.witness_count,
                ordering: self.conf.ada_utxo_ordering,
                draft_assets: &empty,
                mint: None,
                metadata: req.metadata.as_ref(),
                certificates: &req.certificates,
            },
        )?;

        let assembled = assemble(&AssembleRequest {
            fee: funds.fee,
            input_lovelace: funds.input_lovelace,
            primary: None,
            change_address: &req.from_address,
            change_bundle: &empty,
            deposit,
            params: &params,
        })?;

        self.finish(selection, funds, assembled, None, req.metadata, req.certificates)
    }

    fn finish(
        &self,
        selection: SelectionResult,
        funds: BalancedFunds,
        assembled: OutputPlan,
        mint: Option<MintDelta>,
        metadata: Option<MetadataRef>,
        certificates: Vec<CertificateRef>,
    ) -> Result<TxPlan, TxPlanError> {
        let valid_until = self.query.chain_tip_slot()? + self.conf.ttl_buffer;
        let mut inputs = selection.input_refs();
        inputs.extend(funds.extra_inputs.iter().map(|utxo| utxo.reference));
        log::info!(
            "plan ready: {} input(s), {} output(s), fee {}",
            inputs.len(),
            assembled.outputs.len(),
            assembled.fee
        );
        Ok(TxPlan {
            inputs,
            outputs: assembled.outputs,
            fee: assembled.fee,
            valid_until,
            mint,
            metadata,
            certificates,
        })
    }
}
