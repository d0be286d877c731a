//! In-memory gateway implementations for tests and dry runs.

use std::cell::RefCell;

use cml_crypto::TransactionHash;
use linked_hash_map::LinkedHashMap;

use forge_cardano_lib::output::UnspentOutput;
use forge_cardano_lib::protocol_params::ProtocolParameters;
use forge_cardano_lib::transaction::TxPlan;
use forge_cardano_lib::{Address, AssetClass};

use crate::error::QueryError;
use crate::{ChainQuery, TxSubmit};

/// A static chain view. UTXOs are yielded in the order they were seeded,
/// which makes selection behavior reproducible in tests.
pub struct InMemoryChainQuery {
    accounts: LinkedHashMap<Address, Vec<UnspentOutput>>,
    tip_slot: u64,
    parameters: ProtocolParameters,
}

impl InMemoryChainQuery {
    pub fn new(parameters: ProtocolParameters, tip_slot: u64) -> Self {
        Self {
            accounts: LinkedHashMap::new(),
            tip_slot,
            parameters,
        }
    }

    pub fn with_utxos(mut self, address: Address, utxos: Vec<UnspentOutput>) -> Self {
        self.accounts.entry(address).or_insert_with(Vec::new).extend(utxos);
        self
    }
}

impl ChainQuery for InMemoryChainQuery {
    fn utxos_at(
        &self,
        address: &Address,
        filter: Option<&AssetClass>,
    ) -> Result<Vec<UnspentOutput>, QueryError> {
        let utxos = self.accounts.get(address).cloned().unwrap_or_default();
        let filtered = match filter {
            None => utxos,
            Some(AssetClass::Native) => utxos.into_iter().filter(|u| u.is_ada_only()).collect(),
            Some(ac @ AssetClass::Token(_)) => utxos
                .into_iter()
                .filter(|u| u.value.amount_of(ac).unwrap_or(0) > 0)
                .collect(),
        };
        Ok(filtered)
    }

    fn chain_tip_slot(&self) -> Result<u64, QueryError> {
        Ok(self.tip_slot)
    }

    fn protocol_parameters(&self) -> Result<ProtocolParameters, QueryError> {
        Ok(self.parameters.clone())
    }
}

/// Records submitted plans instead of talking to a node.
#[derive(Default)]
pub struct RecordingTxSubmit {
    pub submitted: RefCell<Vec<TxPlan>>,
}

impl TxSubmit for RecordingTxSubmit {
    fn build_and_submit(&self, plan: &TxPlan) -> Result<TransactionHash, QueryError> {
        self.submitted.borrow_mut().push(plan.clone());
        Ok(TransactionHash::from([0u8; TransactionHash::BYTE_COUNT]))
    }
}
