//! [`ContractWriter`] backed by an alloy provider.

use std::marker::PhantomData;

use alloy::{
    network::{Ethereum, TransactionBuilder},
    primitives::TxHash,
    providers::Provider,
    rpc::types::TransactionRequest,
    transports::Transport,
};
use async_trait::async_trait;
use tracing::*;

use crate::{
    errors::WriteContractError,
    writer::{ContractWriter, WriteContractParameters},
};

/// Submits contract calls through an alloy [`Provider`].
///
/// Signing, nonce and fee filling are whatever the provider's fillers do. The
/// only check done here is the chain override in [`CallOptions`].
///
/// [`CallOptions`]: opstack_primitives::options::CallOptions
#[derive(Debug, Clone)]
pub struct ProviderWriter<P, T> {
    provider: P,
    _transport: PhantomData<fn() -> T>,
}

impl<P, T> ProviderWriter<P, T> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            _transport: PhantomData,
        }
    }

    pub fn inner(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P, T> ContractWriter for ProviderWriter<P, T>
where
    P: Provider<T, Ethereum>,
    T: Transport + Clone,
{
    async fn write_contract(
        &self,
        params: WriteContractParameters,
    ) -> Result<TxHash, WriteContractError> {
        if let Some(expected) = params.options.chain_id {
            let current = self.provider.get_chain_id().await?;
            if current != expected {
                return Err(WriteContractError::ChainMismatch { current, expected });
            }
        }

        let tx = build_transaction_request(&params);
        debug!(
            contract = params.contract,
            function = params.function,
            address = %params.address,
            value = ?params.value,
            "submitting contract call"
        );

        let pending = self.provider.send_transaction(tx).await?;
        let tx_hash = *pending.tx_hash();
        info!(
            contract = params.contract,
            function = params.function,
            %tx_hash,
            "contract call submitted"
        );

        Ok(tx_hash)
    }
}

/// Turns the call description into a transaction request, leaving everything
/// not set in the call options for the provider to fill.
fn build_transaction_request(params: &WriteContractParameters) -> TransactionRequest {
    let mut tx = TransactionRequest::default()
        .with_to(params.address)
        .with_input(params.input.clone());

    if let Some(value) = params.value {
        tx.set_value(value);
    }

    let opts = &params.options;
    if let Some(account) = opts.account {
        tx.set_from(account);
    }
    if let Some(chain_id) = opts.chain_id {
        tx.set_chain_id(chain_id);
    }
    if let Some(gas) = opts.gas {
        tx.set_gas_limit(gas.into());
    }
    if let Some(max_fee) = opts.max_fee_per_gas {
        tx.set_max_fee_per_gas(max_fee);
    }
    if let Some(max_priority_fee) = opts.max_priority_fee_per_gas {
        tx.set_max_priority_fee_per_gas(max_priority_fee);
    }
    if let Some(nonce) = opts.nonce {
        tx.set_nonce(nonce);
    }

    tx
}
