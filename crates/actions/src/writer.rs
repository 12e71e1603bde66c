//! The generic contract write every action bottoms out in.

use alloy::primitives::{Address, Bytes, TxHash, U256};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use opstack_contracts::ContractFunction;
use opstack_primitives::options::CallOptions;

use crate::errors::WriteContractError;

/// A fully described contract call, ready to be signed and submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteContractParameters {
    /// Contract being called.
    pub address: Address,

    /// Name of the contract ABI the call was built from.
    pub contract: &'static str,

    /// Name of the function being called.
    pub function: &'static str,

    /// ABI-encoded calldata, selector included.
    pub input: Bytes,

    /// Native value attached to the call.
    pub value: Option<U256>,

    pub options: CallOptions,
}

impl WriteContractParameters {
    /// Encodes `call` against the contract deployed at `address`.
    pub fn new<F: ContractFunction>(
        address: Address,
        call: &F,
        value: Option<U256>,
        options: CallOptions,
    ) -> Self {
        Self {
            address,
            contract: F::CONTRACT,
            function: F::function_name(),
            input: call.abi_encode().into(),
            value,
            options,
        }
    }

    /// Decodes the calldata back into the typed call.
    pub fn decode_call<F: ContractFunction>(&self) -> Result<F, alloy_sol_types::Error> {
        F::abi_decode(&self.input, true)
    }
}

/// Something that can submit a contract call and hand back the transaction
/// hash.
///
/// Ordering, signing, fee filling and cancellation are all up to the
/// implementation.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContractWriter {
    async fn write_contract(
        &self,
        params: WriteContractParameters,
    ) -> Result<TxHash, WriteContractError>;
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;
    use alloy_sol_types::SolCall;
    use opstack_contracts::L2StandardBridge::withdrawToCall;
    use opstack_primitives::constants::{L2_STANDARD_BRIDGE, OVM_ETH};

    use super::*;

    #[test]
    fn test_params_from_call() {
        let call = withdrawToCall {
            l2Token: OVM_ETH,
            to: address!("000000000000000000000000000000000000abcd"),
            amount: U256::from(5u64),
            minGasLimit: 100,
            extraData: Bytes::from_static(b"hi"),
        };

        let params = WriteContractParameters::new(
            L2_STANDARD_BRIDGE,
            &call,
            Some(U256::from(5u64)),
            CallOptions::default(),
        );

        assert_eq!(params.address, L2_STANDARD_BRIDGE);
        assert_eq!(params.contract, "L2StandardBridge");
        assert_eq!(params.function, "withdrawTo");
        assert_eq!(&params.input[..4], &withdrawToCall::SELECTOR);
        assert_eq!(params.decode_call::<withdrawToCall>().expect("decodes"), call);
    }
}
