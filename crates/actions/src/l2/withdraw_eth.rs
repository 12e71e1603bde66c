use alloy::primitives::{Address, TxHash};
use opstack_primitives::{
    constants::{L2_STANDARD_BRIDGE, OVM_ETH},
    options::CallOptions,
    params::{WithdrawErc20Parameters, WithdrawEthParameters},
};

use super::withdraw_erc20::{write_withdraw_erc20, WriteWithdrawErc20Parameters};
use crate::{errors::WriteContractError, writer::ContractWriter};

/// Arguments of [`write_withdraw_eth`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteWithdrawEthParameters {
    pub args: WithdrawEthParameters,
    pub l2_standard_bridge: Address,
    pub options: CallOptions,
}

impl WriteWithdrawEthParameters {
    pub fn new(args: WithdrawEthParameters) -> Self {
        Self {
            args,
            l2_standard_bridge: L2_STANDARD_BRIDGE,
            options: CallOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CallOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_l2_standard_bridge(mut self, bridge: Address) -> Self {
        self.l2_standard_bridge = bridge;
        self
    }

    /// Recasts the withdrawal as an ERC-20 withdrawal of [`OVM_ETH`] carrying
    /// `amount` as value.
    pub fn into_erc20(self) -> WriteWithdrawErc20Parameters {
        let WithdrawEthParameters {
            to,
            amount,
            min_gas_limit,
            extra_data,
        } = self.args;

        WriteWithdrawErc20Parameters {
            args: WithdrawErc20Parameters {
                l2_token: OVM_ETH,
                to,
                amount,
                min_gas_limit,
                extra_data: extra_data.unwrap_or_default(),
            },
            // msg.value must equal amount or StandardBridge reverts
            value: Some(amount),
            l2_standard_bridge: self.l2_standard_bridge,
            options: self.options,
        }
    }
}

/// Withdraws ETH to an L1 address.
///
/// Returns the hash of the submitted L2 transaction. This adds nothing on top
/// of [`write_withdraw_erc20`]: no checks, no retries, and any error comes back
/// exactly as the writer produced it.
pub async fn write_withdraw_eth<W>(
    client: &W,
    params: WriteWithdrawEthParameters,
) -> Result<TxHash, WriteContractError>
where
    W: ContractWriter + ?Sized,
{
    write_withdraw_erc20(client, params.into_erc20()).await
}
