use alloy::primitives::{Address, TxHash};
use opstack_contracts::L1StandardBridge::depositERC20ToCall;
use opstack_primitives::{options::CallOptions, params::DepositErc20Parameters};
use tracing::*;

use crate::{
    errors::WriteContractError,
    writer::{ContractWriter, WriteContractParameters},
};

/// Arguments of [`write_deposit_erc20`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteDepositErc20Parameters {
    pub args: DepositErc20Parameters,

    /// L1StandardBridge of the target L2.
    pub l1_standard_bridge: Address,

    pub options: CallOptions,
}

impl WriteDepositErc20Parameters {
    pub fn new(args: DepositErc20Parameters, l1_standard_bridge: Address) -> Self {
        Self {
            args,
            l1_standard_bridge,
            options: CallOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CallOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the `L1StandardBridge.depositERC20To` call. No value is
    /// attached; the bridge pulls the tokens through an allowance.
    pub fn into_write_contract(self) -> WriteContractParameters {
        let DepositErc20Parameters {
            l1_token,
            l2_token,
            to,
            amount,
            min_gas_limit,
            extra_data,
        } = self.args;

        let call = depositERC20ToCall {
            l1Token: l1_token,
            l2Token: l2_token,
            to,
            amount,
            minGasLimit: min_gas_limit,
            extraData: extra_data.unwrap_or_default(),
        };

        WriteContractParameters::new(self.l1_standard_bridge, &call, None, self.options)
    }
}

/// Deposits an ERC-20 token to an L2 address through the L1StandardBridge.
///
/// The bridge must already hold an allowance for `amount`.
pub async fn write_deposit_erc20<W>(
    client: &W,
    params: WriteDepositErc20Parameters,
) -> Result<TxHash, WriteContractError>
where
    W: ContractWriter + ?Sized,
{
    debug!(
        bridge = %params.l1_standard_bridge,
        l1_token = %params.args.l1_token,
        l2_token = %params.args.l2_token,
        to = %params.args.to,
        amount = %params.args.amount,
        "depositing ERC-20 to L2"
    );

    client.write_contract(params.into_write_contract()).await
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, U256};

    use super::*;
    use crate::writer::MockContractWriter;

    const BRIDGE: Address = address!("99C9fc46f92E8a1c0deC1b1747d010903E884bE1");
    const USDC_L1: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
    const USDC_L2: Address = address!("7F5c764cBc14f9669B88837ca1490cCa17c31607");

    fn deposit() -> WriteDepositErc20Parameters {
        WriteDepositErc20Parameters::new(
            DepositErc20Parameters {
                l1_token: USDC_L1,
                l2_token: USDC_L2,
                to: address!("000000000000000000000000000000000000abcd"),
                amount: U256::from(2_500_000u64),
                min_gas_limit: 200_000,
                extra_data: None,
            },
            BRIDGE,
        )
    }

    #[test]
    fn test_into_write_contract() {
        let params = deposit().into_write_contract();

        assert_eq!(params.address, BRIDGE);
        assert_eq!(params.function, "depositERC20To");
        assert!(params.value.is_none());

        let call = params
            .decode_call::<depositERC20ToCall>()
            .expect("valid calldata");
        assert_eq!(call.l1Token, USDC_L1);
        assert_eq!(call.l2Token, USDC_L2);
        assert_eq!(call.amount, U256::from(2_500_000u64));
        assert_eq!(call.minGasLimit, 200_000);
        assert!(call.extraData.is_empty());
    }

    #[tokio::test]
    async fn test_writer_error_returned_as_is() {
        let mut client = MockContractWriter::new();
        client
            .expect_write_contract()
            .times(1)
            .returning(|_| {
                Err(WriteContractError::ChainMismatch {
                    current: 10,
                    expected: 1,
                })
            });

        let params = deposit().with_options(CallOptions::default().with_chain_id(1));
        let err = write_deposit_erc20(&client, params)
            .await
            .expect_err("writer rejected the call");
        assert!(matches!(
            err,
            WriteContractError::ChainMismatch {
                current: 10,
                expected: 1
            }
        ));
    }
}
