use alloy::primitives::{Address, TxHash};
use opstack_contracts::OptimismPortal::depositTransactionCall;
use opstack_primitives::{options::CallOptions, params::DepositEthParameters};
use tracing::*;

use crate::{
    errors::WriteContractError,
    writer::{ContractWriter, WriteContractParameters},
};

/// Arguments of [`write_deposit_eth`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteDepositEthParameters {
    pub args: DepositEthParameters,

    /// OptimismPortal of the target L2, on L1.
    pub portal: Address,

    pub options: CallOptions,
}

impl WriteDepositEthParameters {
    pub fn new(args: DepositEthParameters, portal: Address) -> Self {
        Self {
            args,
            portal,
            options: CallOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CallOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the `OptimismPortal.depositTransaction` call, sending `amount`
    /// along as value.
    pub fn into_write_contract(self) -> WriteContractParameters {
        let DepositEthParameters {
            to,
            gas_limit,
            data,
            amount,
        } = self.args;

        let call = depositTransactionCall {
            to,
            value: amount,
            gasLimit: gas_limit,
            isCreation: false,
            data: data.unwrap_or_default(),
        };

        WriteContractParameters::new(self.portal, &call, Some(amount), self.options)
    }
}

/// Deposits ETH to an L2 address through the OptimismPortal.
///
/// Returns the hash of the L1 transaction.
pub async fn write_deposit_eth<W>(
    client: &W,
    params: WriteDepositEthParameters,
) -> Result<TxHash, WriteContractError>
where
    W: ContractWriter + ?Sized,
{
    debug!(
        portal = %params.portal,
        to = %params.args.to,
        amount = %params.args.amount,
        gas_limit = params.args.gas_limit,
        "depositing ETH to L2"
    );

    client.write_contract(params.into_write_contract()).await
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, Bytes, U256};

    use super::*;
    use crate::writer::MockContractWriter;

    const PORTAL: Address = address!("bEb5Fc579115071764c7423A4f12eDde41f106Ed");

    fn deposit(data: Option<Bytes>) -> WriteDepositEthParameters {
        WriteDepositEthParameters::new(
            DepositEthParameters {
                to: address!("000000000000000000000000000000000000abcd"),
                gas_limit: 100_000,
                data,
                amount: U256::from(5_000u64),
            },
            PORTAL,
        )
    }

    #[test]
    fn test_into_write_contract() {
        let params = deposit(None).into_write_contract();

        assert_eq!(params.address, PORTAL);
        assert_eq!(params.contract, "OptimismPortal");
        assert_eq!(params.function, "depositTransaction");
        assert_eq!(params.value, Some(U256::from(5_000u64)));

        let call = params
            .decode_call::<depositTransactionCall>()
            .expect("valid calldata");
        assert_eq!(call.to, address!("000000000000000000000000000000000000abcd"));
        assert_eq!(call.value, U256::from(5_000u64));
        assert_eq!(call.gasLimit, 100_000);
        assert!(!call.isCreation);
        assert!(call.data.is_empty());
    }

    #[test]
    fn test_data_carried() {
        let params = deposit(Some(Bytes::from_static(b"\xca\xfe"))).into_write_contract();
        let call = params
            .decode_call::<depositTransactionCall>()
            .expect("valid calldata");
        assert_eq!(call.data, Bytes::from_static(b"\xca\xfe"));
    }

    #[tokio::test]
    async fn test_forwards_to_writer() {
        let options = CallOptions::default().with_chain_id(1);
        let expected = deposit(None).with_options(options).into_write_contract();

        let mut client = MockContractWriter::new();
        client
            .expect_write_contract()
            .withf(move |params| *params == expected)
            .times(1)
            .returning(|_| Ok(TxHash::repeat_byte(0x33)));

        let res = write_deposit_eth(&client, deposit(None).with_options(options)).await;
        assert_eq!(res.expect("call submitted"), TxHash::repeat_byte(0x33));
    }
}
