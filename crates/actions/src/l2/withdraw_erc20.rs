use alloy::primitives::{Address, TxHash, U256};
use opstack_contracts::L2StandardBridge::withdrawToCall;
use opstack_primitives::{
    constants::{is_native_token, L2_STANDARD_BRIDGE},
    options::CallOptions,
    params::WithdrawErc20Parameters,
};
use tracing::*;

use crate::{
    errors::WriteContractError,
    writer::{ContractWriter, WriteContractParameters},
};

/// Arguments of [`write_withdraw_erc20`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteWithdrawErc20Parameters {
    pub args: WithdrawErc20Parameters,

    /// Value attached to the call. Has to equal `args.amount` when withdrawing
    /// the native asset or the bridge reverts.
    pub value: Option<U256>,

    /// L2StandardBridge the call goes to. The predeploy unless overridden.
    pub l2_standard_bridge: Address,

    pub options: CallOptions,
}

impl WriteWithdrawErc20Parameters {
    pub fn new(args: WithdrawErc20Parameters) -> Self {
        Self {
            args,
            value: None,
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

    /// Builds the `L2StandardBridge.withdrawTo` call.
    pub fn into_write_contract(self) -> WriteContractParameters {
        let WithdrawErc20Parameters {
            l2_token,
            to,
            amount,
            min_gas_limit,
            extra_data,
        } = self.args;

        let call = withdrawToCall {
            l2Token: l2_token,
            to,
            amount,
            minGasLimit: min_gas_limit,
            extraData: extra_data,
        };

        WriteContractParameters::new(self.l2_standard_bridge, &call, self.value, self.options)
    }
}

/// Withdraws an ERC-20 token to an L1 address through the L2StandardBridge.
///
/// Returns the hash of the submitted L2 transaction. Errors are the writer's,
/// untouched.
pub async fn write_withdraw_erc20<W>(
    client: &W,
    params: WriteWithdrawErc20Parameters,
) -> Result<TxHash, WriteContractError>
where
    W: ContractWriter + ?Sized,
{
    let args = &params.args;
    if is_native_token(&args.l2_token) && params.value != Some(args.amount) {
        // Enforced by the bridge, only logged here.
        warn!(
            amount = %args.amount,
            value = ?params.value,
            "native asset withdrawal value does not match amount, call will revert"
        );
    }

    debug!(
        l2_token = %args.l2_token,
        to = %args.to,
        amount = %args.amount,
        min_gas_limit = args.min_gas_limit,
        "withdrawing to L1"
    );

    client.write_contract(params.into_write_contract()).await
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use alloy::primitives::{address, Bytes};
    use opstack_primitives::constants::OVM_ETH;

    use super::*;
    use crate::writer::MockContractWriter;

    /// Collects formatted log output.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_warnings() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
        let buf = LogBuffer::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(Level::WARN)
            .finish();
        (buf, tracing::subscriber::set_default(subscriber))
    }

    fn accept_any() -> MockContractWriter {
        let mut client = MockContractWriter::new();
        client
            .expect_write_contract()
            .times(1)
            .returning(|_| Ok(TxHash::ZERO));
        client
    }

    const USDC_L2: Address = address!("7F5c764cBc14f9669B88837ca1490cCa17c31607");

    fn erc20_params() -> WriteWithdrawErc20Parameters {
        WriteWithdrawErc20Parameters::new(WithdrawErc20Parameters {
            l2_token: USDC_L2,
            to: address!("000000000000000000000000000000000000abcd"),
            amount: U256::from(1_000_000u64),
            min_gas_limit: 200_000,
            extra_data: Bytes::new(),
        })
    }

    #[test]
    fn test_into_write_contract() {
        let params = erc20_params().into_write_contract();

        assert_eq!(params.address, L2_STANDARD_BRIDGE);
        assert_eq!(params.function, "withdrawTo");
        assert!(params.value.is_none());

        let call = params.decode_call::<withdrawToCall>().expect("valid calldata");
        assert_eq!(call.l2Token, USDC_L2);
        assert_eq!(call.to, address!("000000000000000000000000000000000000abcd"));
        assert_eq!(call.amount, U256::from(1_000_000u64));
        assert_eq!(call.minGasLimit, 200_000);
        assert!(call.extraData.is_empty());
    }

    #[tokio::test]
    async fn test_forwards_to_writer() {
        let expected = erc20_params().into_write_contract();
        let tx_hash = TxHash::repeat_byte(0x22);

        let mut client = MockContractWriter::new();
        client
            .expect_write_contract()
            .withf(move |params| *params == expected)
            .times(1)
            .returning(move |_| Ok(tx_hash));

        let res = write_withdraw_erc20(&client, erc20_params()).await;
        assert_eq!(res.expect("call submitted"), tx_hash);
    }

    #[test]
    fn test_bridge_override() {
        let bridge = address!("00000000000000000000000000000000000b51d9");

        let params = erc20_params();
        assert_eq!(params.l2_standard_bridge, L2_STANDARD_BRIDGE);

        let call = params.with_l2_standard_bridge(bridge).into_write_contract();
        assert_eq!(call.address, bridge);
        assert_eq!(call.function, "withdrawTo");
    }

    #[tokio::test]
    async fn test_native_value_mismatch_warns_and_forwards() {
        let (logs, _guard) = capture_warnings();

        let mut params = erc20_params();
        params.args.l2_token = OVM_ETH;

        let mut client = MockContractWriter::new();
        client
            .expect_write_contract()
            .withf(|params| params.value.is_none())
            .times(1)
            .returning(|_| Ok(TxHash::ZERO));

        assert!(write_withdraw_erc20(&client, params).await.is_ok());

        let out = logs.contents();
        assert!(out.contains("WARN"), "got: {out}");
        assert!(out.contains("does not match amount"), "got: {out}");
    }

    #[tokio::test]
    async fn test_matching_native_value_does_not_warn() {
        let (logs, _guard) = capture_warnings();

        let mut params = erc20_params();
        params.args.l2_token = OVM_ETH;
        params.value = Some(params.args.amount);

        assert!(write_withdraw_erc20(&accept_any(), params).await.is_ok());
        assert!(logs.contents().is_empty(), "got: {}", logs.contents());
    }

    #[tokio::test]
    async fn test_erc20_without_value_does_not_warn() {
        let (logs, _guard) = capture_warnings();

        assert!(write_withdraw_erc20(&accept_any(), erc20_params())
            .await
            .is_ok());
        assert!(logs.contents().is_empty(), "got: {}", logs.contents());
    }
}
