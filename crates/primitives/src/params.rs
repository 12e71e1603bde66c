//! Argument sets for the bridge actions.
//!
//! These are plain request payloads. They are built by the caller, consumed by
//! exactly one action call and carry no invariants of their own beyond what the
//! type system enforces.

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// Withdraw the native asset from L2 to an L1 address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawEthParameters {
    /// Recipient on L1.
    pub to: Address,

    /// Amount in wei.
    pub amount: U256,

    /// Minimum gas limit for the relayed message on L1.
    pub min_gas_limit: u32,

    /// Opaque data forwarded with the withdrawal. Treated as empty when
    /// absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<Bytes>,
}

/// Withdraw an ERC-20 token (or the native asset, via [`OVM_ETH`]) from L2 to
/// an L1 address.
///
/// When `l2_token` is [`OVM_ETH`] the call has to carry a value equal to
/// `amount`, otherwise the bridge reverts.
///
/// [`OVM_ETH`]: crate::constants::OVM_ETH
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawErc20Parameters {
    pub l2_token: Address,
    pub to: Address,
    pub amount: U256,
    pub min_gas_limit: u32,
    #[serde(default)]
    pub extra_data: Bytes,
}

/// Deposit the native asset from L1 to L2 through the OptimismPortal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositEthParameters {
    /// Recipient on L2.
    pub to: Address,

    /// L2 gas limit of the deposit transaction.
    pub gas_limit: u64,

    /// Calldata for the L2 call. Treated as empty when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,

    /// Amount in wei.
    pub amount: U256,
}

/// Deposit an ERC-20 token from L1 to L2 through the L1StandardBridge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositErc20Parameters {
    pub l1_token: Address,
    pub l2_token: Address,
    pub to: Address,
    pub amount: U256,
    pub min_gas_limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<Bytes>,
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    #[test]
    fn test_withdraw_eth_params_load() {
        let params_string = r#"
            to = "0x000000000000000000000000000000000000abcd"
            amount = "0xde0b6b3a7640000"
            min_gas_limit = 21000
        "#;

        let params =
            toml::from_str::<WithdrawEthParameters>(params_string).expect("valid params");
        assert_eq!(params.to, address!("000000000000000000000000000000000000abcd"));
        assert_eq!(params.amount, U256::from(1_000_000_000_000_000_000u128));
        assert_eq!(params.min_gas_limit, 21_000);
        assert!(params.extra_data.is_none());
    }
}
