//! Transaction options that ride along with a contract call.

use alloy_primitives::{Address, ChainId};
use serde::{Deserialize, Serialize};

/// Options forwarded untouched from an action to the underlying contract
/// write. None of these are interpreted by the actions themselves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallOptions {
    /// Sending account. Falls back to the client's default signer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Address>,

    /// Chain the call is expected to land on. The writer refuses to submit if
    /// the client is connected to a different chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<ChainId>,

    /// Gas limit override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<u128>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<u128>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
}

impl CallOptions {
    pub fn with_account(mut self, account: Address) -> Self {
        self.account = Some(account);
        self
    }

    pub fn with_chain_id(mut self, chain_id: ChainId) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    pub fn with_gas(mut self, gas: u64) -> Self {
        self.gas = Some(gas);
        self
    }

    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    #[test]
    fn test_options_load() {
        let opts_string = r#"
            account = "0x000000000000000000000000000000000000abcd"
            chain_id = 10
            gas = 250000
        "#;

        let opts = toml::from_str::<CallOptions>(opts_string).expect("valid options");
        assert_eq!(
            opts,
            CallOptions::default()
                .with_account(address!("000000000000000000000000000000000000abcd"))
                .with_chain_id(10)
                .with_gas(250_000)
        );
        assert!(opts.nonce.is_none());
    }
}
