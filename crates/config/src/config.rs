use alloy_primitives::{Address, ChainId};
use opstack_primitives::constants::{
    DEFAULT_DEPOSIT_GAS_LIMIT, DEFAULT_MIN_GAS_LIMIT, L2_STANDARD_BRIDGE,
};
use serde::{Deserialize, Serialize};

/// Default value for `rpc_url` in [`L1Config`].
const DEFAULT_L1_RPC_URL: &str = "http://localhost:8545";

/// Default value for `rpc_url` in [`L2Config`].
const DEFAULT_L2_RPC_URL: &str = "http://localhost:9545";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct L1Config {
    /// HTTP endpoint of the L1 node.
    #[serde(default = "default_l1_rpc_url")]
    pub rpc_url: String,

    /// Chain the L1 node is expected to be on. Calls are refused if the node
    /// reports something else.
    pub chain_id: Option<ChainId>,

    /// Block explorer domain, used to print transaction links.
    pub explorer: Option<String>,

    /// OptimismPortal of the L2, needed for ETH deposits.
    pub optimism_portal: Option<Address>,

    /// L1StandardBridge of the L2, needed for ERC-20 deposits.
    pub l1_standard_bridge: Option<Address>,
}

impl Default for L1Config {
    fn default() -> Self {
        Self {
            rpc_url: default_l1_rpc_url(),
            chain_id: None,
            explorer: None,
            optimism_portal: None,
            l1_standard_bridge: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct L2Config {
    /// HTTP endpoint of the L2 node.
    #[serde(default = "default_l2_rpc_url")]
    pub rpc_url: String,

    pub chain_id: Option<ChainId>,

    pub explorer: Option<String>,

    /// Only needs setting on chains that don't use the predeploy.
    #[serde(default = "default_l2_standard_bridge")]
    pub l2_standard_bridge: Address,
}

impl Default for L2Config {
    fn default() -> Self {
        Self {
            rpc_url: default_l2_rpc_url(),
            chain_id: None,
            explorer: None,
            l2_standard_bridge: default_l2_standard_bridge(),
        }
    }
}

/// Values used when a command doesn't specify them.
#[derive(Copy, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Minimum gas limit for messages relayed by the standard bridges.
    #[serde(default = "default_min_gas_limit")]
    pub min_gas_limit: u32,

    /// L2 gas limit for portal deposits.
    #[serde(default = "default_deposit_gas_limit")]
    pub deposit_gas_limit: u64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            min_gas_limit: DEFAULT_MIN_GAS_LIMIT,
            deposit_gas_limit: DEFAULT_DEPOSIT_GAS_LIMIT,
        }
    }
}

fn default_l1_rpc_url() -> String {
    DEFAULT_L1_RPC_URL.to_owned()
}

fn default_l2_rpc_url() -> String {
    DEFAULT_L2_RPC_URL.to_owned()
}

fn default_l2_standard_bridge() -> Address {
    L2_STANDARD_BRIDGE
}

fn default_min_gas_limit() -> u32 {
    DEFAULT_MIN_GAS_LIMIT
}

fn default_deposit_gas_limit() -> u64 {
    DEFAULT_DEPOSIT_GAS_LIMIT
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub l1: L1Config,

    #[serde(default)]
    pub l2: L2Config,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}
