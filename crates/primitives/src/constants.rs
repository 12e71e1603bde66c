//! Well-known addresses of the OP Stack bridge contracts.

use alloy_primitives::{address, Address};

/// Sentinel token address standing in for the native asset (ETH) in the
/// standard bridge's ERC-20 entry points.
pub const OVM_ETH: Address = address!("DeadDeAddeAddEAddeadDEaDDEAdDeaDDeAD0000");

/// L2StandardBridge predeploy, identical on every OP Stack chain.
pub const L2_STANDARD_BRIDGE: Address = address!("4200000000000000000000000000000000000010");

/// Default minimum gas limit handed to the L1 side of a bridge message.
pub const DEFAULT_MIN_GAS_LIMIT: u32 = 200_000;

/// Default L2 gas limit for a deposit through the portal.
pub const DEFAULT_DEPOSIT_GAS_LIMIT: u64 = 100_000;

/// Returns whether the token address denotes the native asset.
pub fn is_native_token(token: &Address) -> bool {
    *token == OVM_ETH
}
