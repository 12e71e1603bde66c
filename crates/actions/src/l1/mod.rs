//! Actions submitted on L1.

pub mod deposit_erc20;
pub mod deposit_eth;
