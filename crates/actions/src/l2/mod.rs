//! Actions submitted on L2.

pub mod withdraw_erc20;
pub mod withdraw_eth;
