//! Typed helpers that build and submit OP Stack bridge contract calls.
//!
//! Every action maps its scenario-specific arguments onto a contract call and
//! hands it to a [`ContractWriter`]. Actions hold no state, perform no I/O of
//! their own and return whatever the writer returns.

pub mod errors;
pub mod l1;
pub mod l2;
pub mod provider;
pub mod writer;

pub use errors::WriteContractError;
pub use l1::{
    deposit_erc20::{write_deposit_erc20, WriteDepositErc20Parameters},
    deposit_eth::{write_deposit_eth, WriteDepositEthParameters},
};
pub use l2::{
    withdraw_erc20::{write_withdraw_erc20, WriteWithdrawErc20Parameters},
    withdraw_eth::{write_withdraw_eth, WriteWithdrawEthParameters},
};
pub use provider::ProviderWriter;
pub use writer::{ContractWriter, WriteContractParameters};
