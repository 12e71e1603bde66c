use std::{future::Future, time::Duration};

use alloy::primitives::TxHash;
use argh::FromArgs;
use self::config::ConfigArgs;
use deposit_erc20::DepositErc20Args;
use deposit_eth::DepositEthArgs;
use indicatif::ProgressBar;
use opstack_actions::WriteContractError;
use withdraw_erc20::WithdrawErc20Args;
use withdraw_eth::WithdrawEthArgs;

use crate::errors::CliError;

pub mod config;
pub mod deposit_erc20;
pub mod deposit_eth;
pub mod withdraw_erc20;
pub mod withdraw_eth;

/// A CLI for moving ETH and ERC-20 tokens across an OP Stack bridge
#[derive(FromArgs, PartialEq, Debug)]
pub struct TopLevel {
    #[argh(subcommand)]
    pub cmd: Commands,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub enum Commands {
    WithdrawEth(WithdrawEthArgs),
    WithdrawErc20(WithdrawErc20Args),
    DepositEth(DepositEthArgs),
    DepositErc20(DepositErc20Args),
    Config(ConfigArgs),
}

/// Awaits a submission behind a spinner.
async fn broadcast(
    fut: impl Future<Output = Result<TxHash, WriteContractError>>,
) -> Result<TxHash, CliError> {
    let pb = ProgressBar::new_spinner().with_message("Broadcasting transaction");
    pb.enable_steady_tick(Duration::from_millis(100));
    match fut.await {
        Ok(tx_hash) => {
            pb.finish_with_message("Broadcast successful");
            Ok(tx_hash)
        }
        Err(e) => {
            pb.abandon_with_message("Broadcast failed");
            Err(e.into())
        }
    }
}
