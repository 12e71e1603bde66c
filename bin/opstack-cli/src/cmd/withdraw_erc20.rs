use alloy::primitives::{Address, Bytes, U256};
use argh::FromArgs;
use console::Term;
use opstack_actions::{write_withdraw_erc20, WriteWithdrawErc20Parameters};
use opstack_primitives::params::WithdrawErc20Parameters;

use super::broadcast;
use crate::{
    errors::CliError,
    link::{OnchainObject, PrettyPrint},
    settings::Settings,
    wallet,
};

/// Withdraw an ERC-20 token from L2 to an L1 address
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "withdraw-erc20")]
pub struct WithdrawErc20Args {
    /// the L2 token contract
    #[argh(positional)]
    token: Address,

    /// the L1 address to send funds to
    #[argh(positional)]
    to: Address,

    /// amount to withdraw, in the token's smallest unit
    #[argh(option)]
    amount: U256,

    /// minimum gas limit for the L1 message. defaults to the configured value
    #[argh(option)]
    min_gas_limit: Option<u32>,

    /// hex encoded data passed along with the withdrawal
    #[argh(option)]
    extra_data: Option<Bytes>,
}

pub async fn withdraw_erc20(args: WithdrawErc20Args, settings: Settings) -> Result<(), CliError> {
    let signer = settings.signer()?;
    let options = settings.l2_call_options(signer.address());
    let l2w = wallet::connect(signer, &settings.config.l2.rpc_url)?;

    let params = WriteWithdrawErc20Parameters::new(WithdrawErc20Parameters {
        l2_token: args.token,
        to: args.to,
        amount: args.amount,
        min_gas_limit: args
            .min_gas_limit
            .unwrap_or(settings.config.defaults.min_gas_limit),
        extra_data: args.extra_data.unwrap_or_default(),
    })
    .with_l2_standard_bridge(settings.config.l2.l2_standard_bridge)
    .with_options(options);

    let term = Term::stdout();
    let _ = term.write_line(&format!(
        "Withdrawing {} of token {} to {}",
        args.amount, args.token, args.to
    ));

    let tx_hash = broadcast(write_withdraw_erc20(&l2w, params)).await?;
    let _ = term.write_line(
        &OnchainObject::from(&tx_hash).pretty(settings.config.l2.explorer.as_deref()),
    );

    Ok(())
}
