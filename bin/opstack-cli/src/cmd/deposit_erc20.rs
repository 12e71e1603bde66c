use alloy::primitives::{Address, Bytes, U256};
use argh::FromArgs;
use console::Term;
use opstack_actions::{write_deposit_erc20, WriteDepositErc20Parameters};
use opstack_primitives::params::DepositErc20Parameters;

use super::broadcast;
use crate::{
    errors::{CliError, UserInputError},
    link::{OnchainObject, PrettyPrint},
    settings::Settings,
    wallet,
};

/// Deposit an ERC-20 token from L1 to an L2 address. The bridge must already be approved to spend
/// the amount
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "deposit-erc20")]
pub struct DepositErc20Args {
    /// the L1 token contract
    #[argh(positional)]
    l1_token: Address,

    /// the L2 token contract
    #[argh(positional)]
    l2_token: Address,

    /// the L2 address to send funds to
    #[argh(positional)]
    to: Address,

    /// amount to deposit, in the token's smallest unit
    #[argh(option)]
    amount: U256,

    /// minimum gas limit for the L2 message. defaults to the configured value
    #[argh(option)]
    min_gas_limit: Option<u32>,

    /// hex encoded data passed along with the deposit
    #[argh(option)]
    extra_data: Option<Bytes>,

    /// the L1StandardBridge address. defaults to the configured one
    #[argh(option)]
    bridge: Option<Address>,
}

pub async fn deposit_erc20(args: DepositErc20Args, settings: Settings) -> Result<(), CliError> {
    let bridge = args
        .bridge
        .or(settings.config.l1.l1_standard_bridge)
        .ok_or(UserInputError::MissingL1StandardBridge)?;

    let signer = settings.signer()?;
    let options = settings.l1_call_options(signer.address());
    let l1w = wallet::connect(signer, &settings.config.l1.rpc_url)?;

    let params = WriteDepositErc20Parameters::new(
        DepositErc20Parameters {
            l1_token: args.l1_token,
            l2_token: args.l2_token,
            to: args.to,
            amount: args.amount,
            min_gas_limit: args
                .min_gas_limit
                .unwrap_or(settings.config.defaults.min_gas_limit),
            extra_data: args.extra_data,
        },
        bridge,
    )
    .with_options(options);

    let term = Term::stdout();
    let _ = term.write_line(&format!(
        "Depositing {} of token {} to {}",
        args.amount, args.l1_token, args.to
    ));

    let tx_hash = broadcast(write_deposit_erc20(&l1w, params)).await?;
    let _ = term.write_line(
        &OnchainObject::from(&tx_hash).pretty(settings.config.l1.explorer.as_deref()),
    );

    Ok(())
}
