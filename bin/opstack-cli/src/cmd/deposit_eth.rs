use alloy::primitives::{Address, Bytes, U256};
use argh::FromArgs;
use console::Term;
use opstack_actions::{write_deposit_eth, WriteDepositEthParameters};
use opstack_primitives::params::DepositEthParameters;

use super::broadcast;
use crate::{
    errors::{CliError, UserInputError},
    link::{OnchainObject, PrettyPrint},
    settings::Settings,
    wallet,
};

/// Deposit ETH from L1 to an L2 address
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "deposit-eth")]
pub struct DepositEthArgs {
    /// the L2 address to send funds to
    #[argh(positional)]
    to: Address,

    /// amount to deposit, in wei
    #[argh(option)]
    amount: U256,

    /// L2 gas limit of the deposit. defaults to the configured value
    #[argh(option)]
    gas_limit: Option<u64>,

    /// hex encoded calldata for the L2 call
    #[argh(option)]
    data: Option<Bytes>,

    /// the OptimismPortal address. defaults to the configured one
    #[argh(option)]
    portal: Option<Address>,
}

pub async fn deposit_eth(args: DepositEthArgs, settings: Settings) -> Result<(), CliError> {
    let portal = args
        .portal
        .or(settings.config.l1.optimism_portal)
        .ok_or(UserInputError::MissingPortal)?;

    let signer = settings.signer()?;
    let options = settings.l1_call_options(signer.address());
    let l1w = wallet::connect(signer, &settings.config.l1.rpc_url)?;

    let params = WriteDepositEthParameters::new(
        DepositEthParameters {
            to: args.to,
            gas_limit: args
                .gas_limit
                .unwrap_or(settings.config.defaults.deposit_gas_limit),
            data: args.data,
            amount: args.amount,
        },
        portal,
    )
    .with_options(options);

    let term = Term::stdout();
    let _ = term.write_line(&format!(
        "Depositing {} wei to {}",
        args.amount,
        OnchainObject::from(&args.to).pretty(settings.config.l2.explorer.as_deref())
    ));

    let tx_hash = broadcast(write_deposit_eth(&l1w, params)).await?;
    let _ = term.write_line(
        &OnchainObject::from(&tx_hash).pretty(settings.config.l1.explorer.as_deref()),
    );

    Ok(())
}
