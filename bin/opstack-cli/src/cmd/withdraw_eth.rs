use alloy::primitives::{Address, Bytes, U256};
use argh::FromArgs;
use console::Term;
use opstack_actions::{write_withdraw_eth, WriteWithdrawEthParameters};
use opstack_primitives::params::WithdrawEthParameters;

use super::broadcast;
use crate::{
    errors::CliError,
    link::{OnchainObject, PrettyPrint},
    settings::Settings,
    wallet,
};

/// Withdraw ETH from L2 to an L1 address
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "withdraw-eth")]
pub struct WithdrawEthArgs {
    /// the L1 address to send funds to
    #[argh(positional)]
    to: Address,

    /// amount to withdraw, in wei
    #[argh(option)]
    amount: U256,

    /// minimum gas limit for the L1 message. defaults to the configured value
    #[argh(option)]
    min_gas_limit: Option<u32>,

    /// hex encoded data passed along with the withdrawal
    #[argh(option)]
    extra_data: Option<Bytes>,
}

pub async fn withdraw_eth(args: WithdrawEthArgs, settings: Settings) -> Result<(), CliError> {
    let signer = settings.signer()?;
    let options = settings.l2_call_options(signer.address());
    let l2w = wallet::connect(signer, &settings.config.l2.rpc_url)?;

    let params = WriteWithdrawEthParameters::new(WithdrawEthParameters {
        to: args.to,
        amount: args.amount,
        min_gas_limit: args
            .min_gas_limit
            .unwrap_or(settings.config.defaults.min_gas_limit),
        extra_data: args.extra_data,
    })
    .with_l2_standard_bridge(settings.config.l2.l2_standard_bridge)
    .with_options(options);

    let term = Term::stdout();
    let _ = term.write_line(&format!(
        "Withdrawing {} wei to {}",
        args.amount,
        OnchainObject::from(&args.to).pretty(settings.config.l1.explorer.as_deref())
    ));

    let tx_hash = broadcast(write_withdraw_eth(&l2w, params)).await?;
    let _ = term.write_line(
        &OnchainObject::from(&tx_hash).pretty(settings.config.l2.explorer.as_deref()),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;
    use argh::FromArgs;

    use super::*;
    use crate::cmd::{Commands, TopLevel};

    #[test]
    fn test_parse_args() {
        let top = TopLevel::from_args(
            &["opstack"],
            &[
                "withdraw-eth",
                "0x000000000000000000000000000000000000abcd",
                "--amount",
                "1000000000000000000",
            ],
        )
        .expect("valid args");

        assert_eq!(
            top.cmd,
            Commands::WithdrawEth(WithdrawEthArgs {
                to: address!("000000000000000000000000000000000000abcd"),
                amount: U256::from(1_000_000_000_000_000_000u128),
                min_gas_limit: None,
                extra_data: None,
            })
        );
    }

    #[test]
    fn test_parse_extra_data() {
        let top = TopLevel::from_args(
            &["opstack"],
            &[
                "withdraw-eth",
                "0x000000000000000000000000000000000000abcd",
                "--amount",
                "1",
                "--min-gas-limit",
                "21000",
                "--extra-data",
                "0xcafe",
            ],
        )
        .expect("valid args");

        let Commands::WithdrawEth(args) = top.cmd else {
            panic!("wrong subcommand");
        };
        assert_eq!(args.min_gas_limit, Some(21_000));
        assert_eq!(args.extra_data, Some(Bytes::from_static(b"\xca\xfe")));
    }

    #[test]
    fn test_rejects_bad_address() {
        let res = TopLevel::from_args(
            &["opstack"],
            &["withdraw-eth", "not-an-address", "--amount", "1"],
        );
        assert!(res.is_err());
    }
}
