pub mod cmd;
pub mod errors;
pub mod link;
pub mod settings;
pub mod wallet;

use cmd::{
    config::config, deposit_erc20::deposit_erc20, deposit_eth::deposit_eth,
    withdraw_erc20::withdraw_erc20, withdraw_eth::withdraw_eth, Commands, TopLevel,
};
use errors::CliError;
use opstack_common::logging::{self, LoggerConfig};
use settings::Settings;
use tracing::*;

#[tokio::main]
async fn main() {
    let TopLevel { cmd } = argh::from_env();

    logging::init(LoggerConfig::from_env("opstack-cli"));

    let res = run(cmd).await;
    logging::finalize();

    if let Err(e) = res {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(cmd: Commands) -> Result<(), CliError> {
    let settings = Settings::load()?;
    debug!(config_file = %settings.config_file.display(), "settings loaded");

    match cmd {
        Commands::WithdrawEth(args) => withdraw_eth(args, settings).await,
        Commands::WithdrawErc20(args) => withdraw_erc20(args, settings).await,
        Commands::DepositEth(args) => deposit_eth(args, settings).await,
        Commands::DepositErc20(args) => deposit_erc20(args, settings).await,
        Commands::Config(args) => {
            config(args, settings).await;
            Ok(())
        }
    }
}
