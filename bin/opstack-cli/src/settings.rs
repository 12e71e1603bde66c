use std::{env, path::PathBuf};

use alloy::{primitives::Address, signers::local::PrivateKeySigner};
use directories::ProjectDirs;
use opstack_common::env::parse_env_or;
use opstack_config::Config;
use opstack_primitives::options::CallOptions;

use crate::errors::{internal_error, CliError, UserInputError};

/// Overrides the location of the config file.
pub const CONFIG_FILE_ENVVAR: &str = "OPSTACK_CONFIG";

/// Hex encoded private key used to sign every transaction.
pub const PRIVATE_KEY_ENVVAR: &str = "OPSTACK_PRIVATE_KEY";

/// Prefix of environment variables overriding config values, e.g.
/// `OPSTACK_L2__RPC_URL`.
const ENV_PREFIX: &str = "OPSTACK";

/// Loaded config plus where it came from.
#[derive(Debug)]
pub struct Settings {
    pub config: Config,
    pub config_file: PathBuf,
}

impl Settings {
    pub fn load() -> Result<Self, CliError> {
        let proj_dirs = ProjectDirs::from("io", "opstack", "opstack")
            .ok_or_else(|| internal_error(anyhow::anyhow!("no home directory available")))?;
        let default_file = proj_dirs.config_dir().join("config.toml");
        let config_file = parse_env_or(CONFIG_FILE_ENVVAR, default_file);

        let config = config::Config::builder()
            .add_source(config::File::from(config_file.clone()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<Config>()?;

        Ok(Self {
            config,
            config_file,
        })
    }

    /// Reads the signing key from the environment.
    pub fn signer(&self) -> Result<PrivateKeySigner, CliError> {
        let key = env::var(PRIVATE_KEY_ENVVAR).map_err(|_| UserInputError::MissingPrivateKey)?;
        key.trim()
            .parse::<PrivateKeySigner>()
            .map_err(|_| UserInputError::InvalidPrivateKey.into())
    }

    pub fn l1_call_options(&self, account: Address) -> CallOptions {
        CallOptions {
            account: Some(account),
            chain_id: self.config.l1.chain_id,
            ..Default::default()
        }
    }

    pub fn l2_call_options(&self, account: Address) -> CallOptions {
        CallOptions {
            account: Some(account),
            chain_id: self.config.l2.chain_id,
            ..Default::default()
        }
    }
}
