use opstack_actions::WriteContractError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    UserInput(#[from] UserInputError),

    #[error("Failed to load config: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Transaction failed: {0}")]
    Write(#[from] WriteContractError),

    #[error("Internal error: {0}")]
    Internal(#[source] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum UserInputError {
    #[error("no signing key. Set OPSTACK_PRIVATE_KEY to a hex encoded private key.")]
    MissingPrivateKey,

    #[error("OPSTACK_PRIVATE_KEY is not a valid private key")]
    InvalidPrivateKey,

    #[error("invalid RPC endpoint: '{0}'")]
    InvalidEndpoint(String),

    #[error("no OptimismPortal address. Set `l1.optimism_portal` in the config or pass --portal.")]
    MissingPortal,

    #[error(
        "no L1StandardBridge address. Set `l1.l1_standard_bridge` in the config or pass --bridge."
    )]
    MissingL1StandardBridge,
}

pub fn internal_error(e: impl Into<anyhow::Error>) -> CliError {
    CliError::Internal(e.into())
}
