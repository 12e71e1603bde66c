use alloy::{
    network::{Ethereum, EthereumWallet},
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::{Client, Http},
};
use opstack_actions::ProviderWriter;

use crate::errors::{CliError, UserInputError};

/// Builds a signing writer against `http_endpoint`.
///
/// Gas, nonce and chain id are filled by the provider unless the call options
/// set them.
pub fn connect(
    signer: PrivateKeySigner,
    http_endpoint: &str,
) -> Result<ProviderWriter<impl Provider<Http<Client>, Ethereum>, Http<Client>>, CliError> {
    let url = http_endpoint
        .parse()
        .map_err(|_| UserInputError::InvalidEndpoint(http_endpoint.to_owned()))?;

    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(EthereumWallet::from(signer))
        .on_http(url);

    Ok(ProviderWriter::new(provider))
}
