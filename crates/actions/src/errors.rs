use alloy::transports::TransportError;
use thiserror::Error;

/// Failures of a contract write. Actions never produce these themselves, they
/// only pass them along from the writer.
#[derive(Debug, Error)]
pub enum WriteContractError {
    /// The RPC call failed, or the node rejected the transaction (revert,
    /// insufficient funds, nonce too low...).
    #[error("transport: {0}")]
    Transport(#[from] TransportError),

    /// The client is connected to a different chain than the call asked for.
    #[error("chain mismatch: client is on chain {current}, call expects chain {expected}")]
    ChainMismatch { current: u64, expected: u64 },
}
