//! ABI bindings for the OP Stack bridge contracts the actions talk to.
//!
//! Only the entry points we actually call are bound. Each call type is tagged
//! with the contract it belongs to through [`ContractFunction`], which is what
//! the writer logs and what the actions use to pick the ABI.

use alloy_sol_types::{sol, SolCall};

sol! {
    /// Predeployed at `0x4200000000000000000000000000000000000010` on every
    /// OP Stack chain.
    #[derive(Debug, PartialEq, Eq)]
    interface L2StandardBridge {
        /// Withdraws `amount` of `l2Token` to `to` on L1. For the native asset
        /// `msg.value` must equal `amount`.
        function withdrawTo(
            address l2Token,
            address to,
            uint256 amount,
            uint32 minGasLimit,
            bytes calldata extraData
        ) external payable;
    }

    #[derive(Debug, PartialEq, Eq)]
    interface L1StandardBridge {
        /// Deposits `amount` of `l1Token` to `to` on L2, minted as `l2Token`.
        function depositERC20To(
            address l1Token,
            address l2Token,
            address to,
            uint256 amount,
            uint32 minGasLimit,
            bytes calldata extraData
        ) external;
    }

    #[derive(Debug, PartialEq, Eq)]
    interface OptimismPortal {
        /// Entry point for every L1 to L2 transaction.
        function depositTransaction(
            address to,
            uint256 value,
            uint64 gasLimit,
            bool isCreation,
            bytes calldata data
        ) external payable;
    }
}

/// A bound contract function.
pub trait ContractFunction: SolCall {
    /// Name of the contract exposing the function.
    const CONTRACT: &'static str;

    /// Bare function name, without the argument list.
    fn function_name() -> &'static str {
        Self::SIGNATURE
            .split('(')
            .next()
            .unwrap_or(Self::SIGNATURE)
    }
}

impl ContractFunction for L2StandardBridge::withdrawToCall {
    const CONTRACT: &'static str = "L2StandardBridge";
}

impl ContractFunction for L1StandardBridge::depositERC20ToCall {
    const CONTRACT: &'static str = "L1StandardBridge";
}

impl ContractFunction for OptimismPortal::depositTransactionCall {
    const CONTRACT: &'static str = "OptimismPortal";
}
