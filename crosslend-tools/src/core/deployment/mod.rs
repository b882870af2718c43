// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment over JSON-RPC.

use alloy::{
    network::Ethereum,
    primitives::{Address, Bytes, TxHash, U256},
    providers::{DynProvider, PendingTransactionBuilder, PendingTransactionError},
};

use crate::{
    core::{
        launcher::{ContractFactory, DeployedContract, PendingDeployment},
        network::{ConfirmationConfig, NetworkConfig},
    },
    utils::{color::DebugColor, format_gas},
};
use request::DeploymentRequest;

pub mod request;

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("failed to get balance: {0}")]
    FailedToGetBalance(alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error(
        "not enough funds in account {from_address} to pay for deployment: \
         balance {balance} wei < {cost} wei"
    )]
    NotEnoughFunds {
        from_address: Address,
        balance: U256,
        cost: U256,
    },

    #[error("deploy tx {tx_hash} was not confirmed: {source}")]
    FailedToComplete {
        tx_hash: TxHash,
        source: PendingTransactionError,
    },
    #[error("deploy tx {tx_hash} reverted")]
    Reverted { tx_hash: TxHash },
    #[error("missing contract address in receipt of tx {tx_hash}")]
    NoContractAddress { tx_hash: TxHash },
}

/// Deploys a compiled contract from a funded account.
pub struct EvmContractFactory {
    contract_name: String,
    code: Bytes,
    sender: Address,
    provider: DynProvider,
    max_fee_per_gas_wei: Option<u128>,
    confirmation: ConfirmationConfig,
}

impl EvmContractFactory {
    pub fn new(
        contract_name: impl Into<String>,
        code: Bytes,
        sender: Address,
        provider: DynProvider,
        network: &NetworkConfig,
    ) -> Self {
        Self {
            contract_name: contract_name.into(),
            code,
            sender,
            provider,
            max_fee_per_gas_wei: network.max_fee_per_gas_wei,
            confirmation: network.confirmation.clone(),
        }
    }
}

impl ContractFactory for EvmContractFactory {
    type Pending = EvmPendingDeployment;

    async fn deploy(self) -> Result<EvmPendingDeployment, DeploymentError> {
        debug!(@grey, "sender address: {}", self.sender.debug_lavender());
        info!(@grey, "deploying {} ({} bytes of creation code)", self.contract_name, self.code.len());
        let pending = DeploymentRequest::new(self.sender, self.code, self.max_fee_per_gas_wei)
            .submit(&self.provider)
            .await?;
        Ok(EvmPendingDeployment {
            pending,
            confirmation: self.confirmation,
        })
    }
}

/// A deployment transaction the node has accepted.
pub struct EvmPendingDeployment {
    pending: PendingTransactionBuilder<Ethereum>,
    confirmation: ConfirmationConfig,
}

impl PendingDeployment for EvmPendingDeployment {
    fn tx_hash(&self) -> TxHash {
        *self.pending.tx_hash()
    }

    async fn confirm(self) -> Result<DeployedContract, DeploymentError> {
        let tx_hash = self.tx_hash();
        let Self {
            pending,
            confirmation,
        } = self;

        let receipt = pending
            .with_required_confirmations(confirmation.confirmations)
            .with_timeout(confirmation.timeout)
            .get_receipt()
            .await
            .map_err(|source| DeploymentError::FailedToComplete { tx_hash, source })?;
        if !receipt.status() {
            return Err(DeploymentError::Reverted { tx_hash });
        }
        let address = receipt
            .contract_address
            .ok_or(DeploymentError::NoContractAddress { tx_hash })?;

        info!(@grey, "deployed code at address: {}", address.debug_lavender());
        debug!(@grey, "gas used: {}", format_gas(receipt.gas_used));
        info!(@grey, "deployment tx hash: {}", tx_hash.debug_lavender());

        Ok(DeployedContract {
            address,
            tx_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
        })
    }
}
