// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract creation transaction.

use alloy::{
    network::{Ethereum, TransactionBuilder},
    primitives::{Address, Bytes, U256},
    providers::{PendingTransactionBuilder, Provider},
    rpc::types::TransactionRequest,
};

use super::DeploymentError;
use crate::utils::{color::DebugColor, format_eth, format_gas};

/// Contract creation transaction request.
#[derive(Debug)]
pub struct DeploymentRequest {
    tx: TransactionRequest,
    max_fee_per_gas_wei: Option<u128>,
}

impl DeploymentRequest {
    pub fn new(sender: Address, code: Bytes, max_fee_per_gas_wei: Option<u128>) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_deploy_code(code),
            max_fee_per_gas_wei,
        }
    }

    pub async fn estimate_gas(&self, provider: &impl Provider) -> Result<u64, DeploymentError> {
        Ok(provider.estimate_gas(self.tx.clone()).await?)
    }

    /// Sends the transaction, returning as soon as the node has accepted it.
    pub async fn submit(
        self,
        provider: &impl Provider,
    ) -> Result<PendingTransactionBuilder<Ethereum>, DeploymentError> {
        let gas = self.estimate_gas(provider).await?;
        let fee_per_gas = self.fee_per_gas(provider).await?;
        debug!(@grey, "estimated deployment gas: {}", format_gas(gas));

        let from_address = self.tx.from.unwrap_or_default();
        let cost = U256::from(gas) * U256::from(fee_per_gas);
        let balance = provider
            .get_balance(from_address)
            .await
            .map_err(DeploymentError::FailedToGetBalance)?;
        if balance < cost {
            return Err(DeploymentError::NotEnoughFunds {
                from_address,
                balance,
                cost,
            });
        }
        debug!(@grey, "estimated deployment cost: {}", format_eth(cost));

        let mut tx = self.tx;
        tx.gas = Some(gas);
        if let Some(max_fee_per_gas) = self.max_fee_per_gas_wei {
            tx.max_fee_per_gas = Some(max_fee_per_gas);
            tx.max_priority_fee_per_gas = Some(0);
        }

        let pending = provider.send_transaction(tx).await?;
        debug!(@grey, "sent deploy tx: {}", pending.tx_hash().debug_lavender());
        Ok(pending)
    }

    async fn fee_per_gas(&self, provider: &impl Provider) -> Result<u128, DeploymentError> {
        match self.max_fee_per_gas_wei {
            Some(wei) => Ok(wei),
            None => Ok(provider.get_gas_price().await?),
        }
    }
}
