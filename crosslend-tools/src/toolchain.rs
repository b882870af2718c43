// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::providers::{Provider, ProviderBuilder};
use typed_builder::TypedBuilder;

use crate::core::{
    artifact::ArtifactStore,
    config::LaunchConfig,
    deployment::EvmContractFactory,
    launcher::{ResolveError, Toolchain},
};

/// Resolves contracts from compiled artifacts and deploys them over JSON-RPC.
///
/// The artifact is resolved before anything is sent to the network, so a contract that was
/// never compiled fails without touching the node.
#[derive(TypedBuilder)]
pub struct EvmToolchain {
    #[builder(setter(into))]
    artifacts: ArtifactStore,
    config: LaunchConfig,
}

impl Toolchain for EvmToolchain {
    type Factory = EvmContractFactory;

    async fn get_factory(&self, name: &str) -> Result<EvmContractFactory, ResolveError> {
        let artifact = self.artifacts.find(name)?;
        artifact.check_constructor_args(0)?;
        let code = artifact.creation_code()?;

        let network = &self.config.network;
        network.check()?;
        debug!(@grey, "connecting to {} at {}", network.name, network.endpoint);
        let provider = ProviderBuilder::new().connect(&network.endpoint).await?;
        let chain_id = provider.get_chain_id().await?;
        let (wallet, sender) = self.config.signer.build(chain_id)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&network.endpoint)
            .await?
            .erased();

        Ok(EvmContractFactory::new(
            artifact.contract_name,
            code,
            sender,
            provider,
            network,
        ))
    }
}
