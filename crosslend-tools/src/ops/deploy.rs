// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.

use std::path::Path;

use crate::{
    core::{
        artifact::ArtifactStore,
        config::LaunchConfig,
        launcher::{launch, DeployedContract, Toolchain},
    },
    toolchain::EvmToolchain,
    Result,
};

/// Deploys a compiled contract to the configured network and waits for confirmation.
pub async fn deploy(
    contract_name: &str,
    artifacts: impl AsRef<Path>,
    config: LaunchConfig,
) -> Result<DeployedContract> {
    info!(@grey, "deploying {contract_name} to network {}", config.network);
    let toolchain = EvmToolchain::builder()
        .artifacts(ArtifactStore::new(artifacts.as_ref()))
        .config(config)
        .build();
    deploy_with(&toolchain, contract_name).await
}

/// Deploys a contract resolved by any [`Toolchain`].
pub async fn deploy_with<T: Toolchain>(
    toolchain: &T,
    contract_name: &str,
) -> Result<DeployedContract> {
    Ok(launch(toolchain, contract_name).await?)
}
