// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    network::EthereumWallet,
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use eyre::{Result, WrapErr};
use reqwest::{header::HeaderValue, Method, Response};
use testcontainers::{
    core::{wait::HttpWaitStrategy, IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};

/// First prefunded account of the development mnemonic.
pub const DEVNET_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

const ANVIL_IMAGE_NAME: &str = "ghcr.io/foundry-rs/foundry";
const ANVIL_IMAGE_TAG: &str = "stable";
const ANVIL_PORT: u16 = 8545;

/// Manage a disposable development node to deploy contracts to.
pub struct Node {
    _container: ContainerAsync<GenericImage>,
    rpc: String,
}

impl Node {
    /// Starts a new Anvil node in the background, mining a block per transaction.
    /// This node will be shutdown when this struct is dropped.
    pub async fn new() -> Result<Self> {
        let wait_strategy = HttpWaitStrategy::new("/")
            .with_port(ANVIL_PORT.into())
            .with_method(Method::POST)
            .with_header("Content-Type", HeaderValue::from_static("application/json"))
            .with_body(r#"{"jsonrpc":"2.0","method":"net_version","params":[],"id":1}"#)
            .with_response_matcher_async(rpc_response_matcher);
        let container = GenericImage::new(ANVIL_IMAGE_NAME, ANVIL_IMAGE_TAG)
            .with_exposed_port(ANVIL_PORT.tcp())
            .with_wait_for(WaitFor::Http(wait_strategy))
            .with_entrypoint("anvil")
            .with_cmd(vec!["--host", "0.0.0.0"])
            .start()
            .await
            .wrap_err("failed to start Anvil container")?;
        let port = container
            .get_host_port_ipv4(ANVIL_PORT)
            .await
            .wrap_err("failed to get Anvil RPC port")?;
        Ok(Node {
            _container: container,
            rpc: format!("http://localhost:{port}"),
        })
    }

    /// Get the node RPC.
    pub fn rpc(&self) -> &str {
        &self.rpc
    }

    /// Create a provider with the prefunded development key.
    pub async fn create_provider(&self) -> Result<impl Provider> {
        let signer: PrivateKeySigner = DEVNET_PRIVATE_KEY
            .parse()
            .wrap_err("failed to parse devnet private key")?;
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect(self.rpc())
            .await?;
        Ok(provider)
    }
}

async fn rpc_response_matcher(response: Response) -> bool {
    let Ok(text) = response.text().await else {
        return false;
    };
    text.contains("result")
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;
    use crate::core::{
        artifact::tests::{write_artifact, RETURN_42_CODE},
        config::LaunchConfig,
        launcher::CONTRACT_NAME,
        network::NetworkConfig,
        signer::SignerConfig,
    };

    fn launch_config(node: &Node) -> LaunchConfig {
        LaunchConfig {
            network: NetworkConfig::new("devnet", node.rpc()),
            signer: SignerConfig::PrivateKey(DEVNET_PRIVATE_KEY.to_owned()),
        }
    }

    #[tokio::test]
    async fn node_has_funded_account() -> Result<()> {
        let devnode = Node::new().await?;
        let provider = devnode.create_provider().await?;
        let balance = provider
            .get_balance(address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"))
            .await?;
        assert!(!balance.is_zero());
        Ok(())
    }

    #[tokio::test]
    async fn deploys_fresh_instance_every_time() -> Result<()> {
        let devnode = Node::new().await?;
        let artifacts = tempfile::tempdir()?;
        write_artifact(
            artifacts.path(),
            "contracts/CrossLendDAO.sol",
            CONTRACT_NAME,
            RETURN_42_CODE,
        );

        let first = crate::ops::deploy(CONTRACT_NAME, artifacts.path(), launch_config(&devnode))
            .await?;
        let second =
            crate::ops::deploy(CONTRACT_NAME, artifacts.path(), launch_config(&devnode)).await?;
        assert_ne!(first.address, second.address);
        assert_ne!(first.tx_hash, second.tx_hash);

        let provider = devnode.create_provider().await?;
        let code = provider.get_code_at(first.address).await?;
        assert_eq!(code.to_vec(), hex::decode("602a60005260206000f3")?);
        Ok(())
    }
}
