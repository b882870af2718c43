// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{path::PathBuf, time::Duration};

use crosslend_tools::{
    core::{config::ConfigFile, network::NetworkConfig, signer::SignerConfig},
    utils::convert_gwei_to_wei,
};

use crate::constants::{NETWORK_ENV, PRIVATE_KEY_ENV};

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long, env = PRIVATE_KEY_ENV, hide_env_values = true)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<PathBuf>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
}

impl AuthArgs {
    pub fn config(&self) -> SignerConfig {
        if let Some(key) = &self.private_key {
            return SignerConfig::PrivateKey(key.clone());
        }
        if let Some(path) = &self.private_key_path {
            return SignerConfig::PrivateKeyFile(path.clone());
        }
        match &self.keystore_path {
            Some(path) => SignerConfig::Keystore {
                path: path.clone(),
                password_file: self.keystore_password_path.clone(),
            },
            None => SignerConfig::None,
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct ProjectArgs {
    /// Config file with named networks [default: crosslend.toml, if present]
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Directory of compiled contract artifacts [default: artifacts]
    #[arg(long)]
    pub artifacts: Option<PathBuf>,
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// Network from the config file to deploy to [default: localhost]
    #[arg(long, env = NETWORK_ENV)]
    pub network: Option<String>,
    /// RPC endpoint, overriding the network's url
    #[arg(short, long)]
    pub endpoint: Option<String>,
    /// Blocks the deployment must be buried under before it counts as deployed
    #[arg(long)]
    pub confirmations: Option<u64>,
    /// Give up waiting for confirmation after this long (e.g. "90s", "5m")
    #[arg(long, value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,
    /// Optional max fee per gas in gwei units.
    #[arg(long)]
    pub max_fee_per_gas_gwei: Option<String>,
}

impl ProviderArgs {
    /// Selects the network from the config file and applies command line overrides.
    pub fn network(&self, file: &ConfigFile) -> eyre::Result<NetworkConfig> {
        let mut network = file.network(self.network.as_deref())?;
        if let Some(endpoint) = &self.endpoint {
            network.endpoint = endpoint.clone();
        }
        if let Some(confirmations) = self.confirmations {
            network.confirmation.confirmations = confirmations;
        }
        if self.timeout.is_some() {
            network.confirmation.timeout = self.timeout;
        }
        if let Some(fee) = &self.max_fee_per_gas_gwei {
            network.max_fee_per_gas_wei = Some(convert_gwei_to_wei(fee)?);
        }
        Ok(network)
    }
}
