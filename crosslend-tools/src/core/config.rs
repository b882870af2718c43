// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The `crosslend.toml` configuration file.
//!
//! ```toml
//! artifacts = "artifacts"
//! default_network = "sepolia"
//!
//! [networks.sepolia]
//! url = "https://sepolia.example.org"
//! confirmations = 2
//! timeout = "5m"
//! max_fee_per_gas_gwei = "1.5"
//! ```

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;

use crate::{
    core::{
        network::{NetworkConfig, DEFAULT_NETWORK},
        signer::SignerConfig,
    },
    utils::{convert_gwei_to_wei, FeeError},
};

pub const FILENAME: &str = "crosslend.toml";

/// Default location of compiled artifacts, relative to the working directory.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("unknown network {name}, known networks: {}", .known.join(", "))]
    UnknownNetwork { name: String, known: Vec<String> },
    #[error("invalid max fee for network {network}: {source}")]
    Fee { network: String, source: FeeError },
}

/// Everything a launch needs, passed explicitly rather than read from the environment.
#[derive(Clone, Debug)]
pub struct LaunchConfig {
    pub network: NetworkConfig,
    pub signer: SignerConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub artifacts: Option<PathBuf>,
    pub default_network: Option<String>,
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkEntry {
    pub url: String,
    pub confirmations: Option<u64>,
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
    pub max_fee_per_gas_gwei: Option<String>,
}

impl ConfigFile {
    /// Loads the config file.
    ///
    /// An explicitly given path must exist. Without one, [`FILENAME`] is read from the working
    /// directory if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_owned(), true),
            None => (PathBuf::from(FILENAME), false),
        };
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if !required && err.kind() == io::ErrorKind::NotFound => {
                debug!(@grey, "no {FILENAME} found, using built-in defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        Self::parse(&text).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn artifacts_dir(&self) -> PathBuf {
        self.artifacts
            .clone()
            .unwrap_or_else(|| DEFAULT_ARTIFACTS_DIR.into())
    }

    /// Looks up a network by name, falling back to the file's default and then `localhost`.
    pub fn network(&self, name: Option<&str>) -> Result<NetworkConfig, ConfigError> {
        let name = name
            .or(self.default_network.as_deref())
            .unwrap_or(DEFAULT_NETWORK);

        let Some(entry) = self.networks.get(name) else {
            if name == DEFAULT_NETWORK {
                return Ok(NetworkConfig::localhost());
            }
            let mut known: Vec<_> = self.networks.keys().cloned().collect();
            if !self.networks.contains_key(DEFAULT_NETWORK) {
                known.push(DEFAULT_NETWORK.to_owned());
            }
            return Err(ConfigError::UnknownNetwork {
                name: name.to_owned(),
                known,
            });
        };

        let mut network = NetworkConfig::new(name, &entry.url);
        if let Some(confirmations) = entry.confirmations {
            network.confirmation.confirmations = confirmations;
        }
        network.confirmation.timeout = entry.timeout;
        network.max_fee_per_gas_wei = entry
            .max_fee_per_gas_gwei
            .as_deref()
            .map(convert_gwei_to_wei)
            .transpose()
            .map_err(|source| ConfigError::Fee {
                network: name.to_owned(),
                source,
            })?;
        Ok(network)
    }
}
