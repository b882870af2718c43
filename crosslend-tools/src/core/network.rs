// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fmt, time::Duration};

use reqwest::Url;

/// Name of the network used when none is selected.
pub const DEFAULT_NETWORK: &str = "localhost";

/// RPC endpoint of a local development node.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8545";

/// Blocks a deployment must be buried under before it counts as deployed.
pub const DEFAULT_CONFIRMATIONS: u64 = 1;

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("invalid RPC endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("confirmations must be at least 1")]
    ZeroConfirmations,
}

/// When a submitted deployment is considered confirmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmationConfig {
    pub confirmations: u64,
    /// Give up waiting after this long. Waits indefinitely when unset.
    pub timeout: Option<Duration>,
}

impl Default for ConfirmationConfig {
    fn default() -> Self {
        Self {
            confirmations: DEFAULT_CONFIRMATIONS,
            timeout: None,
        }
    }
}

/// The network a deployment is submitted to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkConfig {
    pub name: String,
    pub endpoint: String,
    pub confirmation: ConfirmationConfig,
    pub max_fee_per_gas_wei: Option<u128>,
}

impl NetworkConfig {
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            confirmation: ConfirmationConfig::default(),
            max_fee_per_gas_wei: None,
        }
    }

    pub fn localhost() -> Self {
        Self::new(DEFAULT_NETWORK, DEFAULT_ENDPOINT)
    }

    pub fn check(&self) -> Result<(), NetworkError> {
        check_endpoint(&self.endpoint)?;
        if self.confirmation.confirmations == 0 {
            return Err(NetworkError::ZeroConfirmations);
        }
        Ok(())
    }
}

impl fmt::Display for NetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.endpoint)
    }
}

pub fn check_endpoint(endpoint: &str) -> Result<(), NetworkError> {
    let invalid = |reason: String| NetworkError::InvalidEndpoint {
        endpoint: endpoint.to_owned(),
        reason,
    };
    let url = Url::parse(endpoint).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(format!("unsupported scheme {scheme}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_endpoints() {
        check_endpoint(DEFAULT_ENDPOINT).unwrap();
        check_endpoint("https://sepolia.example.org/v3/key").unwrap();
    }

    #[test]
    fn rejects_bad_endpoints() {
        assert!(matches!(
            check_endpoint("localhost:8545 "),
            Err(NetworkError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            check_endpoint("ws://127.0.0.1:8546"),
            Err(NetworkError::InvalidEndpoint { .. })
        ));
        assert!(check_endpoint("not a url").is_err());
    }

    #[test]
    fn endpoint_error_is_plain_text() {
        let err = check_endpoint("ws://127.0.0.1:8546").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid RPC endpoint ws://127.0.0.1:8546: unsupported scheme ws"
        );
    }

    #[test]
    fn displays_name_and_endpoint() {
        let mut network = NetworkConfig::localhost();
        network.endpoint = "http://127.0.0.1:9545".to_owned();
        assert_eq!(network.to_string(), "localhost (http://127.0.0.1:9545)");
    }

    #[test]
    fn requires_a_confirmation() {
        let mut network = NetworkConfig::localhost();
        network.check().unwrap();
        network.confirmation.confirmations = 0;
        assert!(matches!(
            network.check(),
            Err(NetworkError::ZeroConfirmations)
        ));
    }
}
