// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Account that signs the deployment transaction.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};

#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    #[error("no signer configured, pass a private key, private key file or keystore")]
    NoSigner,
    #[error("empty private key")]
    EmptyKey,
    #[error("invalid private key: {0}")]
    InvalidKey(String),
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not decrypt keystore {}: {reason}", .path.display())]
    Keystore { path: PathBuf, reason: String },
}

/// Where the deployer's key comes from.
#[derive(Clone, Default)]
pub enum SignerConfig {
    #[default]
    None,
    PrivateKey(String),
    PrivateKeyFile(PathBuf),
    Keystore {
        path: PathBuf,
        password_file: Option<PathBuf>,
    },
}

impl fmt::Debug for SignerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::PrivateKey(_) => f.write_str("PrivateKey(<redacted>)"),
            Self::PrivateKeyFile(path) => f.debug_tuple("PrivateKeyFile").field(path).finish(),
            Self::Keystore {
                path,
                password_file,
            } => f
                .debug_struct("Keystore")
                .field("path", path)
                .field("password_file", password_file)
                .finish(),
        }
    }
}

impl SignerConfig {
    /// Builds a wallet for the given chain, returning it with the sender address.
    pub fn build(&self, chain_id: u64) -> Result<(EthereumWallet, Address), SignerError> {
        let signer = self.signer()?.with_chain_id(Some(chain_id));
        let address = signer.address();
        Ok((EthereumWallet::new(signer), address))
    }

    fn signer(&self) -> Result<PrivateKeySigner, SignerError> {
        match self {
            Self::None => Err(SignerError::NoSigner),
            Self::PrivateKey(key) => parse_private_key(key),
            Self::PrivateKeyFile(path) => parse_private_key(&read(path)?),
            Self::Keystore {
                path,
                password_file,
            } => {
                let password = match password_file {
                    Some(file) => read(file)?.trim_end_matches(['\r', '\n']).to_owned(),
                    None => String::new(),
                };
                LocalSigner::decrypt_keystore(path, password).map_err(|err| {
                    SignerError::Keystore {
                        path: path.clone(),
                        reason: err.to_string(),
                    }
                })
            }
        }
    }
}

fn read(path: &Path) -> Result<String, SignerError> {
    fs::read_to_string(path).map_err(|source| SignerError::Read {
        path: path.to_owned(),
        source,
    })
}

fn parse_private_key(key: &str) -> Result<PrivateKeySigner, SignerError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(SignerError::EmptyKey);
    }
    key.parse::<PrivateKeySigner>()
        .map_err(|err| SignerError::InvalidKey(err.to_string()))
}
