// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The deploy-and-confirm sequence.
//!
//! A launch resolves a [`ContractFactory`] by name from a [`Toolchain`], submits exactly one
//! deployment through it and waits for the resulting [`PendingDeployment`] to be confirmed.
//! Nothing is retried: a failure in any phase ends the launch.

use std::fmt;

use alloy::primitives::{Address, TxHash};

use crate::{
    core::{
        artifact::ArtifactError, deployment::DeploymentError, network::NetworkError,
        signer::SignerError,
    },
    utils::color::DebugColor,
};

/// Name of the contract this launcher exists to deploy.
pub const CONTRACT_NAME: &str = "CrossLendDAO";

/// Resolves contract factories by name.
#[allow(async_fn_in_trait)]
pub trait Toolchain {
    type Factory: ContractFactory;

    async fn get_factory(&self, name: &str) -> Result<Self::Factory, ResolveError>;
}

/// Builds and submits the deployment transaction for one compiled contract.
#[allow(async_fn_in_trait)]
pub trait ContractFactory {
    type Pending: PendingDeployment;

    /// Submits the deployment without constructor arguments.
    ///
    /// Returns once the network has accepted the transaction, before it is included.
    async fn deploy(self) -> Result<Self::Pending, DeploymentError>;
}

/// A submitted deployment that has not been confirmed yet.
#[allow(async_fn_in_trait)]
pub trait PendingDeployment {
    fn tx_hash(&self) -> TxHash;

    /// Waits until the deployment is confirmed on chain.
    async fn confirm(self) -> Result<DeployedContract, DeploymentError>;
}

/// A confirmed deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployedContract {
    pub address: Address,
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("{0}")]
    Network(#[from] NetworkError),
    #[error("{0}")]
    Signer(#[from] SignerError),
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
}

/// Progress of a launch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Resolving,
    Submitting,
    Confirming,
    Succeeded,
    Failed,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotStarted => "not started",
            Self::Resolving => "resolving",
            Self::Submitting => "submitting",
            Self::Confirming => "confirming",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("failed to resolve contract factory for {name}: {source}")]
    Resolution { name: String, source: ResolveError },
    #[error("failed to submit deployment of {name}: {source}")]
    Submission {
        name: String,
        source: DeploymentError,
    },
    #[error("failed to confirm deployment of {name} (tx {tx_hash}): {source}")]
    Confirmation {
        name: String,
        tx_hash: TxHash,
        source: DeploymentError,
    },
}

impl LaunchError {
    /// Phase the launch was in when it failed.
    pub fn phase(&self) -> Phase {
        match self {
            Self::Resolution { .. } => Phase::Resolving,
            Self::Submission { .. } => Phase::Submitting,
            Self::Confirmation { .. } => Phase::Confirming,
        }
    }
}

/// Tracks and logs phase transitions of a single launch.
struct Progress<'a> {
    name: &'a str,
    phase: Phase,
}

impl<'a> Progress<'a> {
    fn new(name: &'a str) -> Self {
        Self {
            name,
            phase: Phase::NotStarted,
        }
    }

    fn enter(&mut self, next: Phase) {
        debug_assert!(!self.phase.is_terminal(), "launch already finished");
        debug!(@grey, "{}: {} -> {}", self.name, self.phase, next);
        self.phase = next;
    }

    fn fail(&mut self, err: LaunchError) -> LaunchError {
        debug_assert_eq!(err.phase(), self.phase);
        self.enter(Phase::Failed);
        err
    }
}

/// Deploys the named contract once and waits for confirmation.
pub async fn launch<T: Toolchain>(
    toolchain: &T,
    name: &str,
) -> Result<DeployedContract, LaunchError> {
    let mut progress = Progress::new(name);

    progress.enter(Phase::Resolving);
    let factory = match toolchain.get_factory(name).await {
        Ok(factory) => factory,
        Err(source) => {
            return Err(progress.fail(LaunchError::Resolution {
                name: name.to_owned(),
                source,
            }))
        }
    };

    progress.enter(Phase::Submitting);
    let pending = match factory.deploy().await {
        Ok(pending) => pending,
        Err(source) => {
            return Err(progress.fail(LaunchError::Submission {
                name: name.to_owned(),
                source,
            }))
        }
    };

    progress.enter(Phase::Confirming);
    let tx_hash = pending.tx_hash();
    info!(@grey, "waiting for deployment tx {} to be confirmed", tx_hash.debug_lavender());
    match pending.confirm().await {
        Ok(deployed) => {
            progress.enter(Phase::Succeeded);
            Ok(deployed)
        }
        Err(source) => Err(progress.fail(LaunchError::Confirmation {
            name: name.to_owned(),
            tx_hash,
            source,
        })),
    }
}

/// The line reported to the operator once a deployment is confirmed.
pub fn deployment_message(name: &str, address: Address) -> String {
    format!("{name} contract deployed to: {address}")
}
