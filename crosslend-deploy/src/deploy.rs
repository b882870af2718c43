// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io::{self, Write};

use crosslend_tools::{
    core::{
        config::{ConfigFile, LaunchConfig},
        launcher::{deployment_message, DeployedContract, CONTRACT_NAME},
    },
    ops,
};

use crate::{
    args::{AuthArgs, ProjectArgs, ProviderArgs},
    error::CliResult,
};

#[derive(Debug, clap::Args)]
pub struct DeployArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
    /// Wallet source to use.
    #[command(flatten)]
    pub auth: AuthArgs,
    #[command(flatten)]
    pub provider: ProviderArgs,
}

pub async fn exec(args: DeployArgs) -> CliResult {
    let file = ConfigFile::load(args.project.config.as_deref())?;
    let network = args.provider.network(&file)?;
    let artifacts = args
        .project
        .artifacts
        .clone()
        .unwrap_or_else(|| file.artifacts_dir());
    let config = LaunchConfig {
        network,
        signer: args.auth.config(),
    };

    let deployed = ops::deploy(CONTRACT_NAME, artifacts, config).await;
    report(deployed, &mut io::stdout().lock())
}

/// Writes the deployed address as the only line of output.
fn report(
    deployed: crosslend_tools::Result<DeployedContract>,
    out: &mut impl Write,
) -> CliResult {
    let deployed = deployed?;
    writeln!(out, "{}", deployment_message(CONTRACT_NAME, deployed.address))?;
    Ok(())
}
