// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! CLI for `crosslend-deploy`.

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

mod args;
mod constants;
mod deploy;
mod error;
mod utils;

#[derive(Debug, Parser)]
#[command(name = "crosslend-deploy")]
#[command(about = "Deploy the CrossLendDAO contract and wait for it to be confirmed", long_about = None)]
#[command(version)]
struct Args {
    #[command(flatten)]
    deploy: deploy::DeployArgs,

    /// Whether to print debug info.
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .with_module_level("crosslend_tools", log_level)
        .with_module_level("crosslend_deploy", log_level)
        .init()
        .expect("setting up logger");

    // A single deployment has nothing to run in parallel
    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(Into::into)
        .and_then(|rt| rt.block_on(deploy::exec(args.deploy)));

    // Report any error and return proper exit code
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            utils::print_error(&err);
            err.exit_code()
        }
    }
}
