// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for deploying the CrossLendDAO contract.
//!
//! [`ops::deploy`] resolves the compiled contract, submits a single deployment transaction and
//! waits for it to be confirmed. The sequence itself lives in [`core::launcher`] and is generic
//! over the [`Toolchain`](core::launcher::Toolchain) that backs it.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod toolchain;
pub mod utils;

#[cfg(feature = "integration-tests")]
pub mod devnet;

pub use error::{Error, Result};
pub use toolchain::EvmToolchain;
