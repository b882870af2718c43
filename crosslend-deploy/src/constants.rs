// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Selects a network from the config file.
pub const NETWORK_ENV: &str = "CROSSLEND_NETWORK";

/// Hex-encoded private key of the deploying account.
pub const PRIVATE_KEY_ENV: &str = "DEPLOYER_PRIVATE_KEY";
