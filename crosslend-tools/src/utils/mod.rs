// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use alloy::primitives::U256;
use color::Color;

pub mod color;

#[derive(Debug, thiserror::Error)]
pub enum FeeError {
    #[error("max fee per gas must be non-negative")]
    Negative,
    #[error("invalid max fee per gas value: {0}")]
    Invalid(String),
    #[error("result outside valid range for wei")]
    OutOfRange,
}

/// Converts a decimal gwei amount, as typed by an operator, to wei.
pub fn convert_gwei_to_wei(fee_str: &str) -> Result<u128, FeeError> {
    let gwei = match fee_str.trim().parse::<f64>() {
        Ok(fee) if !fee.is_finite() => return Err(FeeError::Invalid(fee_str.to_owned())),
        Ok(fee) if fee >= 0.0 => fee,
        Ok(_) => return Err(FeeError::Negative),
        Err(_) => return Err(FeeError::Invalid(fee_str.to_owned())),
    };

    let wei = gwei * 1e9;
    if !wei.is_finite() || wei >= u128::MAX as f64 {
        return Err(FeeError::OutOfRange);
    }
    Ok(wei as u128)
}

/// Pretty-prints an amount of wei as ETH.
pub fn format_eth(wei: U256) -> String {
    let Ok(gwei): Result<u64, _> = (wei / U256::from(1_000_000_000u64)).try_into() else {
        return "???".red();
    };
    format!("{:.6} ETH", gwei as f64 / 1e9)
}

/// Pretty-prints a gas amount.
pub fn format_gas(gas: u64) -> String {
    let text = format!("{gas} gas");
    if gas <= 3_000_000 {
        text.mint()
    } else if gas <= 7_000_000 {
        text.yellow()
    } else {
        text.pink()
    }
}
