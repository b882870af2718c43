// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

use crosslend_tools::core::config::ConfigError;

pub type CliResult = Result<(), CliError>;

/// A failed run: the error to report and the code to exit with.
#[derive(Debug)]
pub struct CliError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl CliError {
    fn failure(error: impl Into<eyre::Error>) -> Self {
        Self {
            error: error.into(),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

/// Prints the error followed by each cause in its chain that the message does not already
/// spell out.
impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut message = self.error.to_string();
        for cause in self.error.chain().skip(1) {
            let cause = cause.to_string();
            if !message.contains(&cause) {
                message.push_str(": ");
                message.push_str(&cause);
            }
        }
        f.write_str(&message)
    }
}

impl From<eyre::Error> for CliError {
    fn from(err: eyre::Error) -> Self {
        Self::failure(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::failure(err)
    }
}

impl From<crosslend_tools::Error> for CliError {
    fn from(err: crosslend_tools::Error) -> Self {
        Self::failure(err)
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::failure(err)
    }
}
