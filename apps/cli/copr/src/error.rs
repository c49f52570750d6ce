use copr_client::{ConfigError, RpcError};
use models::ModelError;

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Everything that can end a `copr` invocation with a non-zero exit status.
#[derive(Debug, Error)]
pub enum CliError {
    /// Arguments are well-formed for clap but invalid for the operation.
    #[error("Usage Error: {message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// Writing the result to stdout failed (closed pipe, full disk).
    #[error("Output Error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl From<ModelError> for CliError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::Validation { message, location } => CliError::Usage { message, location },
        }
    }
}

impl From<std::io::Error> for CliError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        CliError::Output {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
