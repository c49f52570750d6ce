//! Error types for RPC command execution.
//!
//! - HTTP status codes stored directly (not parsed from strings)
//! - All errors include ErrorLocation for debugging
//! - `#[track_caller]` for automatic location capture through `?`

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RpcError {
    /// The command needs credentials the session does not hold, or the
    /// service rejected the ones it was given.
    #[error("Authentication Error: {message} {location}")]
    Authentication {
        message: String,
        location: ErrorLocation,
    },

    /// The service could not be reached or the exchange broke off.
    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        is_timeout: bool,
        location: ErrorLocation,
    },

    /// The service answered with a non-success status.
    #[error("Service Error: HTTP {status} - {message} {location}")]
    Service {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    /// The service answered, but not with the document the command expects.
    #[error("Protocol Error: {message} {location}")]
    Protocol {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

impl RpcError {
    /// Status code of a service error, if this is one.
    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            RpcError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RpcError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        RpcError::Transport {
            is_timeout: error.is_timeout(),
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
