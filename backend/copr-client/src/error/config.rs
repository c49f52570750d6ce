use std::path::PathBuf;

use common::ErrorLocation;
use thiserror::Error;

/// Failures while locating, reading or validating the `[copr-cli]` configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No file at the requested (or default) path.
    #[error("Config Not Found Error: {path} does not exist, create it with a [copr-cli] section {location}")]
    NotFound {
        location: ErrorLocation,
        path: PathBuf,
    },

    #[error("Config Read Error: {path}: {source} {location}")]
    ReadError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Not TOML, or no `[copr-cli]` table.
    #[error("Config Parse Error: {path}: {reason} {location}")]
    ParseError {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },

    /// The platform has no per-user configuration directory.
    #[error("Config Directory Not Found Error: {reason} {location}")]
    DirectoryNotFound {
        location: ErrorLocation,
        reason: String,
    },

    /// Well-formed TOML with unusable values (empty username, half a credential pair, bad URL).
    #[error("Config Validation Error: {reason} {location}")]
    ValidationError {
        location: ErrorLocation,
        reason: String,
    },
}
