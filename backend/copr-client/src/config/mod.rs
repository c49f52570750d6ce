//! Client configuration: where the service lives, who the user is and how to
//! authenticate.
//!
//! The file is TOML with a single `[copr-cli]` table:
//!
//! ```toml
//! [copr-cli]
//! username = "alice"
//! login = "ivbmkhdrlfgrpxwpquhz"
//! token = "jprwjcbzlnhydkbrhwsgaqxskmnerg"
//! copr_url = "https://copr.fedoraproject.org"
//! timeout_secs = 30
//! ```
//!
//! `login` and `token` are optional but must be given together. Without them
//! only unauthenticated commands can run.

use crate::DEFAULT_COPR_URL;
use crate::error::config::ConfigError;

use common::{ErrorLocation, RedactedToken};

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info};
use serde::Deserialize;
use url::Url;

const CONFIG_FILE_NAME: &str = "copr.toml";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================
// FILE LAYOUT
// ============================================

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(rename = "copr-cli")]
    copr_cli: Option<ConfigSection>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigSection {
    username: Option<String>,
    login: Option<String>,
    token: Option<RedactedToken>,
    copr_url: Option<String>,
    timeout_secs: Option<u64>,
}

// ============================================
// CONFIG VALUES
// ============================================

/// API login and token pair used for HTTP basic authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    login: String,
    token: RedactedToken,
}

impl Credentials {
    pub fn new(login: impl Into<String>, token: RedactedToken) -> Self {
        Self {
            login: login.into(),
            token,
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn token(&self) -> &RedactedToken {
        &self.token
    }
}

/// Validated configuration for one CLI invocation.
///
/// Loaded once at startup and handed to the session by value; nothing reads
/// configuration from global state.
#[derive(Debug, Clone)]
pub struct CoprConfiguration {
    base_url: Url,
    username: String,
    credentials: Option<Credentials>,
    timeout: Duration,
}

// ============================================
// IMPLEMENTATION
// ============================================

impl CoprConfiguration {
    /// Build a configuration directly, validating every field.
    #[track_caller]
    pub fn new(
        base_url: &str,
        username: impl Into<String>,
        credentials: Option<Credentials>,
    ) -> Result<Self, ConfigError> {
        let username = username.into();
        validate_username(&username)?;

        if let Some(credentials) = &credentials {
            validate_credentials(credentials)?;
        }

        Ok(Self {
            base_url: parse_base_url(base_url)?,
            username,
            credentials,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Default location of the configuration file: `{config_dir}/copr.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DirectoryNotFound`] when the platform has no
    /// notion of a per-user configuration directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::DirectoryNotFound {
            location: ErrorLocation::from(Location::caller()),
            reason: String::from("Unable to determine the user configuration directory"),
        })?;

        Ok(config_dir.join(CONFIG_FILE_NAME))
    }

    /// Load the configuration from `path`, or from [`Self::default_path`] when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        if !config_path.exists() {
            return Err(ConfigError::NotFound {
                location: ErrorLocation::from(Location::caller()),
                path: config_path,
            });
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            })?;

        let config = Self::from_toml_str(&contents, &config_path)?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Parse and validate configuration file contents.
    ///
    /// `path` is only used to label errors.
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(contents).map_err(|e| ConfigError::ParseError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let section = file.copr_cli.ok_or_else(|| ConfigError::ParseError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            reason: String::from("Missing [copr-cli] section"),
        })?;

        let username = section.username.ok_or_else(|| ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: String::from("username is required"),
        })?;

        let credentials = match (section.login, section.token) {
            (Some(login), Some(token)) => Some(Credentials::new(login, token)),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: String::from("login is set but token is missing"),
                });
            }
            (None, Some(_)) => {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: String::from("token is set but login is missing"),
                });
            }
        };

        let base_url = section.copr_url.as_deref().unwrap_or(DEFAULT_COPR_URL);
        let mut config = Self::new(base_url, username, credentials)?;

        if let Some(timeout_secs) = section.timeout_secs {
            config = config.with_timeout(timeout_secs)?;
        }

        debug!("Parsed configuration: {config:?}");
        Ok(config)
    }

    /// Replace the default username, e.g. from a command-line flag.
    #[track_caller]
    pub fn with_username(mut self, username: impl Into<String>) -> Result<Self, ConfigError> {
        let username = username.into();
        validate_username(&username)?;
        self.username = username;
        Ok(self)
    }

    /// Network timeout for each request, in seconds.
    #[track_caller]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Result<Self, ConfigError> {
        if timeout_secs == 0 {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("timeout_secs must be greater than zero"),
            });
        }
        self.timeout = Duration::from_secs(timeout_secs);
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Username used when a command does not name one explicitly.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

// ============================================
// VALIDATION
// ============================================

#[track_caller]
fn validate_username(username: &str) -> Result<(), ConfigError> {
    if username.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: String::from("username cannot be empty"),
        });
    }
    Ok(())
}

#[track_caller]
fn validate_credentials(credentials: &Credentials) -> Result<(), ConfigError> {
    if credentials.login.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: String::from("login cannot be empty"),
        });
    }
    if credentials.token.is_empty() {
        return Err(ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: String::from("token cannot be empty"),
        });
    }
    Ok(())
}

#[track_caller]
fn parse_base_url(base_url: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(base_url).map_err(|e| ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason: format!("Invalid copr_url {base_url:?}: {e}"),
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("Invalid copr_url {base_url:?}: expected an http or https URL"),
        });
    }

    Ok(url)
}
