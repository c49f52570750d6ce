//! One remote operation per type.
//!
//! Each operation implements [`RpcCommand`]: it says whether it needs
//! credentials, where it lives, what arguments it sends and how to read the
//! answer. [`execute`] drives every command through the same sequence:
//!
//! 1. authentication check (fails before any network activity)
//! 2. URL and payload construction
//! 3. a single exchange through the [`Transport`]
//! 4. status and body classification, then `parse_response`
//!
//! Nothing is retried.

mod build;
mod build_details;
mod cancel_build;
mod list;
mod project_details;
mod search;

pub use build::BuildCommand;
pub use build_details::BuildDetailsCommand;
pub use cancel_build::CancelBuildCommand;
pub use list::ListCommand;
pub use project_details::{ProjectChrootCommand, ProjectDetailsCommand};
pub use search::SearchCommand;

use crate::config::CoprConfiguration;
use crate::error::RpcError;
use crate::transport::{HttpMethod, Transport, TransportRequest, TransportResponse};
use crate::{API_ROOT_SEGMENT, COPRS_SEGMENT};

use common::ErrorLocation;

use std::collections::BTreeMap;
use std::fmt;
use std::panic::Location;

use log::{debug, trace, warn};
use serde_json::Value;
use url::Url;

/// Served instead of JSON when the API token is not accepted.
const SIGN_IN_PAGE_MARKER: &str = "<title>Sign in Copr</title>";

/// Upper bound on how much of a non-JSON error body ends up in a message.
const MAX_ERROR_BODY_CHARS: usize = 512;

// ============================================
// COMMAND PATH
// ============================================

/// Path of an API endpoint, kept as separate segments.
///
/// Segments are percent-escaped when resolved against the base URL, so a
/// username or project name can never add path components of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPath {
    segments: Vec<String>,
}

impl CommandPath {
    /// `/api/coprs/`
    pub fn coprs() -> Self {
        Self {
            segments: vec![API_ROOT_SEGMENT.to_string(), COPRS_SEGMENT.to_string()],
        }
    }

    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Append this path (with its trailing slash) to `base`.
    #[track_caller]
    pub fn resolve(&self, base: &Url) -> Result<Url, RpcError> {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);

        {
            let mut path = url.path_segments_mut().map_err(|()| RpcError::UrlParse {
                message: format!("{base} cannot be used as a base URL"),
                location: ErrorLocation::from(Location::caller()),
            })?;
            path.pop_if_empty().extend(&self.segments).push("");
        }

        Ok(url)
    }
}

impl fmt::Display for CommandPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        write!(f, "/")
    }
}

// ============================================
// COMMAND TRAIT
// ============================================

pub trait RpcCommand {
    type Output;

    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    fn requires_authentication(&self) -> bool;

    fn method(&self) -> HttpMethod;

    fn command_path(&self) -> CommandPath;

    /// Form (POST) or query (GET) parameters. Absent options are absent keys.
    fn extra_arguments(&self) -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    /// Turn a JSON object from a successful response into the command's result.
    ///
    /// Must fail with [`RpcError::Protocol`] rather than return a partial result.
    fn parse_response(&self, body: Value) -> Result<Self::Output, RpcError>;

    /// Message for a 404 that carries no explanation from the service.
    fn not_found_message(&self) -> String {
        format!("{} target not found", self.name())
    }
}

// ============================================
// EXECUTION
// ============================================

/// Run `command` once against the service described by `configuration`.
pub async fn execute<C, T>(
    command: &C,
    configuration: &CoprConfiguration,
    transport: &T,
) -> Result<C::Output, RpcError>
where
    C: RpcCommand + ?Sized,
    T: Transport + ?Sized,
{
    let credentials = if command.requires_authentication() {
        match configuration.credentials() {
            Some(credentials) => Some(credentials),
            None => {
                warn!("{} requires credentials but none are configured", command.name());
                return Err(RpcError::Authentication {
                    message: format!(
                        "{} requires authentication; set login and token in the configuration file",
                        command.name()
                    ),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }
    } else {
        None
    };

    let url = command.command_path().resolve(configuration.base_url())?;
    let method = command.method();

    debug!(
        "{}: {method} {url} (authenticated: {})",
        command.name(),
        credentials.is_some()
    );

    let request = TransportRequest {
        method,
        url,
        arguments: command.extra_arguments(),
        credentials,
    };

    let response = transport.send(request).await?;

    debug!("{}: HTTP {}", command.name(), response.status);
    trace!("{}: raw response: {}", command.name(), response.body);

    if response.body.contains(SIGN_IN_PAGE_MARKER) {
        return Err(RpcError::Authentication {
            message: String::from("Invalid API token"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if !response.status.is_success() {
        return Err(service_error(command, &response));
    }

    let body: Value = serde_json::from_str(&response.body).map_err(|e| RpcError::Protocol {
        message: format!("Unknown response from the server: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    if !body.is_object() {
        return Err(RpcError::Protocol {
            message: String::from("Unknown response from the server: expected a JSON object"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if body.get("output").and_then(Value::as_str) == Some("notok") {
        return Err(RpcError::Service {
            status: response.status,
            message: server_error_text(&body)
                .unwrap_or_else(|| String::from("request rejected by the service")),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    command.parse_response(body)
}

#[track_caller]
fn service_error<C>(command: &C, response: &TransportResponse) -> RpcError
where
    C: RpcCommand + ?Sized,
{
    let status = response.status;

    if status.is_server_error() {
        debug!("{}: server error, raw response body: {}", command.name(), response.body);
    } else {
        debug!("{}: bad request, raw response body: {}", command.name(), response.body);
    }

    let from_json = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| server_error_text(&body));

    let message = from_json
        .or_else(|| status.is_not_found().then(|| command.not_found_message()))
        .or_else(|| plain_text_excerpt(&response.body))
        .unwrap_or_else(|| status.reason().to_string());

    RpcError::Service {
        status,
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}

fn server_error_text(body: &Value) -> Option<String> {
    body.get("error")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

/// Non-empty, non-HTML body text, shortened for use in a message.
fn plain_text_excerpt(body: &str) -> Option<String> {
    let text = body.trim();
    if text.is_empty() || text.starts_with('<') {
        return None;
    }
    Some(text.chars().take(MAX_ERROR_BODY_CHARS).collect())
}

/// Deserialize a typed view of a response body, reporting shape errors as
/// protocol errors that name the command.
#[track_caller]
pub(crate) fn decode_body<D>(command: &'static str, body: Value) -> Result<D, RpcError>
where
    D: serde::de::DeserializeOwned,
{
    serde_json::from_value(body).map_err(|e| RpcError::Protocol {
        message: format!("Malformed {command} response: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
