//! The seam between RPC commands and the network.
//!
//! Commands never talk to `reqwest` directly: they describe a request as a
//! [`TransportRequest`] and the session hands it to its [`Transport`]. Tests
//! swap in their own transport to observe or script the exchange.

mod http;

pub use http::HttpTransport;

use crate::config::Credentials;
use crate::error::RpcError;

use common::HttpStatusCode;

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;

use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Read-only call; arguments travel in the query string.
    Get,
    /// State-changing call; arguments travel as a form body.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// One outgoing HTTP call, fully resolved.
#[derive(Debug)]
pub struct TransportRequest<'a> {
    pub method: HttpMethod,
    pub url: Url,
    pub arguments: BTreeMap<String, String>,
    /// Present only for commands that require authentication.
    pub credentials: Option<&'a Credentials>,
}

/// Status and raw body of the service's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: HttpStatusCode,
    pub body: String,
}

pub trait Transport {
    /// Perform exactly one HTTP exchange. Implementations must not retry.
    fn send(
        &self,
        request: TransportRequest<'_>,
    ) -> impl Future<Output = Result<TransportResponse, RpcError>>;

    /// Release any connection state. Called once when the owning session ends.
    fn release(&mut self) {}
}
