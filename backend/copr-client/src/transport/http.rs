use super::{HttpMethod, Transport, TransportRequest, TransportResponse};
use crate::error::RpcError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;
use std::time::Duration;

use log::debug;
use reqwest::Client;

const USER_AGENT: &str = const_format::concatcp!("copr-cli/", env!("CARGO_PKG_VERSION"));

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug)]
pub struct HttpTransport {
    client: Option<Client>,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, RpcError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client: Some(client),
        })
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest<'_>) -> Result<TransportResponse, RpcError> {
        let client = self.client.as_ref().ok_or_else(|| RpcError::Transport {
            message: String::from("HTTP transport already released"),
            is_timeout: false,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let TransportRequest {
            method,
            mut url,
            arguments,
            credentials,
        } = request;

        let builder = match method {
            HttpMethod::Get => {
                if !arguments.is_empty() {
                    url.query_pairs_mut().extend_pairs(&arguments);
                }
                client.get(url)
            }
            HttpMethod::Post => client.post(url).form(&arguments),
        };

        let builder = match credentials {
            Some(credentials) => {
                builder.basic_auth(credentials.login(), Some(credentials.token().expose()))
            }
            None => builder,
        };

        let response = builder.send().await?;
        let status = HttpStatusCode(response.status().as_u16());
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }

    fn release(&mut self) {
        if self.client.take().is_some() {
            debug!("HTTP client released");
        }
    }
}
