use super::{CommandPath, RpcCommand, decode_body};
use crate::error::RpcError;
use crate::transport::HttpMethod;

use models::{BuildDetails, BuildDetailsRequest};

use serde::Deserialize;
use serde_json::Value;

const BUILD_SEGMENT: &str = "build";

#[derive(Debug, Deserialize)]
struct BuildDetailsResponse {
    status: String,
    project: String,
    owner: String,
    #[serde(default)]
    results: Option<String>,
    #[serde(default)]
    src_pkg: Option<String>,
    #[serde(default)]
    src_version: Option<String>,
    #[serde(default)]
    submitted_on: Option<i64>,
    #[serde(default)]
    started_on: Option<i64>,
    #[serde(default)]
    ended_on: Option<i64>,
}

/// Fetch the state of one build.
///
/// `GET /api/coprs/build/{id}/`, unauthenticated.
#[derive(Debug, Clone, Copy)]
pub struct BuildDetailsCommand<'a> {
    request: &'a BuildDetailsRequest,
}

impl<'a> BuildDetailsCommand<'a> {
    pub fn new(request: &'a BuildDetailsRequest) -> Self {
        Self { request }
    }
}

impl RpcCommand for BuildDetailsCommand<'_> {
    type Output = BuildDetails;

    fn name(&self) -> &'static str {
        "status"
    }

    fn requires_authentication(&self) -> bool {
        false
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn command_path(&self) -> CommandPath {
        CommandPath::coprs()
            .segment(BUILD_SEGMENT)
            .segment(self.request.build_id().to_string())
    }

    fn parse_response(&self, body: Value) -> Result<BuildDetails, RpcError> {
        let response: BuildDetailsResponse = decode_body(self.name(), body)?;

        Ok(BuildDetails::new(
            self.request.build_id(),
            response.status,
            response.project,
            response.owner,
        )
        .with_results(response.results)
        .with_source(response.src_pkg, response.src_version)
        .with_timestamps(
            response.submitted_on,
            response.started_on,
            response.ended_on,
        ))
    }

    fn not_found_message(&self) -> String {
        format!("Build {} not found", self.request.build_id())
    }
}
