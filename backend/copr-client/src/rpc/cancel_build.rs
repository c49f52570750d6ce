use super::{CommandPath, RpcCommand, decode_body};
use crate::error::RpcError;
use crate::transport::HttpMethod;

use models::{CancelBuildRequest, CancelResult};

use serde::Deserialize;
use serde_json::Value;

const CANCEL_BUILD_SEGMENT: &str = "cancel_build";

#[derive(Debug, Deserialize)]
struct CancelBuildResponse {
    status: String,
}

/// Cancel a build. The service leaves finished builds untouched.
///
/// `POST /api/coprs/cancel_build/{id}/`, authenticated.
#[derive(Debug, Clone, Copy)]
pub struct CancelBuildCommand<'a> {
    request: &'a CancelBuildRequest,
}

impl<'a> CancelBuildCommand<'a> {
    pub fn new(request: &'a CancelBuildRequest) -> Self {
        Self { request }
    }
}

impl RpcCommand for CancelBuildCommand<'_> {
    type Output = CancelResult;

    fn name(&self) -> &'static str {
        "cancel"
    }

    fn requires_authentication(&self) -> bool {
        true
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn command_path(&self) -> CommandPath {
        CommandPath::coprs()
            .segment(CANCEL_BUILD_SEGMENT)
            .segment(self.request.build_id().to_string())
    }

    fn parse_response(&self, body: Value) -> Result<CancelResult, RpcError> {
        let response: CancelBuildResponse = decode_body(self.name(), body)?;
        Ok(CancelResult::new(self.request.build_id(), response.status))
    }

    fn not_found_message(&self) -> String {
        format!("Build {} not found", self.request.build_id())
    }
}
