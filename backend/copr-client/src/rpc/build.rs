use super::{CommandPath, RpcCommand, decode_body};
use crate::error::RpcError;
use crate::transport::HttpMethod;

use models::request::{MEMORY_FIELD, PKGS_FIELD, TIMEOUT_FIELD};
use models::{BuildRequest, BuildResult};

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

const NEW_BUILD_SEGMENT: &str = "new_build";
/// Form value marking a chroot as selected.
const CHROOT_SELECTED: &str = "y";

#[derive(Debug, Deserialize)]
struct NewBuildResponse {
    ids: Vec<u64>,
    message: String,
}

/// Submit source RPMs for building in a project.
///
/// `POST /api/coprs/{username}/{project}/new_build/`, authenticated.
#[derive(Debug, Clone, Copy)]
pub struct BuildCommand<'a> {
    request: &'a BuildRequest,
}

impl<'a> BuildCommand<'a> {
    pub fn new(request: &'a BuildRequest) -> Self {
        Self { request }
    }
}

impl RpcCommand for BuildCommand<'_> {
    type Output = BuildResult;

    fn name(&self) -> &'static str {
        "build"
    }

    fn requires_authentication(&self) -> bool {
        true
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn command_path(&self) -> CommandPath {
        CommandPath::coprs()
            .segment(self.request.username())
            .segment(self.request.project_name())
            .segment(NEW_BUILD_SEGMENT)
    }

    fn extra_arguments(&self) -> BTreeMap<String, String> {
        let mut arguments = BTreeMap::new();

        arguments.insert(
            PKGS_FIELD.to_string(),
            self.request.source_rpms().join(" "),
        );

        if let Some(memory) = self.request.memory() {
            arguments.insert(MEMORY_FIELD.to_string(), memory.to_string());
        }

        if let Some(timeout) = self.request.timeout() {
            arguments.insert(TIMEOUT_FIELD.to_string(), timeout.to_string());
        }

        // Request validation keeps chroot names off the reserved fields.
        for chroot in self.request.chroots() {
            debug_assert!(
                !arguments.contains_key(chroot),
                "chroot {chroot:?} shadows a build field"
            );
            arguments
                .entry(chroot.clone())
                .or_insert_with(|| CHROOT_SELECTED.to_string());
        }

        arguments
    }

    fn parse_response(&self, body: Value) -> Result<BuildResult, RpcError> {
        let response: NewBuildResponse = decode_body(self.name(), body)?;
        Ok(BuildResult::new(response.ids, response.message))
    }

    fn not_found_message(&self) -> String {
        format!(
            "Project {}/{} not found",
            self.request.username(),
            self.request.project_name()
        )
    }
}
