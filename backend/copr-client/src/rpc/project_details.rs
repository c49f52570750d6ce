use super::{CommandPath, RpcCommand, decode_body};
use crate::error::RpcError;
use crate::transport::HttpMethod;

use models::{
    ChrootDetails, ProjectChrootRequest, ProjectDetails, ProjectDetailsRequest, YumRepository,
};

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

const DETAIL_SEGMENT: &str = "detail";

#[derive(Debug, Deserialize)]
struct ProjectDetailsResponse {
    detail: DetailBody,
}

#[derive(Debug, Deserialize)]
struct DetailBody {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    instructions: Option<String>,
    #[serde(default)]
    last_modified: Option<i64>,
    /// Space-separated URLs.
    #[serde(default)]
    additional_repos: Option<String>,
    /// Release name to repository URL.
    #[serde(default)]
    yum_repos: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct ChrootDetailsResponse {
    /// Space-separated package names; null when none are configured.
    buildroot_pkgs: Option<String>,
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|text| !text.trim().is_empty())
}

fn split_words(text: Option<String>) -> Vec<String> {
    text.as_deref()
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Fetch the public details of a project.
///
/// `GET /api/coprs/{username}/{project}/detail/`, unauthenticated.
#[derive(Debug, Clone, Copy)]
pub struct ProjectDetailsCommand<'a> {
    request: &'a ProjectDetailsRequest,
}

impl<'a> ProjectDetailsCommand<'a> {
    pub fn new(request: &'a ProjectDetailsRequest) -> Self {
        Self { request }
    }
}

impl RpcCommand for ProjectDetailsCommand<'_> {
    type Output = ProjectDetails;

    fn name(&self) -> &'static str {
        "info"
    }

    fn requires_authentication(&self) -> bool {
        false
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn command_path(&self) -> CommandPath {
        let project = self.request.project();
        CommandPath::coprs()
            .segment(project.username())
            .segment(project.project_name())
            .segment(DETAIL_SEGMENT)
    }

    fn parse_response(&self, body: Value) -> Result<ProjectDetails, RpcError> {
        let response: ProjectDetailsResponse = decode_body(self.name(), body)?;
        let detail = response.detail;

        let yum_repos = detail
            .yum_repos
            .into_iter()
            .map(|(release, url)| YumRepository::new(release, url))
            .collect();

        Ok(ProjectDetails::new(self.request.project().clone())
            .with_texts(non_blank(detail.description), non_blank(detail.instructions))
            .with_last_modified(detail.last_modified)
            .with_additional_repos(split_words(detail.additional_repos))
            .with_yum_repos(yum_repos))
    }

    fn not_found_message(&self) -> String {
        format!("Project {} not found", self.request.project())
    }
}

/// Fetch the settings of one chroot of a project.
///
/// `GET /api/coprs/{username}/{project}/detail/{chroot}/`, unauthenticated.
#[derive(Debug, Clone, Copy)]
pub struct ProjectChrootCommand<'a> {
    request: &'a ProjectChrootRequest,
}

impl<'a> ProjectChrootCommand<'a> {
    pub fn new(request: &'a ProjectChrootRequest) -> Self {
        Self { request }
    }
}

impl RpcCommand for ProjectChrootCommand<'_> {
    type Output = ChrootDetails;

    fn name(&self) -> &'static str {
        "chroot"
    }

    fn requires_authentication(&self) -> bool {
        false
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn command_path(&self) -> CommandPath {
        let project = self.request.project();
        CommandPath::coprs()
            .segment(project.username())
            .segment(project.project_name())
            .segment(DETAIL_SEGMENT)
            .segment(self.request.chroot())
    }

    fn parse_response(&self, body: Value) -> Result<ChrootDetails, RpcError> {
        let response: ChrootDetailsResponse = decode_body(self.name(), body)?;
        Ok(ChrootDetails::new(
            self.request.chroot(),
            split_words(response.buildroot_pkgs),
        ))
    }

    fn not_found_message(&self) -> String {
        format!(
            "Chroot {} not found in project {}",
            self.request.chroot(),
            self.request.project()
        )
    }
}
