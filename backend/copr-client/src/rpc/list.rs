use super::{CommandPath, RpcCommand, decode_body};
use crate::error::RpcError;
use crate::transport::HttpMethod;

use models::{ListRequest, ListResult, ProjectId, ProjectSummary};

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct ProjectListResponse {
    repos: Vec<RepoEntry>,
}

#[derive(Debug, Deserialize)]
struct RepoEntry {
    name: String,
    #[serde(default)]
    description: Option<String>,
}

/// List the projects owned by a user.
///
/// `GET /api/coprs/{username}/`, unauthenticated.
#[derive(Debug, Clone, Copy)]
pub struct ListCommand<'a> {
    request: &'a ListRequest,
}

impl<'a> ListCommand<'a> {
    pub fn new(request: &'a ListRequest) -> Self {
        Self { request }
    }
}

impl RpcCommand for ListCommand<'_> {
    type Output = ListResult;

    fn name(&self) -> &'static str {
        "list"
    }

    fn requires_authentication(&self) -> bool {
        false
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn command_path(&self) -> CommandPath {
        CommandPath::coprs().segment(self.request.username())
    }

    fn parse_response(&self, body: Value) -> Result<ListResult, RpcError> {
        let response: ProjectListResponse = decode_body(self.name(), body)?;
        let username = self.request.username();

        let projects = response
            .repos
            .into_iter()
            .map(|repo| {
                let description = repo.description.filter(|text| !text.trim().is_empty());
                ProjectSummary::new(ProjectId::new(username, repo.name), description)
            })
            .collect();

        Ok(ListResult::new(projects))
    }

    fn not_found_message(&self) -> String {
        format!("User {} is unknown", self.request.username())
    }
}
