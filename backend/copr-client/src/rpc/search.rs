use super::{CommandPath, RpcCommand, decode_body};
use crate::error::RpcError;
use crate::transport::HttpMethod;

use models::{ListResult, ProjectId, ProjectSummary, SearchRequest};

use serde::Deserialize;
use serde_json::Value;

const SEARCH_SEGMENT: &str = "search";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    repos: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    username: String,
    coprname: String,
    #[serde(default)]
    description: Option<String>,
}

/// Find projects of any user whose name contains the query.
///
/// `GET /api/coprs/search/{query}/`, unauthenticated.
#[derive(Debug, Clone, Copy)]
pub struct SearchCommand<'a> {
    request: &'a SearchRequest,
}

impl<'a> SearchCommand<'a> {
    pub fn new(request: &'a SearchRequest) -> Self {
        Self { request }
    }
}

impl RpcCommand for SearchCommand<'_> {
    type Output = ListResult;

    fn name(&self) -> &'static str {
        "search"
    }

    fn requires_authentication(&self) -> bool {
        false
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn command_path(&self) -> CommandPath {
        CommandPath::coprs()
            .segment(SEARCH_SEGMENT)
            .segment(self.request.query())
    }

    fn parse_response(&self, body: Value) -> Result<ListResult, RpcError> {
        let response: SearchResponse = decode_body(self.name(), body)?;

        let projects = response
            .repos
            .into_iter()
            .map(|hit| {
                let description = hit.description.filter(|text| !text.trim().is_empty());
                ProjectSummary::new(ProjectId::new(hit.username, hit.coprname), description)
            })
            .collect();

        Ok(ListResult::new(projects))
    }

    fn not_found_message(&self) -> String {
        format!("No projects found for {:?}", self.request.query())
    }
}
