use super::require_name;
use crate::ModelError;

/// A substring search over project names, across all users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
}

impl SearchRequest {
    #[track_caller]
    pub fn new(query: impl Into<String>) -> Result<Self, ModelError> {
        let query = require_name(Some(query.into()), "Search query")?;
        Ok(Self { query })
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}
