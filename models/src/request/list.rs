use super::require_name;
use crate::ModelError;

/// A request to list the projects owned by one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    username: String,
}

impl ListRequest {
    #[track_caller]
    pub fn new(username: impl Into<String>) -> Result<Self, ModelError> {
        let username = require_name(Some(username.into()), "Username")?;
        Ok(Self { username })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
