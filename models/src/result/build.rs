/// Outcome of a successful build submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildResult {
    build_ids: Vec<u64>,
    message: String,
}

impl BuildResult {
    pub fn new(build_ids: Vec<u64>, message: impl Into<String>) -> Self {
        Self {
            build_ids,
            message: message.into(),
        }
    }

    /// IDs of the builds created, in the order the service reported them.
    pub fn build_ids(&self) -> &[u64] {
        &self.build_ids
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of a build cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelResult {
    build_id: u64,
    status: String,
}

impl CancelResult {
    pub fn new(build_id: u64, status: impl Into<String>) -> Self {
        Self {
            build_id,
            status: status.into(),
        }
    }

    pub fn build_id(&self) -> u64 {
        self.build_id
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}
