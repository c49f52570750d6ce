/// State of a single build as reported by the service.
///
/// Timestamps are kept as the raw Unix seconds the service sends; the service
/// leaves them out (or null) until the corresponding transition happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildDetails {
    build_id: u64,
    status: String,
    project: String,
    owner: String,
    results: Option<String>,
    src_pkg: Option<String>,
    src_version: Option<String>,
    submitted_on: Option<i64>,
    started_on: Option<i64>,
    ended_on: Option<i64>,
}

impl BuildDetails {
    pub fn new(
        build_id: u64,
        status: impl Into<String>,
        project: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            build_id,
            status: status.into(),
            project: project.into(),
            owner: owner.into(),
            results: None,
            src_pkg: None,
            src_version: None,
            submitted_on: None,
            started_on: None,
            ended_on: None,
        }
    }

    pub fn with_results(mut self, results: Option<String>) -> Self {
        self.results = results;
        self
    }

    pub fn with_source(mut self, src_pkg: Option<String>, src_version: Option<String>) -> Self {
        self.src_pkg = src_pkg;
        self.src_version = src_version;
        self
    }

    pub fn with_timestamps(
        mut self,
        submitted_on: Option<i64>,
        started_on: Option<i64>,
        ended_on: Option<i64>,
    ) -> Self {
        self.submitted_on = submitted_on;
        self.started_on = started_on;
        self.ended_on = ended_on;
        self
    }

    pub fn build_id(&self) -> u64 {
        self.build_id
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// URL of the directory holding build results.
    pub fn results(&self) -> Option<&str> {
        self.results.as_deref()
    }

    pub fn src_pkg(&self) -> Option<&str> {
        self.src_pkg.as_deref()
    }

    pub fn src_version(&self) -> Option<&str> {
        self.src_version.as_deref()
    }

    pub fn submitted_on(&self) -> Option<i64> {
        self.submitted_on
    }

    pub fn started_on(&self) -> Option<i64> {
        self.started_on
    }

    pub fn ended_on(&self) -> Option<i64> {
        self.ended_on
    }
}
