use std::fmt;

/// Fully qualified project name: owner plus project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId {
    username: String,
    project_name: String,
}

impl ProjectId {
    pub fn new(username: impl Into<String>, project_name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            project_name: project_name.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.username, self.project_name)
    }
}

/// One entry of a project listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    id: ProjectId,
    description: Option<String>,
}

impl ProjectSummary {
    pub fn new(id: ProjectId, description: Option<String>) -> Self {
        Self { id, description }
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A project listing (one user's projects, or search hits), in service order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListResult {
    projects: Vec<ProjectSummary>,
}

impl ListResult {
    pub fn new(projects: Vec<ProjectSummary>) -> Self {
        Self { projects }
    }

    pub fn projects(&self) -> &[ProjectSummary] {
        &self.projects
    }

    pub fn project_ids(&self) -> impl Iterator<Item = &ProjectId> {
        self.projects.iter().map(ProjectSummary::id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
