use super::require_name;
use crate::ModelError;
use crate::result::ProjectId;

/// A request for the public details of one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetailsRequest {
    project: ProjectId,
}

impl ProjectDetailsRequest {
    #[track_caller]
    pub fn new(
        username: impl Into<String>,
        project_name: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let username = require_name(Some(username.into()), "Username")?;
        let project_name = require_name(Some(project_name.into()), "Project name")?;
        Ok(Self {
            project: ProjectId::new(username, project_name),
        })
    }

    pub fn project(&self) -> &ProjectId {
        &self.project
    }
}

/// A request for the settings of one chroot enabled in a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectChrootRequest {
    project: ProjectId,
    chroot: String,
}

impl ProjectChrootRequest {
    #[track_caller]
    pub fn new(
        username: impl Into<String>,
        project_name: impl Into<String>,
        chroot: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let username = require_name(Some(username.into()), "Username")?;
        let project_name = require_name(Some(project_name.into()), "Project name")?;
        let chroot = require_name(Some(chroot.into()), "Chroot name")?;
        Ok(Self {
            project: ProjectId::new(username, project_name),
            chroot,
        })
    }

    pub fn project(&self) -> &ProjectId {
        &self.project
    }

    pub fn chroot(&self) -> &str {
        &self.chroot
    }
}
