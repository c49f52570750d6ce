use super::ProjectId;

/// Repository the service publishes for one release of a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YumRepository {
    release: String,
    url: String,
}

impl YumRepository {
    pub fn new(release: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            release: release.into(),
            url: url.into(),
        }
    }

    /// Release name, e.g. `fedora-40-x86_64`.
    pub fn release(&self) -> &str {
        &self.release
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Public description of a project.
///
/// Repositories only appear once the project has a build with results, so an
/// empty list is normal for a fresh project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetails {
    id: ProjectId,
    description: Option<String>,
    instructions: Option<String>,
    last_modified: Option<i64>,
    additional_repos: Vec<String>,
    yum_repos: Vec<YumRepository>,
}

impl ProjectDetails {
    pub fn new(id: ProjectId) -> Self {
        Self {
            id,
            description: None,
            instructions: None,
            last_modified: None,
            additional_repos: Vec::new(),
            yum_repos: Vec::new(),
        }
    }

    pub fn with_texts(mut self, description: Option<String>, instructions: Option<String>) -> Self {
        self.description = description;
        self.instructions = instructions;
        self
    }

    pub fn with_last_modified(mut self, last_modified: Option<i64>) -> Self {
        self.last_modified = last_modified;
        self
    }

    pub fn with_additional_repos(mut self, additional_repos: Vec<String>) -> Self {
        self.additional_repos = additional_repos;
        self
    }

    pub fn with_yum_repos(mut self, yum_repos: Vec<YumRepository>) -> Self {
        self.yum_repos = yum_repos;
        self
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    /// Unix seconds of the latest build, if any.
    pub fn last_modified(&self) -> Option<i64> {
        self.last_modified
    }

    pub fn additional_repos(&self) -> &[String] {
        &self.additional_repos
    }

    pub fn yum_repos(&self) -> &[YumRepository] {
        &self.yum_repos
    }
}

/// Settings of one chroot within a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChrootDetails {
    chroot: String,
    buildroot_pkgs: Vec<String>,
}

impl ChrootDetails {
    pub fn new(chroot: impl Into<String>, buildroot_pkgs: Vec<String>) -> Self {
        Self {
            chroot: chroot.into(),
            buildroot_pkgs,
        }
    }

    pub fn chroot(&self) -> &str {
        &self.chroot
    }

    /// Extra packages installed into the buildroot before each build.
    pub fn buildroot_pkgs(&self) -> &[String] {
        &self.buildroot_pkgs
    }
}
