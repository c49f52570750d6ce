use super::require_name;
use crate::ModelError;

use common::ErrorLocation;

use std::panic::Location;

/// Form field carrying the space-separated source RPM URLs.
pub const PKGS_FIELD: &str = "pkgs";
pub const MEMORY_FIELD: &str = "memory";
pub const TIMEOUT_FIELD: &str = "timeout";

/// Chroots are sent as form fields named after the chroot, so a chroot may
/// not share a name with any of these.
pub const RESERVED_BUILD_FIELDS: [&str; 3] = [PKGS_FIELD, MEMORY_FIELD, TIMEOUT_FIELD];

/// A request to build one or more source RPMs in a project.
///
/// Obtained from [`BuildRequestBuilder`]; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    username: String,
    project_name: String,
    source_rpms: Vec<String>,
    memory: Option<u64>,
    timeout: Option<u64>,
    chroots: Vec<String>,
}

impl BuildRequest {
    pub fn builder() -> BuildRequestBuilder {
        BuildRequestBuilder::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Source RPM URLs in submission order.
    pub fn source_rpms(&self) -> &[String] {
        &self.source_rpms
    }

    /// Memory limit for the builder, in MiB.
    pub fn memory(&self) -> Option<u64> {
        self.memory
    }

    /// Build timeout, in seconds.
    pub fn timeout(&self) -> Option<u64> {
        self.timeout
    }

    /// Chroots to restrict the build to. Empty means every chroot of the project.
    pub fn chroots(&self) -> &[String] {
        &self.chroots
    }
}

/// Builder for creating validated [`BuildRequest`] instances.
#[derive(Debug, Default)]
pub struct BuildRequestBuilder {
    username: Option<String>,
    project_name: Option<String>,
    source_rpms: Vec<String>,
    memory: Option<u64>,
    timeout: Option<u64>,
    chroots: Vec<String>,
}

impl BuildRequestBuilder {
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_project_name(mut self, project_name: impl Into<String>) -> Self {
        self.project_name = Some(project_name.into());
        self
    }

    pub fn add_source_rpm(mut self, url: impl Into<String>) -> Self {
        self.source_rpms.push(url.into());
        self
    }

    pub fn with_source_rpms<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_rpms.extend(urls.into_iter().map(Into::into));
        self
    }

    pub fn with_memory(mut self, memory: Option<u64>) -> Self {
        self.memory = memory;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<u64>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn add_chroot(mut self, chroot: impl Into<String>) -> Self {
        self.chroots.push(chroot.into());
        self
    }

    /// Build the BuildRequest with validation.
    #[track_caller]
    pub fn build(self) -> Result<BuildRequest, ModelError> {
        let username = require_name(self.username, "Username")?;
        let project_name = require_name(self.project_name, "Project name")?;

        if self.source_rpms.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("At least one source RPM URL is required"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // A blank or space-containing URL would corrupt the space-joined `pkgs` form value.
        if let Some(bad) = self
            .source_rpms
            .iter()
            .find(|url| url.is_empty() || url.contains(char::is_whitespace))
        {
            return Err(ModelError::Validation {
                message: format!("Invalid source RPM URL: {bad:?}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(bad) = self
            .chroots
            .iter()
            .find(|chroot| chroot.trim().is_empty())
        {
            return Err(ModelError::Validation {
                message: format!("Invalid chroot name: {bad:?}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(bad) = self
            .chroots
            .iter()
            .find(|chroot| RESERVED_BUILD_FIELDS.contains(&chroot.as_str()))
        {
            return Err(ModelError::Validation {
                message: format!("Invalid chroot name: {bad:?} is a reserved build field"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(BuildRequest {
            username,
            project_name,
            source_rpms: self.source_rpms,
            memory: self.memory,
            timeout: self.timeout,
            chroots: self.chroots,
        })
    }
}
