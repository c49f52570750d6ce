mod build;
mod details;
mod list;
mod project;

pub use build::{BuildResult, CancelResult};
pub use details::BuildDetails;
pub use list::{ListResult, ProjectId, ProjectSummary};
pub use project::{ChrootDetails, ProjectDetails, YumRepository};
