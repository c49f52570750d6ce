//! Requests and results exchanged with the Copr service.
//!
//! Requests are assembled through validating builders and are immutable once
//! built. Results are constructed once by the RPC layer from a parsed response
//! and only hand out borrowed, read-only views of their data.

pub mod error;
pub mod request;
pub mod result;

pub use error::model_error::ModelError;
pub use request::{
    BuildDetailsRequest, BuildRequest, BuildRequestBuilder, CancelBuildRequest, ListRequest,
    ProjectChrootRequest, ProjectDetailsRequest, SearchRequest,
};
pub use result::{
    BuildDetails, BuildResult, CancelResult, ChrootDetails, ListResult, ProjectDetails,
    ProjectId, ProjectSummary, YumRepository,
};
