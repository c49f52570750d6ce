mod build;
mod build_id;
mod list;
mod project;
mod search;

pub use build::{
    BuildRequest, BuildRequestBuilder, MEMORY_FIELD, PKGS_FIELD, RESERVED_BUILD_FIELDS,
    TIMEOUT_FIELD,
};
pub use build_id::{BuildDetailsRequest, CancelBuildRequest};
pub use list::ListRequest;
pub use project::{ProjectChrootRequest, ProjectDetailsRequest};
pub use search::SearchRequest;

use crate::ModelError;

use common::ErrorLocation;

use std::panic::Location;

/// Reject empty or whitespace-only values for a required name.
#[track_caller]
pub(crate) fn require_name(value: Option<String>, what: &str) -> Result<String, ModelError> {
    let value = value.ok_or_else(|| ModelError::Validation {
        message: format!("{what} is required"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    if value.trim().is_empty() {
        return Err(ModelError::Validation {
            message: format!("{what} cannot be empty"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // Dot segments would be collapsed out of the request path.
    if value == "." || value == ".." {
        return Err(ModelError::Validation {
            message: format!("{what} cannot be {value:?}"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(value)
}
