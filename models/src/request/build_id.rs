use crate::ModelError;

use common::ErrorLocation;

use std::panic::Location;

#[track_caller]
fn require_build_id(build_id: u64) -> Result<u64, ModelError> {
    if build_id == 0 {
        return Err(ModelError::Validation {
            message: String::from("Build ID must be non-zero"),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(build_id)
}

/// A request for the state of a single build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildDetailsRequest {
    build_id: u64,
}

impl BuildDetailsRequest {
    #[track_caller]
    pub fn new(build_id: u64) -> Result<Self, ModelError> {
        Ok(Self {
            build_id: require_build_id(build_id)?,
        })
    }

    pub fn build_id(&self) -> u64 {
        self.build_id
    }
}

/// A request to cancel a pending or running build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelBuildRequest {
    build_id: u64,
}

impl CancelBuildRequest {
    #[track_caller]
    pub fn new(build_id: u64) -> Result<Self, ModelError> {
        Ok(Self {
            build_id: require_build_id(build_id)?,
        })
    }

    pub fn build_id(&self) -> u64 {
        self.build_id
    }
}
