//! Shared building blocks for the Copr client.
//!
//! Everything here is free of networking and business logic so both the
//! value objects in `models` and the RPC layer in `copr-client` can use it.
//!
//! ## Architecture
//!
//! - **common** (this crate): error locations, HTTP status codes, secrets
//! - **models**: requests and results exchanged with the service
//! - **copr-client**: configuration, RPC commands, session and transport
//! - **copr-cli**: the `copr` binary wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_token;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_token::RedactedToken;
