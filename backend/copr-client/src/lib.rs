pub mod config;
pub mod error;
pub mod rpc;
pub mod session;
pub mod transport;

pub use config::{CoprConfiguration, Credentials};
pub use error::{ConfigError, RpcError};
pub use session::Session;

#[cfg(test)]
mod tests;

const COPR_HOSTNAME: &str = "copr.fedoraproject.org";
pub const DEFAULT_COPR_URL: &str = const_format::concatcp!("https://", COPR_HOSTNAME);

pub(crate) const API_ROOT_SEGMENT: &str = "api";
pub(crate) const COPRS_SEGMENT: &str = "coprs";
