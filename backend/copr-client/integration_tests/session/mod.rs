mod build;
mod errors;
mod list;
mod project;
mod single_build;

use copr_client::{CoprConfiguration, Credentials};

use common::RedactedToken;

pub const TEST_LOGIN: &str = "alice-login";
pub const TEST_TOKEN: &str = "alice-token";

/// Configuration pointing at a mock server, with or without credentials.
pub fn configuration_for(base_url: &str, authenticated: bool) -> CoprConfiguration {
    let credentials =
        authenticated.then(|| Credentials::new(TEST_LOGIN, RedactedToken::new(TEST_TOKEN)));
    CoprConfiguration::new(base_url, "alice", credentials).expect("valid configuration")
}
