// Runs the built `copr` binary to check exit statuses and stream separation.

use super::anonymous_config;

use std::process::{Command, Output};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn copr(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_copr"))
        .args(args)
        .output()
        .expect("copr binary should start")
}

/// **VALUE**: Verifies exit status 0 and that results, not logs, go to stdout.
#[tokio::test]
async fn given_successful_listing_when_binary_runs_then_exits_zero() {
    // GIVEN: A service with one project for alice
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/coprs/alice/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": "ok",
            "repos": [{"name": "tools"}]
        })))
        .mount(&server)
        .await;
    let config = anonymous_config(&server.uri());
    let config_path = config.path().to_str().expect("utf-8 path").to_string();

    // WHEN: Running `copr -v list` as a child process
    let output =
        tokio::task::spawn_blocking(move || copr(&["-c", config_path.as_str(), "-v", "list"]))
            .await
            .unwrap();

    // THEN: Success, project name alone on stdout
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "tools\n");
}

/// **VALUE**: Verifies that a runtime failure exits with status 1 and reports on stderr.
///
/// **WHY THIS MATTERS**: Shell scripts branch on the exit status; an error printed
/// with status 0 would be mistaken for success.
#[test]
fn given_missing_config_when_binary_runs_then_exits_one_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let output = copr(&["-c", missing.to_str().unwrap(), "list"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Config Not Found"));
}

#[test]
fn given_unknown_subcommand_when_binary_runs_then_exits_with_usage_status() {
    let output = copr(&["frobnicate"]);

    assert_eq!(output.status.code(), Some(2));
}
