// End-to-end tests for `copr` subcommands: configuration file on disk,
// command-line parsing, HTTP against a mock service, rendered output.

mod binary;

use copr_cli::cli::Cli;
use copr_cli::commands::execute;
use copr_cli::error::CliError;

use copr_client::{ConfigError, RpcError};

use std::io::Write;
use std::path::Path;

use clap::Parser;
use serde_json::json;
use tempfile::NamedTempFile;
use wiremock::matchers::{body_string_contains, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp config file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

fn authenticated_config(base_url: &str) -> NamedTempFile {
    write_config(&format!(
        "[copr-cli]\nusername = \"alice\"\nlogin = \"alice-login\"\ntoken = \"alice-token\"\ncopr_url = \"{base_url}\"\n"
    ))
}

fn anonymous_config(base_url: &str) -> NamedTempFile {
    write_config(&format!(
        "[copr-cli]\nusername = \"alice\"\ncopr_url = \"{base_url}\"\n"
    ))
}

async fn run(config: &Path, args: &[&str]) -> (Result<(), CliError>, String) {
    let config = config.to_str().expect("utf-8 temp path");
    let argv = ["copr", "-c", config].into_iter().chain(args.iter().copied());
    let cli = Cli::try_parse_from(argv).expect("valid command line");

    let mut out = Vec::new();
    let result = execute(&cli, &mut out).await;
    (result, String::from_utf8(out).expect("utf-8 output"))
}

/// **VALUE**: Verifies that `copr list` without a username lists the configured user.
///
/// **WHY THIS MATTERS**: This is the most common invocation; it must hit
/// `/api/coprs/<configured user>/` and print bare project names.
#[tokio::test]
async fn given_no_username_when_listing_then_configured_user_projects_printed() {
    // GIVEN: A service with two projects for alice
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/coprs/alice/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": "ok",
            "repos": [{"name": "tools"}, {"name": "playground", "description": ""}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let config = anonymous_config(&server.uri());

    // WHEN: Running `copr list`
    let (result, stdout) = run(config.path(), &["list"]).await;

    // THEN: Names only, one per line
    result.unwrap();
    assert_eq!(stdout, "tools\nplayground\n");
}

#[tokio::test]
async fn given_username_flag_when_listing_then_overrides_configured_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/coprs/bob/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"repos": []})))
        .expect(1)
        .mount(&server)
        .await;
    let config = anonymous_config(&server.uri());

    let (result, stdout) = run(config.path(), &["-u", "bob", "list"]).await;

    result.unwrap();
    assert!(stdout.is_empty());
}

/// **VALUE**: Verifies a full build submission: authenticated POST, form payload,
/// printed message and build IDs.
#[tokio::test]
async fn given_authenticated_config_when_building_then_ids_printed() {
    // GIVEN: A service accepting builds for alice/tools
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/coprs/alice/tools/new_build/"))
        .and(header_exists("authorization"))
        .and(body_string_contains("memory=2048"))
        .and(body_string_contains("fedora-40-x86_64=y"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": "ok",
            "ids": [311, 312],
            "message": "Build was added to tools."
        })))
        .expect(1)
        .mount(&server)
        .await;
    let config = authenticated_config(&server.uri());

    // WHEN: Submitting two source RPMs
    let (result, stdout) = run(
        config.path(),
        &[
            "build",
            "tools",
            "http://example.org/a.src.rpm",
            "http://example.org/b.src.rpm",
            "--memory",
            "2048",
            "-r",
            "fedora-40-x86_64",
        ],
    )
    .await;

    // THEN: Message first, then one line per build
    result.unwrap();
    assert_eq!(
        stdout,
        "Build was added to tools.\nBuild ID: 311\nBuild ID: 312\n"
    );
}

/// **VALUE**: Verifies that building without credentials fails before any request.
///
/// **WHY THIS MATTERS**: Anonymous builds would bounce off the sign-in page;
/// the user should be told to configure a token instead.
#[tokio::test]
async fn given_anonymous_config_when_building_then_authentication_error_without_request() {
    let server = MockServer::start().await;
    let config = anonymous_config(&server.uri());

    let (result, stdout) = run(
        config.path(),
        &["build", "tools", "http://example.org/a.src.rpm"],
    )
    .await;

    assert!(matches!(
        result,
        Err(CliError::Rpc(RpcError::Authentication { .. }))
    ));
    assert!(stdout.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_invalid_srpm_url_when_building_then_usage_error() {
    let server = MockServer::start().await;
    let config = authenticated_config(&server.uri());

    let (result, _) = run(config.path(), &["build", "tools", "not a url"]).await;

    match result {
        Err(CliError::Usage { message, .. }) => {
            assert!(message.contains("Invalid source RPM URL"), "{message}")
        }
        other => panic!("expected usage error, got {other:?}"),
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_build_id_when_status_requested_then_details_printed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/coprs/build/77/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": "ok",
            "status": "running",
            "project": "tools",
            "owner": "alice",
            "submitted_on": 1_700_000_000
        })))
        .mount(&server)
        .await;
    let config = anonymous_config(&server.uri());

    let (result, stdout) = run(config.path(), &["status", "77"]).await;

    result.unwrap();
    assert_eq!(
        stdout,
        "Build 77: running\n  Project: alice/tools\n  Submitted: 2023-11-14T22:13:20Z\n"
    );
}

/// **VALUE**: Verifies that a service-side refusal is reported, not printed as success.
#[tokio::test]
async fn given_service_rejection_when_cancelling_then_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/coprs/cancel_build/5/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": "notok",
            "error": "Cannot cancel build 5"
        })))
        .mount(&server)
        .await;
    let config = authenticated_config(&server.uri());

    let (result, stdout) = run(config.path(), &["cancel", "5"]).await;

    match result {
        Err(CliError::Rpc(RpcError::Service { message, .. })) => {
            assert_eq!(message, "Cannot cancel build 5")
        }
        other => panic!("expected service error, got {other:?}"),
    }
    assert!(stdout.is_empty());
}

#[tokio::test]
async fn given_missing_config_file_when_running_then_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let (result, _) = run(&missing, &["list"]).await;

    assert!(matches!(
        result,
        Err(CliError::Config(ConfigError::NotFound { .. }))
    ));
}

/// **VALUE**: Verifies that `copr info NAME` looks up the configured user's project.
#[tokio::test]
async fn given_bare_project_name_when_info_requested_then_configured_owner_is_used() {
    // GIVEN: A project of alice with one repository
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/coprs/alice/tools/detail/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": "ok",
            "detail": {
                "description": "Handy tools",
                "yum_repos": {"fedora-40-x86_64": "https://results.example.org/f40/"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let config = anonymous_config(&server.uri());

    // WHEN: Asking for the project without an owner
    let (result, stdout) = run(config.path(), &["info", "tools"]).await;

    // THEN: The configured owner was filled in
    result.unwrap();
    assert_eq!(
        stdout,
        "Project: alice/tools\n  Description: Handy tools\n  Repo fedora-40-x86_64: https://results.example.org/f40/\n"
    );
}

#[tokio::test]
async fn given_owner_prefix_when_chroot_requested_then_packages_printed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/coprs/bob/tools/detail/epel-9-x86_64/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": "ok",
            "buildroot_pkgs": "gcc make"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let config = anonymous_config(&server.uri());

    let (result, stdout) = run(config.path(), &["chroot", "bob/tools", "epel-9-x86_64"]).await;

    result.unwrap();
    assert_eq!(stdout, "gcc\nmake\n");
}

#[tokio::test]
async fn given_query_when_searching_then_owner_qualified_names_printed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/coprs/search/tool/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": "ok",
            "repos": [
                {"username": "bob", "coprname": "tools"},
                {"username": "carol", "coprname": "toolchain"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let config = anonymous_config(&server.uri());

    let (result, stdout) = run(config.path(), &["search", "tool"]).await;

    result.unwrap();
    assert_eq!(stdout, "bob/tools\ncarol/toolchain\n");
}

/// **VALUE**: Verifies that a chroot named like a build form field is refused.
///
/// **BUG THIS CATCHES**: `-r pkgs` used to replace the source RPM list in the
/// submitted form, so the build silently ran on the string `y`.
#[tokio::test]
async fn given_chroot_named_like_build_field_when_building_then_usage_error_without_request() {
    let server = MockServer::start().await;
    let config = authenticated_config(&server.uri());

    let (result, stdout) = run(
        config.path(),
        &["build", "tools", "http://example.org/a.src.rpm", "-r", "pkgs"],
    )
    .await;

    match result {
        Err(CliError::Usage { message, .. }) => {
            assert!(message.contains("reserved build field"), "{message}")
        }
        other => panic!("expected usage error, got {other:?}"),
    }
    assert!(stdout.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}
