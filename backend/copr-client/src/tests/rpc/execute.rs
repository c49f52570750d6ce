use crate::tests::support::{
    ScriptedTransport, anonymous_configuration, authenticated_configuration, capture_logs,
    captured_logs_containing,
};
use crate::error::RpcError;
use crate::rpc::{BuildCommand, ListCommand, execute};
use crate::transport::HttpMethod;

use common::HttpStatusCode;
use models::{BuildRequest, ListRequest};

use log::Level;

fn build_request() -> BuildRequest {
    BuildRequest::builder()
        .with_username("alice")
        .with_project_name("myproj")
        .add_source_rpm("http://x/a.src.rpm")
        .build()
        .unwrap()
}

/// **VALUE**: Verifies fail-fast authentication: no credentials means no network call.
///
/// **WHY THIS MATTERS**: Sending an unauthenticated build would either leak the request
/// to the service for nothing or, worse, be answered with a sign-in page that looks like
/// a protocol failure. The user needs to hear "configure a token", immediately.
///
/// **BUG THIS CATCHES**: Would catch the authentication check moving after `send()`.
#[tokio::test]
async fn given_no_credentials_when_authenticated_command_executed_then_fails_without_network() {
    // GIVEN: A transport that would happily succeed, and a configuration without credentials
    let transport = ScriptedTransport::responding(200, r#"{"ids": [1], "message": "ok"}"#);
    let configuration = anonymous_configuration();
    let request = build_request();

    // WHEN: Running the build command
    let result = execute(&BuildCommand::new(&request), &configuration, &transport).await;

    // THEN: Authentication error and zero transport calls
    assert!(matches!(result, Err(RpcError::Authentication { .. })));
    assert_eq!(transport.calls.get(), 0);
}

#[tokio::test]
async fn given_credentials_when_build_executed_then_sends_authenticated_post() {
    let transport = ScriptedTransport::responding(200, r#"{"ids": [5], "message": "queued"}"#);
    let configuration = authenticated_configuration();
    let request = build_request();

    let result = execute(&BuildCommand::new(&request), &configuration, &transport)
        .await
        .unwrap();

    let sent = transport.last_request();
    assert_eq!(sent.method, HttpMethod::Post);
    assert_eq!(
        sent.url,
        "https://copr.example.org/api/coprs/alice/myproj/new_build/"
    );
    assert_eq!(sent.arguments["pkgs"], "http://x/a.src.rpm");
    assert_eq!(sent.login.as_deref(), Some("alice-login"));
    assert_eq!(result.build_ids(), &[5]);
    assert_eq!(transport.calls.get(), 1);
}

/// **VALUE**: Verifies that anonymous commands never carry credentials, even when the
/// session has them.
#[tokio::test]
async fn given_credentials_when_list_executed_then_request_is_anonymous() {
    let transport = ScriptedTransport::responding(200, r#"{"repos": []}"#);
    let configuration = authenticated_configuration();
    let request = ListRequest::new("bob").unwrap();

    execute(&ListCommand::new(&request), &configuration, &transport)
        .await
        .unwrap();

    let sent = transport.last_request();
    assert_eq!(sent.method, HttpMethod::Get);
    assert_eq!(sent.login, None);
}

/// **VALUE**: Verifies the service's own error text is surfaced with the status code.
#[tokio::test]
async fn given_error_status_with_json_error_when_executed_then_returns_service_error() {
    let transport = ScriptedTransport::responding(
        400,
        r#"{"output": "notok", "error": "Invalid request: pkgs: This field is required."}"#,
    );
    let configuration = authenticated_configuration();
    let request = build_request();

    let result = execute(&BuildCommand::new(&request), &configuration, &transport).await;

    match result {
        Err(RpcError::Service {
            status, message, ..
        }) => {
            assert_eq!(status, HttpStatusCode(400));
            assert_eq!(message, "Invalid request: pkgs: This field is required.");
        }
        other => panic!("Expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_404_without_body_when_list_executed_then_names_unknown_user() {
    let transport = ScriptedTransport::responding(404, "");
    let configuration = anonymous_configuration();
    let request = ListRequest::new("nobody").unwrap();

    let result = execute(&ListCommand::new(&request), &configuration, &transport).await;

    let err = result.unwrap_err();
    assert_eq!(err.status(), Some(HttpStatusCode::NOT_FOUND));
    assert!(err.to_string().contains("User nobody is unknown"));
}

#[tokio::test]
async fn given_500_with_html_body_when_executed_then_uses_reason_phrase() {
    let transport = ScriptedTransport::responding(500, "<html><body>Oops</body></html>");
    let configuration = anonymous_configuration();
    let request = ListRequest::new("bob").unwrap();

    let result = execute(&ListCommand::new(&request), &configuration, &transport).await;

    match result {
        Err(RpcError::Service { message, .. }) => assert_eq!(message, "Internal Server Error"),
        other => panic!("Expected service error, got {other:?}"),
    }
}

/// **VALUE**: Verifies that the HTML sign-in page is reported as an authentication failure.
///
/// **WHY THIS MATTERS**: With a stale token the service redirects to its login page and
/// answers 200 with HTML. Reporting that as "invalid JSON" sends users hunting for a
/// server bug instead of renewing their token.
#[tokio::test]
async fn given_sign_in_page_when_executed_then_returns_authentication_error() {
    let transport = ScriptedTransport::responding(
        200,
        "<html><head><title>Sign in Copr</title></head></html>",
    );
    let configuration = authenticated_configuration();
    let request = build_request();

    let result = execute(&BuildCommand::new(&request), &configuration, &transport).await;

    match result {
        Err(RpcError::Authentication { message, .. }) => assert_eq!(message, "Invalid API token"),
        other => panic!("Expected authentication error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_success_with_non_json_body_when_executed_then_returns_protocol_error() {
    let transport = ScriptedTransport::responding(200, "definitely not json");
    let configuration = anonymous_configuration();
    let request = ListRequest::new("bob").unwrap();

    let result = execute(&ListCommand::new(&request), &configuration, &transport).await;

    assert!(matches!(result, Err(RpcError::Protocol { .. })));
}

#[tokio::test]
async fn given_success_with_json_array_when_executed_then_returns_protocol_error() {
    let transport = ScriptedTransport::responding(200, "[1, 2, 3]");
    let configuration = anonymous_configuration();
    let request = ListRequest::new("bob").unwrap();

    let result = execute(&ListCommand::new(&request), &configuration, &transport).await;

    assert!(matches!(result, Err(RpcError::Protocol { .. })));
}

#[tokio::test]
async fn given_success_status_with_notok_output_when_executed_then_returns_service_error() {
    let transport =
        ScriptedTransport::responding(200, r#"{"output": "notok", "error": "Project is locked"}"#);
    let configuration = authenticated_configuration();
    let request = build_request();

    let result = execute(&BuildCommand::new(&request), &configuration, &transport).await;

    match result {
        Err(RpcError::Service {
            status, message, ..
        }) => {
            assert_eq!(status, HttpStatusCode::OK);
            assert_eq!(message, "Project is locked");
        }
        other => panic!("Expected service error, got {other:?}"),
    }
}

/// **VALUE**: Verifies that error bodies are only logged at debug level.
///
/// **WHY THIS MATTERS**: The CLI shows warnings by default. A 5xx answered with a full
/// HTML error page would otherwise flood stderr before the one-line error message.
#[tokio::test]
async fn given_error_page_when_executed_then_body_is_not_logged_above_debug() {
    // GIVEN: Log capture and an HTML error page with a recognizable marker
    capture_logs();
    let marker = "error-page-marker-5c1e";
    let transport = ScriptedTransport::responding(
        502,
        &format!("<html><body>{marker} Bad Gateway</body></html>"),
    );
    let configuration = anonymous_configuration();
    let request = ListRequest::new("bob").unwrap();

    // WHEN: The command fails
    let result = execute(&ListCommand::new(&request), &configuration, &transport).await;
    assert!(matches!(result, Err(RpcError::Service { .. })));

    // THEN: The body was logged, but never at warn or error
    let records = captured_logs_containing(marker);
    assert!(!records.is_empty(), "raw body should still reach the debug log");
    assert!(
        records.iter().all(|(level, _)| *level >= Level::Debug),
        "body logged above debug: {records:?}"
    );
}
