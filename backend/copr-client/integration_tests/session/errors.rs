use super::configuration_for;

use copr_client::{RpcError, Session};
use models::ListRequest;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn given_server_error_with_json_body_when_called_then_message_is_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_json(json!({"output": "notok", "error": "Maintenance in progress"})),
        )
        .mount(&server)
        .await;

    let mut session = Session::open(configuration_for(&server.uri(), false)).unwrap();
    let err = session
        .list(&ListRequest::new("alice").unwrap())
        .await
        .unwrap_err();

    match err {
        RpcError::Service {
            status, message, ..
        } => {
            assert!(status.is_server_error());
            assert_eq!(message, "Maintenance in progress");
        }
        other => panic!("Expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_malformed_json_when_called_then_returns_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"repos\": [oops"))
        .mount(&server)
        .await;

    let mut session = Session::open(configuration_for(&server.uri(), false)).unwrap();
    let err = session
        .list(&ListRequest::new("alice").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, RpcError::Protocol { .. }));
}

/// **VALUE**: Verifies that a slow service surfaces as a transport timeout, not a hang.
///
/// **WHY THIS MATTERS**: The configured timeout is the only way an invocation ends early.
#[tokio::test]
async fn given_slow_server_when_timeout_elapses_then_returns_transport_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"repos": []}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let configuration = configuration_for(&server.uri(), false)
        .with_timeout(1)
        .unwrap();
    let mut session = Session::open(configuration).unwrap();
    let err = session
        .list(&ListRequest::new("alice").unwrap())
        .await
        .unwrap_err();

    match err {
        RpcError::Transport { is_timeout, .. } => assert!(is_timeout),
        other => panic!("Expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_unreachable_service_when_called_then_returns_transport_error() {
    let configuration = configuration_for("http://127.0.0.1:9", false);
    let mut session = Session::open(configuration).unwrap();

    let err = session
        .list(&ListRequest::new("alice").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, RpcError::Transport { .. }));
}
