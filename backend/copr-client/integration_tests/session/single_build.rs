use super::configuration_for;

use copr_client::Session;
use models::{BuildDetailsRequest, CancelBuildRequest};

use serde_json::json;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn given_existing_build_when_details_requested_then_returns_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/coprs/build/42/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": "ok",
            "status": "running",
            "project": "myproj",
            "owner": "alice",
            "submitted_on": 1400000000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = Session::open(configuration_for(&server.uri(), false)).unwrap();
    let details = session
        .build_details(&BuildDetailsRequest::new(42).unwrap())
        .await
        .unwrap();

    assert_eq!(details.status(), "running");
    assert_eq!(details.owner(), "alice");
    assert_eq!(details.results(), None);
}

#[tokio::test]
async fn given_authenticated_session_when_build_cancelled_then_posts_to_cancel_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/coprs/cancel_build/42/"))
        .and(header_exists("authorization"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"output": "ok", "status": "canceled"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut session = Session::open(configuration_for(&server.uri(), true)).unwrap();
    let result = session
        .cancel_build(&CancelBuildRequest::new(42).unwrap())
        .await
        .unwrap();

    assert_eq!(result.status(), "canceled");
    session.close();
}
