use super::configuration_for;

use copr_client::Session;
use models::ListRequest;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the listing endpoint, its anonymity and the result mapping.
#[tokio::test]
async fn given_user_with_projects_when_listed_then_returns_projects_in_order() {
    // GIVEN: A service listing two projects for bob
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/coprs/bob/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": "ok",
            "repos": [
                {"name": "tools", "description": "Handy tools"},
                {"name": "playground"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Listing with an authenticated session
    let mut session = Session::open(configuration_for(&server.uri(), true)).unwrap();
    let result = session.list(&ListRequest::new("bob").unwrap()).await.unwrap();

    // THEN: Projects are bob's, in service order
    let names: Vec<&str> = result.project_ids().map(|id| id.project_name()).collect();
    assert_eq!(names, vec!["tools", "playground"]);
    assert!(result.project_ids().all(|id| id.username() == "bob"));

    // AND: Listing never sends credentials
    let received = server.received_requests().await.unwrap();
    assert!(received[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn given_unknown_user_when_listed_then_returns_not_found_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/coprs/ghost/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut session = Session::open(configuration_for(&server.uri(), false)).unwrap();
    let err = session
        .list(&ListRequest::new("ghost").unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.status().map(|status| status.0), Some(404));
    assert!(err.to_string().contains("User ghost is unknown"));
}
