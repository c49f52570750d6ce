use super::configuration_for;

use copr_client::Session;
use models::BuildRequest;

use serde_json::json;
use url::form_urlencoded;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: End-to-end build submission against a real HTTP server.
///
/// **WHY THIS MATTERS**: This is the contract with the service: the exact endpoint, the
/// `pkgs` encoding (space-joined, request order), basic auth, and the mapping of the JSON
/// answer to a `BuildResult`. Unit tests cover each piece; this proves they fit together
/// on the wire.
#[tokio::test]
async fn given_two_srpms_when_build_submitted_then_posts_space_joined_pkgs() {
    // GIVEN: A mock service expecting one authenticated build submission
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/coprs/alice/myproj/new_build/"))
        .and(header_exists("authorization"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"ids": [5], "message": "queued"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut session = Session::open(configuration_for(&server.uri(), true)).unwrap();
    let request = BuildRequest::builder()
        .with_username("alice")
        .with_project_name("myproj")
        .add_source_rpm("http://x/a.src.rpm")
        .add_source_rpm("http://x/b.src.rpm")
        .build()
        .unwrap();

    // WHEN: Submitting the build
    let result = session.build(&request).await.unwrap();

    // THEN: The result mirrors the response
    assert_eq!(result.build_ids(), &[5]);
    assert_eq!(result.message(), "queued");

    // AND: The form body carries exactly the joined URLs
    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    let form: Vec<(String, String)> = form_urlencoded::parse(&received[0].body)
        .into_owned()
        .collect();
    assert_eq!(
        form,
        vec![(
            "pkgs".to_string(),
            "http://x/a.src.rpm http://x/b.src.rpm".to_string()
        )]
    );

    let authorization = received[0]
        .headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(authorization.starts_with("Basic "));
}

#[tokio::test]
async fn given_memory_and_timeout_when_build_submitted_then_form_includes_them() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/coprs/alice/myproj/new_build/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"output": "ok", "ids": [11, 12], "message": "2 builds"})),
        )
        .mount(&server)
        .await;

    let mut session = Session::open(configuration_for(&server.uri(), true)).unwrap();
    let request = BuildRequest::builder()
        .with_username("alice")
        .with_project_name("myproj")
        .add_source_rpm("http://x/a.src.rpm")
        .with_memory(Some(4096))
        .with_timeout(Some(7200))
        .build()
        .unwrap();

    let result = session.build(&request).await.unwrap();

    assert_eq!(result.build_ids(), &[11, 12]);

    let received = server.received_requests().await.unwrap();
    let form: Vec<(String, String)> = form_urlencoded::parse(&received[0].body)
        .into_owned()
        .collect();
    assert!(form.contains(&("memory".to_string(), "4096".to_string())));
    assert!(form.contains(&("timeout".to_string(), "7200".to_string())));
}

/// **VALUE**: Verifies zero network traffic when credentials are missing.
#[tokio::test]
async fn given_anonymous_session_when_build_submitted_then_server_sees_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = Session::open(configuration_for(&server.uri(), false)).unwrap();
    let request = BuildRequest::builder()
        .with_username("alice")
        .with_project_name("myproj")
        .add_source_rpm("http://x/a.src.rpm")
        .build()
        .unwrap();

    let result = session.build(&request).await;

    assert!(matches!(
        result,
        Err(copr_client::RpcError::Authentication { .. })
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}
