use super::configuration_for;

use copr_client::{RpcError, Session};
use models::{ProjectChrootRequest, ProjectDetailsRequest, SearchRequest};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the project detail endpoint end to end, without credentials.
#[tokio::test]
async fn given_existing_project_when_details_requested_then_returns_repositories() {
    // GIVEN: A project with one published repository
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/coprs/bob/tools/detail/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": "ok",
            "detail": {
                "name": "tools",
                "description": "Handy tools",
                "instructions": "Enable with dnf copr",
                "last_modified": 1_700_000_000,
                "additional_repos": "",
                "yum_repos": {
                    "fedora-40-x86_64": "https://results.example.org/bob/tools/fedora-40-x86_64/"
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Requesting details through an authenticated session
    let mut session = Session::open(configuration_for(&server.uri(), true)).unwrap();
    let details = session
        .project_details(&ProjectDetailsRequest::new("bob", "tools").unwrap())
        .await
        .unwrap();

    // THEN: Fields are mapped and no credentials were sent
    assert_eq!(details.id().to_string(), "bob/tools");
    assert_eq!(details.instructions(), Some("Enable with dnf copr"));
    assert_eq!(details.yum_repos().len(), 1);
    let received = server.received_requests().await.unwrap();
    assert!(received[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn given_unknown_project_when_details_requested_then_not_found_names_project() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/coprs/bob/ghost/detail/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut session = Session::open(configuration_for(&server.uri(), false)).unwrap();
    let err = session
        .project_details(&ProjectDetailsRequest::new("bob", "ghost").unwrap())
        .await
        .unwrap_err();

    match err {
        RpcError::Service { message, .. } => assert_eq!(message, "Project bob/ghost not found"),
        other => panic!("Expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_chroot_with_packages_when_requested_then_returns_package_names() {
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

    let mut session = Session::open(configuration_for(&server.uri(), false)).unwrap();
    let details = session
        .project_chroot(&ProjectChrootRequest::new("bob", "tools", "epel-9-x86_64").unwrap())
        .await
        .unwrap();

    assert_eq!(details.buildroot_pkgs(), &["gcc".to_string(), "make".to_string()]);
}

/// **VALUE**: Verifies that search results carry each project's own owner.
#[tokio::test]
async fn given_matching_projects_when_searched_then_returns_hits_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/coprs/search/tool/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": "ok",
            "repos": [
                {"username": "bob", "coprname": "tools", "description": "Handy tools"},
                {"username": "carol", "coprname": "toolchain"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = Session::open(configuration_for(&server.uri(), false)).unwrap();
    let result = session
        .search(&SearchRequest::new("tool").unwrap())
        .await
        .unwrap();

    let ids: Vec<String> = result.project_ids().map(ToString::to_string).collect();
    assert_eq!(ids, vec!["bob/tools", "carol/toolchain"]);
    assert_eq!(session.commands_executed(), 1);
}
