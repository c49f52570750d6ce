use crate::error::RpcError;
use crate::rpc::{ProjectChrootCommand, ProjectDetailsCommand, RpcCommand};
use crate::transport::HttpMethod;

use models::{ProjectChrootRequest, ProjectDetailsRequest};

use serde_json::json;

#[test]
fn given_details_command_when_inspected_then_is_anonymous_get_under_project() {
    let request = ProjectDetailsRequest::new("alice", "tools").unwrap();
    let command = ProjectDetailsCommand::new(&request);

    assert!(!command.requires_authentication());
    assert_eq!(command.method(), HttpMethod::Get);
    assert_eq!(command.command_path().to_string(), "/api/coprs/alice/tools/detail/");
    assert!(command.extra_arguments().is_empty());
    assert_eq!(command.not_found_message(), "Project alice/tools not found");
}

/// **VALUE**: Verifies the mapping of every detail field, including the split of the
/// space-joined repository list and the release-ordered yum repositories.
///
/// **WHY THIS MATTERS**: `additional_repos` arrives as one string. Passing it through
/// unsplit would print every URL as a single unusable entry.
#[test]
fn given_full_detail_body_when_parsed_then_maps_every_field() {
    // GIVEN: A detail body as the service sends it
    let request = ProjectDetailsRequest::new("alice", "tools").unwrap();
    let body = json!({
        "output": "ok",
        "detail": {
            "name": "tools",
            "description": "Handy tools",
            "instructions": "",
            "last_modified": 1_700_000_000,
            "additional_repos": "http://a.example.org/repo/  http://b.example.org/repo/",
            "yum_repos": {
                "fedora-40-x86_64": "https://copr.example.org/results/alice/tools/fedora-40-x86_64/",
                "epel-9-x86_64": "https://copr.example.org/results/alice/tools/epel-9-x86_64/"
            },
            "auto_createrepo": true
        }
    });

    // WHEN: Parsing
    let details = ProjectDetailsCommand::new(&request)
        .parse_response(body)
        .unwrap();

    // THEN: Texts, timestamp and repositories are mapped; blank instructions dropped
    assert_eq!(details.id().to_string(), "alice/tools");
    assert_eq!(details.description(), Some("Handy tools"));
    assert_eq!(details.instructions(), None);
    assert_eq!(details.last_modified(), Some(1_700_000_000));
    assert_eq!(
        details.additional_repos(),
        &[
            "http://a.example.org/repo/".to_string(),
            "http://b.example.org/repo/".to_string()
        ]
    );
    let releases: Vec<&str> = details.yum_repos().iter().map(|repo| repo.release()).collect();
    assert_eq!(releases, vec!["epel-9-x86_64", "fedora-40-x86_64"]);
}

#[test]
fn given_fresh_project_body_when_parsed_then_optional_parts_are_empty() {
    let request = ProjectDetailsRequest::new("alice", "tools").unwrap();
    let body = json!({"output": "ok", "detail": {"name": "tools", "last_modified": null}});

    let details = ProjectDetailsCommand::new(&request)
        .parse_response(body)
        .unwrap();

    assert_eq!(details.last_modified(), None);
    assert!(details.additional_repos().is_empty());
    assert!(details.yum_repos().is_empty());
}

#[test]
fn given_body_without_detail_when_parsed_then_returns_protocol_error() {
    let request = ProjectDetailsRequest::new("alice", "tools").unwrap();

    let result = ProjectDetailsCommand::new(&request).parse_response(json!({"output": "ok"}));

    assert!(matches!(result, Err(RpcError::Protocol { .. })));
}

#[test]
fn given_chroot_command_when_inspected_then_path_ends_with_chroot() {
    let request = ProjectChrootRequest::new("alice", "tools", "epel-9-x86_64").unwrap();
    let command = ProjectChrootCommand::new(&request);

    assert!(!command.requires_authentication());
    assert_eq!(command.method(), HttpMethod::Get);
    assert_eq!(
        command.command_path().to_string(),
        "/api/coprs/alice/tools/detail/epel-9-x86_64/"
    );
    assert_eq!(
        command.not_found_message(),
        "Chroot epel-9-x86_64 not found in project alice/tools"
    );
}

#[test]
fn given_buildroot_packages_when_parsed_then_split_into_names() {
    let request = ProjectChrootRequest::new("alice", "tools", "epel-9-x86_64").unwrap();
    let command = ProjectChrootCommand::new(&request);

    let details = command
        .parse_response(json!({"output": "ok", "buildroot_pkgs": "gcc  make\tcmake"}))
        .unwrap();
    assert_eq!(details.chroot(), "epel-9-x86_64");
    assert_eq!(details.buildroot_pkgs(), &["gcc", "make", "cmake"].map(String::from));

    let empty = command
        .parse_response(json!({"output": "ok", "buildroot_pkgs": null}))
        .unwrap();
    assert!(empty.buildroot_pkgs().is_empty());
}
