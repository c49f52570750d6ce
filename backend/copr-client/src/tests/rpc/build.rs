use crate::error::RpcError;
use crate::rpc::{BuildCommand, RpcCommand};
use crate::transport::HttpMethod;

use models::BuildRequest;

use serde_json::json;

fn request_with(urls: &[&str]) -> BuildRequest {
    BuildRequest::builder()
        .with_username("alice")
        .with_project_name("myproj")
        .with_source_rpms(urls.iter().copied())
        .build()
        .expect("valid request")
}

/// **VALUE**: Verifies that `pkgs` is the source RPM list joined by single spaces,
/// in request order, for every ordering of the input.
///
/// **WHY THIS MATTERS**: The service splits `pkgs` on spaces and queues builds in that
/// order. Sorting, deduplicating or using another separator would change which
/// packages get built, or in which order.
#[test]
fn given_any_url_order_when_extra_arguments_built_then_pkgs_preserves_order() {
    // GIVEN: Every permutation of three URLs
    let a = "http://x/a.src.rpm";
    let b = "http://x/b.src.rpm";
    let c = "http://x/c.src.rpm";
    let orderings = [
        [a, b, c],
        [a, c, b],
        [b, a, c],
        [b, c, a],
        [c, a, b],
        [c, b, a],
    ];

    for ordering in orderings {
        let request = request_with(&ordering);

        // WHEN: Building the form arguments
        let arguments = BuildCommand::new(&request).extra_arguments();

        // THEN: pkgs is exactly the space-joined input
        assert_eq!(arguments["pkgs"], ordering.join(" "));
    }
}

/// **VALUE**: Verifies that unset resource hints are left out entirely.
///
/// **BUG THIS CATCHES**: Would catch sending `memory=` / `timeout=` as empty strings,
/// which the service rejects as invalid integers.
#[test]
fn given_no_memory_or_timeout_when_extra_arguments_built_then_keys_are_absent() {
    let request = request_with(&["http://x/a.src.rpm"]);

    let arguments = BuildCommand::new(&request).extra_arguments();

    assert!(!arguments.contains_key("memory"));
    assert!(!arguments.contains_key("timeout"));
    assert_eq!(arguments.len(), 1);
}

#[test]
fn given_hints_and_chroots_when_extra_arguments_built_then_all_are_present() {
    let request = BuildRequest::builder()
        .with_username("alice")
        .with_project_name("myproj")
        .add_source_rpm("http://x/a.src.rpm")
        .with_memory(Some(2048))
        .with_timeout(Some(3600))
        .add_chroot("fedora-rawhide-x86_64")
        .add_chroot("epel-9-x86_64")
        .build()
        .unwrap();

    let arguments = BuildCommand::new(&request).extra_arguments();

    assert_eq!(arguments["memory"], "2048");
    assert_eq!(arguments["timeout"], "3600");
    assert_eq!(arguments["fedora-rawhide-x86_64"], "y");
    assert_eq!(arguments["epel-9-x86_64"], "y");
}

#[test]
fn given_build_command_when_inspected_then_is_authenticated_post_to_new_build() {
    let request = request_with(&["http://x/a.src.rpm"]);
    let command = BuildCommand::new(&request);

    assert!(command.requires_authentication());
    assert_eq!(command.method(), HttpMethod::Post);
    assert_eq!(
        command.command_path().to_string(),
        "/api/coprs/alice/myproj/new_build/"
    );
}

/// **VALUE**: Verifies the happy-path parse keeps the service's id order.
#[test]
fn given_well_formed_body_when_parsed_then_returns_ids_and_message() {
    let request = request_with(&["http://x/a.src.rpm"]);
    let body = json!({"ids": [101, 102], "message": "ok"});

    let result = BuildCommand::new(&request).parse_response(body).unwrap();

    assert_eq!(result.build_ids(), &[101, 102]);
    assert_eq!(result.message(), "ok");
}

/// **VALUE**: Verifies that a body without `ids` is a protocol error, not an empty result.
///
/// **WHY THIS MATTERS**: An empty id list would tell the user "nothing was built" when in
/// fact the outcome is unknown. A half-filled result must never escape the command.
#[test]
fn given_body_without_ids_when_parsed_then_returns_protocol_error() {
    let request = request_with(&["http://x/a.src.rpm"]);
    let body = json!({"message": "ok"});

    let result = BuildCommand::new(&request).parse_response(body);

    match result {
        Err(RpcError::Protocol { message, .. }) => assert!(message.contains("ids")),
        other => panic!("Expected protocol error, got {other:?}"),
    }
}

#[test]
fn given_ids_of_wrong_type_when_parsed_then_returns_protocol_error() {
    let request = request_with(&["http://x/a.src.rpm"]);
    let body = json!({"ids": ["101"], "message": "ok"});

    let result = BuildCommand::new(&request).parse_response(body);

    assert!(matches!(result, Err(RpcError::Protocol { .. })));
}
