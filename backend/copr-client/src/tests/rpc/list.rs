use crate::error::RpcError;
use crate::rpc::{ListCommand, RpcCommand};
use crate::transport::HttpMethod;

use models::ListRequest;

use serde_json::json;

#[test]
fn given_list_command_when_inspected_then_is_anonymous_get_without_arguments() {
    let request = ListRequest::new("bob").unwrap();
    let command = ListCommand::new(&request);

    assert!(!command.requires_authentication());
    assert_eq!(command.method(), HttpMethod::Get);
    assert_eq!(command.command_path().to_string(), "/api/coprs/bob/");
    assert!(command.extra_arguments().is_empty());
}

/// **VALUE**: Verifies that listed projects are attributed to the requested user and keep
/// the service's order.
#[test]
fn given_repos_when_parsed_then_returns_project_ids_for_requested_user() {
    let request = ListRequest::new("bob").unwrap();
    let body = json!({
        "output": "ok",
        "repos": [
            {"name": "tools", "description": "Handy tools"},
            {"name": "experiments", "description": ""},
            {"name": "legacy"}
        ]
    });

    let result = ListCommand::new(&request).parse_response(body).unwrap();

    let ids: Vec<String> = result.project_ids().map(ToString::to_string).collect();
    assert_eq!(ids, vec!["bob/tools", "bob/experiments", "bob/legacy"]);
    assert_eq!(result.projects()[0].description(), Some("Handy tools"));
    assert_eq!(result.projects()[1].description(), None, "blank description is dropped");
    assert_eq!(result.projects()[2].description(), None);
}

#[test]
fn given_empty_repos_when_parsed_then_returns_empty_result() {
    let request = ListRequest::new("bob").unwrap();

    let result = ListCommand::new(&request)
        .parse_response(json!({"repos": []}))
        .unwrap();

    assert!(result.is_empty());
}

#[test]
fn given_body_without_repos_when_parsed_then_returns_protocol_error() {
    let request = ListRequest::new("bob").unwrap();

    let result = ListCommand::new(&request).parse_response(json!({"output": "ok"}));

    assert!(matches!(result, Err(RpcError::Protocol { .. })));
}
