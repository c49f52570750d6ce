use crate::error::RpcError;
use crate::rpc::{BuildDetailsCommand, CancelBuildCommand, RpcCommand};
use crate::transport::HttpMethod;

use models::{BuildDetailsRequest, CancelBuildRequest};

use serde_json::json;

#[test]
fn given_details_command_when_inspected_then_is_anonymous_get() {
    let request = BuildDetailsRequest::new(42).unwrap();
    let command = BuildDetailsCommand::new(&request);

    assert!(!command.requires_authentication());
    assert_eq!(command.method(), HttpMethod::Get);
    assert_eq!(command.command_path().to_string(), "/api/coprs/build/42/");
    assert_eq!(command.not_found_message(), "Build 42 not found");
}

#[test]
fn given_full_details_body_when_parsed_then_maps_every_field() {
    let request = BuildDetailsRequest::new(42).unwrap();
    let body = json!({
        "output": "ok",
        "status": "succeeded",
        "project": "myproj",
        "owner": "alice",
        "results": "https://copr-be.example.org/results/alice/myproj/",
        "src_pkg": "http://x/a.src.rpm",
        "src_version": "1.0-1",
        "submitted_on": 1400000000,
        "started_on": 1400000060,
        "ended_on": null
    });

    let details = BuildDetailsCommand::new(&request)
        .parse_response(body)
        .unwrap();

    assert_eq!(details.build_id(), 42);
    assert_eq!(details.status(), "succeeded");
    assert_eq!(details.owner(), "alice");
    assert_eq!(details.project(), "myproj");
    assert_eq!(details.src_version(), Some("1.0-1"));
    assert_eq!(details.started_on(), Some(1_400_000_060));
    assert_eq!(details.ended_on(), None);
}

#[test]
fn given_details_body_without_status_when_parsed_then_returns_protocol_error() {
    let request = BuildDetailsRequest::new(42).unwrap();

    let result = BuildDetailsCommand::new(&request)
        .parse_response(json!({"project": "myproj", "owner": "alice"}));

    assert!(matches!(result, Err(RpcError::Protocol { .. })));
}

#[test]
fn given_cancel_command_when_inspected_then_is_authenticated_post() {
    let request = CancelBuildRequest::new(7).unwrap();
    let command = CancelBuildCommand::new(&request);

    assert!(command.requires_authentication());
    assert_eq!(command.method(), HttpMethod::Post);
    assert_eq!(
        command.command_path().to_string(),
        "/api/coprs/cancel_build/7/"
    );

    let result = command
        .parse_response(json!({"output": "ok", "status": "canceled"}))
        .unwrap();
    assert_eq!(result.build_id(), 7);
    assert_eq!(result.status(), "canceled");
}
