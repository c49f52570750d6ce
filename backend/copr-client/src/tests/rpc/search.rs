use crate::error::RpcError;
use crate::rpc::{RpcCommand, SearchCommand};
use crate::transport::HttpMethod;

use models::SearchRequest;

use serde_json::json;
use url::Url;

/// **VALUE**: Verifies that the query is a single escaped path segment.
///
/// **BUG THIS CATCHES**: A query like `a/b` concatenated into the path would hit
/// `/api/coprs/search/a/b/` and search for `a` only.
#[test]
fn given_query_with_slash_when_path_built_then_stays_one_segment() {
    let request = SearchRequest::new("a/b").unwrap();
    let command = SearchCommand::new(&request);

    assert!(!command.requires_authentication());
    assert_eq!(command.method(), HttpMethod::Get);
    let url = command
        .command_path()
        .resolve(&Url::parse("https://copr.example.org/").unwrap())
        .unwrap();
    assert_eq!(url.path(), "/api/coprs/search/a%2Fb/");
}

#[test]
fn given_hits_from_several_users_when_parsed_then_each_keeps_its_owner() {
    let request = SearchRequest::new("tool").unwrap();
    let body = json!({
        "output": "ok",
        "repos": [
            {"username": "alice", "coprname": "tools", "description": "Handy tools"},
            {"username": "bob", "coprname": "toolbox", "description": null}
        ]
    });

    let result = SearchCommand::new(&request).parse_response(body).unwrap();

    let ids: Vec<String> = result.project_ids().map(ToString::to_string).collect();
    assert_eq!(ids, vec!["alice/tools", "bob/toolbox"]);
    assert_eq!(result.projects()[0].description(), Some("Handy tools"));
    assert_eq!(result.projects()[1].description(), None);
}

#[test]
fn given_hit_without_owner_when_parsed_then_returns_protocol_error() {
    let request = SearchRequest::new("tool").unwrap();

    let result = SearchCommand::new(&request)
        .parse_response(json!({"repos": [{"coprname": "tools"}]}));

    assert!(matches!(result, Err(RpcError::Protocol { .. })));
}
