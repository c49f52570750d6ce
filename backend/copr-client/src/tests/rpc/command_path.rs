use crate::rpc::CommandPath;

use url::Url;

#[test]
fn given_root_base_url_when_resolved_then_appends_path_with_trailing_slash() {
    let base = Url::parse("https://copr.example.org").unwrap();
    let path = CommandPath::coprs().segment("alice").segment("myproj");

    let url = path.resolve(&base).unwrap();

    assert_eq!(url.as_str(), "https://copr.example.org/api/coprs/alice/myproj/");
}

/// **VALUE**: Verifies that a base URL with its own path prefix is kept.
///
/// **WHY THIS MATTERS**: Self-hosted instances are often served below a prefix
/// (e.g. `https://host/copr/`). Dropping it would send every call to the wrong place.
#[test]
fn given_base_url_with_prefix_when_resolved_then_keeps_prefix() {
    for base in ["https://host.example/copr", "https://host.example/copr/"] {
        let base = Url::parse(base).unwrap();

        let url = CommandPath::coprs().segment("bob").resolve(&base).unwrap();

        assert_eq!(url.as_str(), "https://host.example/copr/api/coprs/bob/");
    }
}

/// **VALUE**: Verifies that user-controlled segments cannot add path components.
///
/// **BUG THIS CATCHES**: Would catch string concatenation of segments, which lets a
/// project name like `../../admin` or `a/b` address a different endpoint.
#[test]
fn given_segment_with_slashes_when_resolved_then_slashes_are_escaped() {
    let base = Url::parse("https://copr.example.org/").unwrap();
    let path = CommandPath::coprs()
        .segment("alice")
        .segment("../../admin")
        .segment("new_build");

    let url = path.resolve(&base).unwrap();

    assert_eq!(url.path_segments().unwrap().count(), 6);
    assert!(url.path().contains("..%2F..%2Fadmin"));
    assert!(url.path().ends_with("/new_build/"));
}

#[test]
fn given_base_url_with_query_when_resolved_then_query_is_dropped() {
    let base = Url::parse("https://copr.example.org/?lang=en#top").unwrap();

    let url = CommandPath::coprs().resolve(&base).unwrap();

    assert_eq!(url.as_str(), "https://copr.example.org/api/coprs/");
}
