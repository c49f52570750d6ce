// Unit tests for copr-client internals
// End-to-end tests against a mock HTTP server live in integration_tests/

mod rpc;
mod support;
