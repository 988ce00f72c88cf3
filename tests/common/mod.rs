//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::PathBuf;

use commit_msg::OpenAiClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get the path to test fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Get the path to a response fixture.
pub fn response_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("responses").join(name)
}

/// Read a fixture file as a string.
pub fn read_fixture(path: PathBuf) -> String {
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {:?}: {}", path, e))
}

/// Create a temporary directory for test output.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// API key the mock server expects.
pub const TEST_API_KEY: &str = "sk-test-key";

/// Client pointed at the mock server.
pub fn mock_client(server: &MockServer) -> OpenAiClient {
    OpenAiClient::with_base_url(TEST_API_KEY, server.uri())
}

/// Mount a chat completions endpoint replying with `status` and `body`.
pub async fn mount_completion(server: &MockServer, status: u16, body: String) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(status).set_body_raw(body, "application/json"),
        )
        .mount(server)
        .await;
}

/// Mount a chat completions endpoint replying with a response fixture.
pub async fn mount_fixture(server: &MockServer, fixture: &str) {
    mount_completion(server, 200, read_fixture(response_fixture(fixture))).await;
}
