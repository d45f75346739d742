#![allow(dead_code)]

use domino::types::{ApiKey, HostUrl};
use domino::{DominoClient, DominoConfig};
use serde_json::json;
use wiremock::matchers::{basic_auth, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "s3cr3t-api-key";
pub const PROJECT: &str = "marks/p1";

/// Start a mock Domino deployment reporting the given version.
pub async fn mock_domino(version: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/version"))
        .and(basic_auth("", API_KEY))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"version": version, "buildId": "1234"})),
        )
        .mount(&server)
        .await;
    server
}

pub fn config_for(server: &MockServer) -> DominoConfig {
    DominoConfig::new(
        HostUrl::normalize(server.uri()).unwrap(),
        PROJECT.parse().unwrap(),
        ApiKey::from(API_KEY),
    )
}

pub async fn connect(server: &MockServer) -> DominoClient {
    DominoClient::build(config_for(server))
        .unwrap()
        .connect()
        .await
        .unwrap()
}

/// Number of requests received, excluding the version check made when connecting.
pub async fn requests_after_connect(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() != "/version")
        .count()
}
