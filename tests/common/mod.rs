//! Common test utilities for e2e tests
//!
//! Builds the application router over the static registry and provides
//! helpers for issuing requests and decoding responses.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tower::util::ServiceExt;
use tower_http::trace::TraceLayer;

use network_identity_registry::infrastructure::driven_adapters::config::AppConfig;
use network_identity_registry::infrastructure::driven_adapters::static_catalog::StaticNetworkCatalog;
use network_identity_registry::infrastructure::driving_adapters::api_rest::{self, AppState};

/// Test application context
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Create a test application configured for `network`
    pub fn new(network: &str) -> Self {
        let config = create_test_config(network);
        let app_state = AppState::new(Arc::new(config), Arc::new(StaticNetworkCatalog::default()));

        let router = api_rest::router(app_state).layer(TraceLayer::new_for_http());

        Self { router }
    }

    /// Issue a GET request, returning the status and the raw body
    pub async fn get(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    /// Issue a GET request and decode a JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, uri: &str) -> (StatusCode, T) {
        let (status, body) = self.get(uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }
}

/// Create a test configuration
fn create_test_config(network: &str) -> AppConfig {
    let config_str = format!(
        r#"
[server]
host = "127.0.0.1"
port = 0

[network]
id = "{network}"
"#
    );

    AppConfig::from_toml_str(&config_str).expect("Failed to build test config")
}

/// Network response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkResponse {
    pub id: u32,
    pub name: String,
    pub hrp: String,
    pub well_known: bool,
    pub production: bool,
}

#[derive(Debug, Deserialize)]
pub struct DenominationResponse {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfoResponse {
    pub network: NetworkResponse,
    pub primary_network_id: String,
    pub platform_chain_id: String,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
