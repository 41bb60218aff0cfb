#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use companion_frontend::config::ApiSettings;
use companion_frontend::services::companion_client::CompanionClient;
use companion_frontend::startup::build_router;
use companion_frontend::AppState;
use http_body_util::BodyExt;
use serde_json::json;
use std::sync::Arc;
use tower::util::ServiceExt;
use wiremock::MockServer;

pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Router wired to a mock passage API.
pub struct TestApp {
    pub api: MockServer,
    pub router: Router,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let api = MockServer::start().await;
        let router = router_for(&api.uri());
        Self { api, router }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }
}

pub fn router_for(base_url: &str) -> Router {
    let settings = ApiSettings {
        base_url: base_url.to_string(),
        request_timeout_secs: 5,
    };
    let client = Arc::new(CompanionClient::new(settings).expect("Failed to build client"));
    build_router(AppState::new(client), STATIC_DIR)
}

pub fn scripture_body(text: &str) -> serde_json::Value {
    json!({ "passageText": text })
}

pub fn context_body(text: &str) -> serde_json::Value {
    json!({ "contextText": text })
}

pub fn error_body(message: &str) -> serde_json::Value {
    json!({ "error": message })
}
