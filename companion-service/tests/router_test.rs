//! In-process router tests with mock gateways; no sockets involved.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use companion_service::config::CorsConfig;
use companion_service::services::commentary::prompt::build_commentary_prompt;
use companion_service::services::mock::{MockScriptureGateway, MockTextProvider};
use companion_service::services::CommentaryGateway;
use companion_service::startup::{build_router, AppState};
use companion_service::models::PassageQuery;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

fn router(scripture: Arc<MockScriptureGateway>, provider: Arc<MockTextProvider>) -> Router {
    let state = AppState {
        scripture,
        commentary: CommentaryGateway::new(provider),
    };
    build_router(
        state,
        &CorsConfig {
            allowed_origin: "*".to_string(),
        },
    )
    .expect("router")
}

async fn send(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn both_endpoints_receive_the_same_passage() {
    let scripture = Arc::new(MockScriptureGateway::replying("[16] For God so loved"));
    let provider = Arc::new(MockTextProvider::replying("### Author and Date"));
    let app = router(scripture.clone(), provider.clone());

    let (status, body) = send(app.clone(), "/api/scripture?q=John%203%3A16").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["passageText"], "[16] For God so loved");

    let (status, body) = send(app, "/api/context?q=John%203%3A16").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["contextText"], "### Author and Date");

    let passage = PassageQuery::parse(Some("John 3:16")).unwrap();
    assert_eq!(scripture.calls(), vec!["John 3:16".to_string()]);
    assert_eq!(provider.prompts(), vec![build_commentary_prompt(&passage)]);
}

#[tokio::test]
async fn blank_query_never_reaches_gateways() {
    let scripture = Arc::new(MockScriptureGateway::replying("unused"));
    let provider = Arc::new(MockTextProvider::echo());
    let app = router(scripture.clone(), provider.clone());

    let (status, body) = send(app.clone(), "/api/scripture?q=%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "A passage query (q) is required.");

    let (status, _) = send(app, "/api/context").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(scripture.calls().is_empty());
    assert!(provider.prompts().is_empty());
}

#[tokio::test]
async fn not_found_passage_is_a_server_error() {
    let app = router(
        Arc::new(MockScriptureGateway::not_found()),
        Arc::new(MockTextProvider::echo()),
    );

    let (status, body) = send(app, "/api/scripture?q=Hezekiah%201").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": "Failed to fetch scripture." }));
}

#[tokio::test]
async fn commentary_failure_hides_upstream_detail() {
    let app = router(
        Arc::new(MockScriptureGateway::replying("text")),
        Arc::new(MockTextProvider::failing()),
    );

    let (status, body) = send(app, "/api/context?q=Jude%201").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "error": "Failed to generate context." }));
}

#[tokio::test]
async fn repeated_queries_are_idempotent() {
    let app = router(
        Arc::new(MockScriptureGateway::replying("[1] The LORD is my shepherd")),
        Arc::new(MockTextProvider::echo()),
    );

    let first = send(app.clone(), "/api/context?q=Psalm%2023").await;
    let second = send(app, "/api/context?q=Psalm%2023").await;
    assert_eq!(first, second);
}
