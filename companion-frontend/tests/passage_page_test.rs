mod common;

use axum::http::StatusCode;
use common::{context_body, error_body, router_for, scripture_body, TestApp};
use companion_frontend::models::view::{
    CONNECTION_ERROR, CONTEXT_CONNECTION_ERROR, CONTEXT_NOT_GENERATED, EMPTY_QUERY_WARNING,
    IDLE_CONTEXT, IDLE_SCRIPTURE, SCRIPTURE_NOT_FOUND,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const ROMANS: &str = "[28] And we know that for those who love God all things work together for good.";
const COMMENTARY: &str = "### Author and Date\nPaul, around AD 57.\n\n### Historical Context\nWritten to the church in Rome.";

async fn mount_success(app: &TestApp) {
    Mock::given(method("GET"))
        .and(path("/api/scripture"))
        .and(query_param("q", "Romans 8:28"))
        .respond_with(ResponseTemplate::new(200).set_body_json(scripture_body(ROMANS)))
        .mount(&app.api)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/context"))
        .and(query_param("q", "Romans 8:28"))
        .respond_with(ResponseTemplate::new(200).set_body_json(context_body(COMMENTARY)))
        .mount(&app.api)
        .await;
}

#[tokio::test]
async fn index_without_query_shows_idle_placeholders() {
    let app = TestApp::spawn().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.api)
        .await;

    let (status, body) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(IDLE_SCRIPTURE));
    assert!(body.contains(IDLE_CONTEXT));
    assert!(body.contains(r#"hx-get="/passage""#));
    assert!(!body.contains("hx-swap-oob"));
}

#[tokio::test]
async fn fragment_renders_scripture_and_commentary() {
    let app = TestApp::spawn().await;
    mount_success(&app).await;

    let (status, body) = app.get("/passage?q=Romans%208%3A28").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(ROMANS));
    assert!(body.contains("<h3>Author and Date</h3>"));
    assert!(body.contains("<h3>Historical Context</h3>"));
    assert!(body.contains(r#"id="scripture-panel""#));
    assert!(body.contains(r#"hx-swap-oob="true""#));
}

#[tokio::test]
async fn index_with_query_renders_results_server_side() {
    let app = TestApp::spawn().await;
    mount_success(&app).await;

    let (status, body) = app.get("/?q=%20Romans%208%3A28%20").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"value="Romans 8:28""#));
    assert!(body.contains(ROMANS));
    assert!(body.contains("<h3>Author and Date</h3>"));
}

#[tokio::test]
async fn blank_query_warns_without_calling_the_api() {
    let app = TestApp::spawn().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.api)
        .await;

    let (status, body) = app.get("/passage?q=%20%20").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(EMPTY_QUERY_WARNING));
    assert!(!body.contains(r#"id="scripture-panel""#));

    let (_, body) = app.get("/passage").await;
    assert!(body.contains(EMPTY_QUERY_WARNING));
}

#[tokio::test]
async fn scripture_failure_leaves_commentary_intact() {
    let app = TestApp::spawn().await;
    Mock::given(method("GET"))
        .and(path("/api/scripture"))
        .respond_with(ResponseTemplate::new(500).set_body_json(error_body("Failed to fetch scripture.")))
        .mount(&app.api)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/context"))
        .respond_with(ResponseTemplate::new(200).set_body_json(context_body(COMMENTARY)))
        .mount(&app.api)
        .await;

    let (_, body) = app.get("/passage?q=Nowhere%201%3A1").await;

    assert!(body.contains(SCRIPTURE_NOT_FOUND));
    assert!(body.contains("<h3>Author and Date</h3>"));
    assert!(!body.contains(CONTEXT_NOT_GENERATED));
}

#[tokio::test]
async fn commentary_failure_leaves_scripture_intact() {
    let app = TestApp::spawn().await;
    Mock::given(method("GET"))
        .and(path("/api/scripture"))
        .respond_with(ResponseTemplate::new(200).set_body_json(scripture_body(ROMANS)))
        .mount(&app.api)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/context"))
        .respond_with(ResponseTemplate::new(500).set_body_json(error_body("Failed to generate context.")))
        .mount(&app.api)
        .await;

    let (_, body) = app.get("/passage?q=Romans%208%3A28").await;

    assert!(body.contains(ROMANS));
    assert!(body.contains(CONTEXT_NOT_GENERATED));
    assert!(!body.contains(SCRIPTURE_NOT_FOUND));
}

#[tokio::test]
async fn unreachable_api_shows_connection_errors_in_both_panels() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let app = TestApp {
        api: wiremock::MockServer::start().await,
        router: router_for(&format!("http://127.0.0.1:{}", port)),
    };

    let (status, body) = app.get("/passage?q=John%203%3A16").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches(CONNECTION_ERROR).count(), 1);
    assert_eq!(body.matches(CONTEXT_CONNECTION_ERROR).count(), 1);
}

#[tokio::test]
async fn repeated_lookup_renders_the_same_page() {
    let app = TestApp::spawn().await;
    mount_success(&app).await;

    let (_, first) = app.get("/passage?q=Romans%208%3A28").await;
    let (_, second) = app.get("/passage?q=Romans%208%3A28").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn html_pages_carry_security_headers() {
    let app = TestApp::spawn().await;

    let response = {
        use axum::body::Body;
        use axum::http::Request;
        use tower::util::ServiceExt;
        app.router
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap()
    };

    assert!(response.headers().contains_key("content-security-policy"));
    assert!(response.headers().contains_key("x-request-id"));
}
