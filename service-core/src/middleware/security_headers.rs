use axum::{extract::Request, http::header, middleware::Next, response::IntoResponse};

macro_rules! script_cdn {
    () => {
        "https://unpkg.com"
    };
}

/// Script origin allowed on HTML pages (htmx is loaded from this CDN).
pub const SCRIPT_CDN: &str = script_cdn!();

// htmx swaps fragments and injects its indicator styles inline
const HTML_CSP: &str = concat!(
    "default-src 'self'; script-src 'self' ",
    script_cdn!(),
    "; style-src 'self' 'unsafe-inline'; img-src 'self' data:; \
     connect-src 'self'; frame-ancestors 'none'"
);

const API_CSP: &str = "default-src 'none'; frame-ancestors 'none'";

pub async fn security_headers_middleware(req: Request, next: Next) -> impl IntoResponse {
    let mut response = next.run(req).await;

    let is_html = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("text/html"));

    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        header::HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::X_FRAME_OPTIONS,
        header::HeaderValue::from_static("DENY"),
    );

    let policy = if is_html { HTML_CSP } else { API_CSP };
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        header::HeaderValue::from_static(policy),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::Request as HttpRequest,
        middleware::from_fn,
        response::{Html, Json},
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { Html("<p>hi</p>") }))
            .route(
                "/api",
                get(|| async { Json(serde_json::json!({ "ok": true })) }),
            )
            .layer(from_fn(security_headers_middleware))
    }

    async fn csp_for(uri: &str) -> String {
        let response = app()
            .oneshot(HttpRequest::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        response.headers()[header::CONTENT_SECURITY_POLICY]
            .to_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn html_pages_allow_cdn_scripts() {
        let csp = csp_for("/").await;
        assert!(csp.contains(&format!("script-src 'self' {};", SCRIPT_CDN)));
        assert!(csp.contains("frame-ancestors 'none'"));
    }

    #[tokio::test]
    async fn json_responses_get_locked_down_policy() {
        let csp = csp_for("/api").await;
        assert!(csp.starts_with("default-src 'none'"));
    }
}
