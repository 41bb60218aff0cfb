//! Application startup and lifecycle management.

use crate::config::{CompanionConfig, CorsConfig};
use crate::handlers::{health, passage};
use crate::services::commentary::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::commentary::providers::TextProvider;
use crate::services::{build_http_client, CommentaryGateway, EsvScriptureGateway, ScriptureGateway};
use axum::http::{HeaderValue, Method};
use axum::middleware::from_fn;
use axum::{routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    security_headers::security_headers_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use service_core::shutdown::shutdown_signal;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state. Gateways are built once and shared by every
/// request.
#[derive(Clone)]
pub struct AppState {
    pub scripture: Arc<dyn ScriptureGateway>,
    pub commentary: CommentaryGateway,
}

impl AppState {
    /// Construct the real ESV and Gemini gateways from configuration.
    pub fn from_config(config: &CompanionConfig) -> Result<Self, AppError> {
        let client = build_http_client(config.upstream.timeout())
            .map_err(|e| AppError::InternalError(e.into()))?;

        let scripture = EsvScriptureGateway::new(client.clone(), config.esv.clone());

        let text_provider: Arc<dyn TextProvider> = Arc::new(GeminiTextProvider::new(
            client,
            GeminiConfig {
                api_key: config.google.api_key.clone(),
                model: config.google.text_model.clone(),
                base_url: config.google.base_url.clone(),
            },
        ));

        tracing::info!(
            model = %text_provider.model(),
            timeout_secs = config.upstream.timeout_secs,
            "Initialized scripture and commentary gateways"
        );

        Ok(Self {
            scripture: Arc::new(scripture),
            commentary: CommentaryGateway::new(text_provider),
        })
    }
}

fn cors_layer(cors: &CorsConfig) -> Result<CorsLayer, AppError> {
    let origin = if cors.allowed_origin == "*" {
        AllowOrigin::from(Any)
    } else {
        let value = HeaderValue::from_str(&cors.allowed_origin).map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "CORS_ALLOWED_ORIGIN '{}' is invalid: {}",
                cors.allowed_origin,
                e
            ))
        })?;
        AllowOrigin::exact(value)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET]))
}

/// Build the HTTP router with all routes and middleware.
pub fn build_router(state: AppState, cors: &CorsConfig) -> Result<Router, AppError> {
    let router = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
        .route("/api/scripture", get(passage::get_scripture))
        .route("/api/context", get(passage::get_context))
        .layer(cors_layer(cors)?)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(from_fn(request_id_middleware))
        .with_state(state);

    Ok(router)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: CompanionConfig) -> Result<Self, AppError> {
        let state = AppState::from_config(&config)?;
        Self::build_with_state(config, state).await
    }

    /// Build the application around pre-constructed gateways.
    pub async fn build_with_state(
        config: CompanionConfig,
        state: AppState,
    ) -> Result<Self, AppError> {
        let router = build_router(state, &config.cors)?;

        // Bind HTTP listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!("Companion service listening on port {}", self.port);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
