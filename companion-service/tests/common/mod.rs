#![allow(dead_code)]

use companion_service::config::{CompanionConfig, CorsConfig, EsvConfig, GoogleConfig, UpstreamConfig};
use companion_service::startup::Application;
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use wiremock::MockServer;

pub const ESV_TOKEN: &str = "test-esv-token";
pub const GOOGLE_KEY: &str = "test-google-key";
pub const MODEL: &str = "gemini-1.5-flash";
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";
pub const PASSAGE_PATH: &str = "/v3/passage/text/";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub esv: MockServer,
    pub gemini: MockServer,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service on a random port with both upstream APIs pointed
    /// at fresh mock servers.
    pub async fn spawn() -> Self {
        let esv = MockServer::start().await;
        let gemini = MockServer::start().await;

        let config = CompanionConfig {
            common: CoreConfig {
                port: 0,
                ..CoreConfig::default()
            },
            esv: EsvConfig {
                api_key: Secret::new(ESV_TOKEN.to_string()),
                base_url: esv.uri(),
            },
            google: GoogleConfig {
                api_key: Secret::new(GOOGLE_KEY.to_string()),
                base_url: gemini.uri(),
                text_model: MODEL.to_string(),
            },
            upstream: UpstreamConfig { timeout_secs: 2 },
            cors: CorsConfig {
                allowed_origin: "*".to_string(),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            esv,
            gemini,
            client,
        }
    }

    pub async fn get(&self, path_and_query: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path_and_query))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn scripture(&self, q: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/api/scripture", self.address))
            .query(&[("q", q)])
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn context(&self, q: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/api/context", self.address))
            .query(&[("q", q)])
            .send()
            .await
            .expect("Failed to send request")
    }
}

pub fn esv_body(passage: &str) -> serde_json::Value {
    serde_json::json!({ "passages": [passage] })
}

pub fn gemini_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}
