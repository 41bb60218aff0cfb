use secrecy::{ExposeSecret, Secret};
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

const DEFAULT_ESV_API_BASE_URL: &str = "https://api.esv.org";
const DEFAULT_GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_TEXT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct CompanionConfig {
    pub common: core_config::Config,
    pub esv: EsvConfig,
    pub google: GoogleConfig,
    pub upstream: UpstreamConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct EsvConfig {
    pub api_key: Secret<String>,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub api_key: Secret<String>,
    pub base_url: String,
    /// Model used for commentary (e.g., gemini-1.5-flash)
    pub text_model: String,
}

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// `*` or a single exact origin.
    pub allowed_origin: String,
}

impl CompanionConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        Self::from_lookup(common, |key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. Both API
    /// secrets are required and must be non-blank.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: Option<&str>| get_var(&lookup, key, default);

        let timeout_secs: u64 = get(
            "UPSTREAM_TIMEOUT_SECS",
            Some(&DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string()),
        )?
        .parse()
        .map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("UPSTREAM_TIMEOUT_SECS is invalid: {}", e))
        })?;

        let config = CompanionConfig {
            common,
            esv: EsvConfig {
                api_key: Secret::new(get("ESV_API_KEY", None)?),
                base_url: get("ESV_API_BASE_URL", Some(DEFAULT_ESV_API_BASE_URL))?,
            },
            google: GoogleConfig {
                api_key: Secret::new(get("GOOGLE_API_KEY", None)?),
                base_url: get("GEMINI_API_BASE_URL", Some(DEFAULT_GEMINI_API_BASE_URL))?,
                text_model: get("GENAI_TEXT_MODEL", Some(DEFAULT_TEXT_MODEL))?,
            },
            upstream: UpstreamConfig { timeout_secs },
            cors: CorsConfig {
                allowed_origin: get("CORS_ALLOWED_ORIGIN", Some("*"))?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        for (key, secret) in [
            ("ESV_API_KEY", &self.esv.api_key),
            ("GOOGLE_API_KEY", &self.google.api_key),
        ] {
            if secret.expose_secret().trim().is_empty() {
                return Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is set but empty",
                    key
                )));
            }
        }

        if self.upstream.timeout_secs == 0 {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "UPSTREAM_TIMEOUT_SECS must be greater than zero"
            )));
        }

        Ok(())
    }
}

fn get_var<F>(lookup: &F, key: &str, default: Option<&str>) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => Ok(val),
        None => default.map(str::to_string).ok_or_else(|| {
            AppError::ConfigError(anyhow::anyhow!("{} is required but not set", key))
        }),
    }
}
