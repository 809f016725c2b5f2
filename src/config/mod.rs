//! Typed configuration from environment variables.
//!
//! Loads once at startup, fails fast on malformed values.
//! In local dev, call `dotenvy::dotenv().ok()` before this; deployed,
//! the process environment provides the vars.

use crate::error::{Error, Result};

/// Service name reported in telemetry when `OTEL_SERVICE_NAME` is unset.
pub const DEFAULT_SERVICE_NAME: &str = "genai-trace";

#[derive(Debug, Clone)]
pub struct Config {
    /// Optional OTLP collector endpoint (e.g. "http://localhost:4317").
    /// When `None`, spans are written to stdout for local dev.
    pub otel_endpoint: Option<String>,
    /// The service name reported in telemetry signals.
    pub service_name: String,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let otel_endpoint = std::env::var("OTEL_ENDPOINT").ok();
        if let Some(ref endpoint) = otel_endpoint {
            validate_endpoint(endpoint)?;
        }

        Ok(Self {
            otel_endpoint,
            service_name: std::env::var("OTEL_SERVICE_NAME")
                .unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn validate_endpoint(endpoint: &str) -> Result<()> {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "OTEL_ENDPOINT must be an http(s) URL, got '{endpoint}'"
        )))
    }
}
