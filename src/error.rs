//! Error types for genai-trace.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to encode message list: {0}")]
    MessageEncoding(#[from] serde_json::Error),

    #[error("telemetry setup error: {0}")]
    Telemetry(String),
}

pub type Result<T> = std::result::Result<T, Error>;
