//! # genai-trace
//!
//! GenAI chat-completion span instrumentation with OpenTelemetry.
//!
//! Shows the standardized GenAI semantic-convention attribute vocabulary
//! (provider, operation, request parameters, message content, usage
//! counters) and the span lifecycle for an outbound client call, with
//! OTLP export when configured and stdout spans for local dev.

pub mod chat;
pub mod config;
pub mod error;
pub mod model;
pub mod telemetry;
