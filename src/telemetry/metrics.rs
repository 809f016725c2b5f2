//! Metric instrument factories for GenAI client calls.
//!
//! Uses the OTel Meter API with the globally-registered `MeterProvider`.
//! All instruments are created lazily from the `"genai-trace"` meter.
//! Without an OTLP endpoint the global provider is a no-op, so recording
//! is always safe.

use std::time::Duration;

use opentelemetry::KeyValue;
use opentelemetry::metrics::{Histogram, Meter};

use crate::model::{ChatRequest, ChatResponse};
use crate::telemetry::semconv;

/// Returns the shared meter for genai-trace instruments.
fn meter() -> Meter {
    opentelemetry::global::meter(crate::telemetry::SCOPE_NAME)
}

/// Histogram: tokens used per operation.
/// Attributes: `gen_ai.provider.name`, `gen_ai.request.model`,
/// `gen_ai.token.type` ("input" | "output").
pub fn token_usage() -> Histogram<u64> {
    meter()
        .u64_histogram("gen_ai.client.token.usage")
        .with_description("Number of input and output tokens used per operation")
        .with_unit("{token}")
        .build()
}

/// Histogram: end-to-end client operation duration.
/// Attributes: `gen_ai.provider.name`, `gen_ai.request.model`.
pub fn operation_duration() -> Histogram<f64> {
    meter()
        .f64_histogram("gen_ai.client.operation.duration")
        .with_description("GenAI client operation duration")
        .with_unit("s")
        .build()
}

/// Record token usage and duration for one completed chat operation.
pub fn record_chat_metrics(request: &ChatRequest, response: &ChatResponse, elapsed: Duration) {
    let tokens = token_usage();
    tokens.record(
        response.usage.input_tokens.max(0) as u64,
        &[
            KeyValue::new(semconv::GEN_AI_PROVIDER_NAME, request.provider.clone()),
            KeyValue::new(semconv::GEN_AI_REQUEST_MODEL, request.model.clone()),
            KeyValue::new(semconv::GEN_AI_TOKEN_TYPE, "input"),
        ],
    );
    tokens.record(
        response.usage.output_tokens.max(0) as u64,
        &[
            KeyValue::new(semconv::GEN_AI_PROVIDER_NAME, request.provider.clone()),
            KeyValue::new(semconv::GEN_AI_REQUEST_MODEL, request.model.clone()),
            KeyValue::new(semconv::GEN_AI_TOKEN_TYPE, "output"),
        ],
    );

    operation_duration().record(
        elapsed.as_secs_f64(),
        &[
            KeyValue::new(semconv::GEN_AI_PROVIDER_NAME, request.provider.clone()),
            KeyValue::new(semconv::GEN_AI_REQUEST_MODEL, request.model.clone()),
        ],
    );
}
