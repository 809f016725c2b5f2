//! GenAI semantic convention span helpers for LLM operations.
//!
//! Spans are created through the OpenTelemetry span API directly: chat
//! completions are outbound client calls, so they carry `SpanKind::Client`
//! and an explicit status. Message lists are serialized to JSON text and
//! stored as single string-valued attributes, per the conventions.

use opentelemetry::KeyValue;
use opentelemetry::trace::{Span, SpanKind, Tracer};

use crate::error::Result;
use crate::model::{ChatRequest, ChatResponse, TokenUsage};
use crate::telemetry::semconv;

/// Span name for chat completion client calls.
pub const CHAT_SPAN_NAME: &str = "llm_call";

/// Operation name recorded for chat completions.
pub const CHAT_OPERATION: &str = "chat";

/// Start a CLIENT span for a chat completion and record request attributes.
///
/// The span stays open until [`Span::end`] (or drop); record the response
/// via [`record_response`] before closing it.
///
/// # Errors
/// Returns an error if the input message list cannot be serialized.
pub fn start_chat_span<T: Tracer>(tracer: &T, request: &ChatRequest) -> Result<T::Span> {
    let mut span = tracer
        .span_builder(CHAT_SPAN_NAME)
        .with_kind(SpanKind::Client)
        .start(tracer);

    span.set_attribute(KeyValue::new(
        semconv::GEN_AI_PROVIDER_NAME,
        request.provider.clone(),
    ));
    span.set_attribute(KeyValue::new(semconv::GEN_AI_OPERATION_NAME, CHAT_OPERATION));
    span.set_attribute(KeyValue::new(
        semconv::GEN_AI_REQUEST_MODEL,
        request.model.clone(),
    ));
    span.set_attribute(KeyValue::new(
        semconv::GEN_AI_REQUEST_TEMPERATURE,
        request.temperature,
    ));
    span.set_attribute(KeyValue::new(
        semconv::GEN_AI_REQUEST_MAX_TOKENS,
        request.max_tokens,
    ));
    span.set_attribute(KeyValue::new(
        semconv::GEN_AI_REQUEST_CHOICE_COUNT,
        request.choice_count,
    ));
    span.set_attribute(KeyValue::new(
        semconv::GEN_AI_SYSTEM_INSTRUCTIONS,
        request.system_instructions.clone(),
    ));
    span.set_attribute(KeyValue::new(
        semconv::GEN_AI_INPUT_MESSAGES,
        serde_json::to_string(&request.messages)?,
    ));

    Ok(span)
}

/// Record response attributes and token usage on the given span.
///
/// # Errors
/// Returns an error if the output message list cannot be serialized.
pub fn record_response<S: Span>(span: &mut S, response: &ChatResponse) -> Result<()> {
    span.set_attribute(KeyValue::new(
        semconv::GEN_AI_OUTPUT_MESSAGES,
        serde_json::to_string(&response.messages)?,
    ));
    span.set_attribute(KeyValue::new(
        semconv::GEN_AI_RESPONSE_ID,
        response.id.clone(),
    ));
    span.set_attribute(KeyValue::new(
        semconv::GEN_AI_RESPONSE_MODEL,
        response.model.clone(),
    ));
    span.set_attribute(KeyValue::new(
        semconv::GEN_AI_RESPONSE_FINISH_REASON,
        response.finish_reason.clone(),
    ));
    record_token_usage(span, &response.usage);
    Ok(())
}

/// Record token usage attributes on the given span.
pub fn record_token_usage<S: Span>(span: &mut S, usage: &TokenUsage) {
    span.set_attribute(KeyValue::new(
        semconv::GEN_AI_USAGE_INPUT_TOKENS,
        usage.input_tokens,
    ));
    span.set_attribute(KeyValue::new(
        semconv::GEN_AI_USAGE_OUTPUT_TOKENS,
        usage.output_tokens,
    ));
}
