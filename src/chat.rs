//! Simulated chat completion, traced end to end.
//!
//! One operation: emit a single `llm_call` CLIENT span carrying the full
//! GenAI attribute set for a fixed request/response pair, held open across
//! a short simulated provider latency so the timing shows up in trace UIs.

use std::time::{Duration, Instant};

use opentelemetry::trace::{Span, Status, Tracer};

use crate::error::Result;
use crate::model::{ChatRequest, ChatResponse, InputMessage, OutputMessage, TokenUsage};
use crate::telemetry::{genai, metrics};

/// Simulated provider latency.
const SIMULATED_LATENCY: Duration = Duration::from_millis(100);

/// Run one simulated chat completion against fixed sample data.
///
/// Produces exactly one completed `llm_call` span on the given tracer,
/// with OK status. Takes the tracer explicitly; there is no hidden
/// process-wide tracer lookup.
///
/// # Errors
/// Propagates message serialization failures unmodified; no retry.
pub async fn chat_complete_operation(tracer: &impl Tracer) -> Result<()> {
    let request = sample_request();
    let response = sample_response();
    trace_chat_completion(tracer, &request, &response).await
}

/// Emit one CLIENT span describing `request` and `response`.
///
/// The span opens before the simulated call and closes after the response
/// attributes are recorded; if recording fails, the span still finalizes
/// on drop and the error propagates to the caller.
pub async fn trace_chat_completion(
    tracer: &impl Tracer,
    request: &ChatRequest,
    response: &ChatResponse,
) -> Result<()> {
    let started = Instant::now();

    let mut span = genai::start_chat_span(tracer, request)?;

    // Stand-in for the provider round trip.
    tokio::time::sleep(SIMULATED_LATENCY).await;

    genai::record_response(&mut span, response)?;
    span.set_status(Status::Ok);
    span.end();

    metrics::record_chat_metrics(request, response, started.elapsed());
    tracing::info!(
        provider = %request.provider,
        model = %request.model,
        input_tokens = response.usage.input_tokens,
        output_tokens = response.usage.output_tokens,
        "chat completion span recorded"
    );

    Ok(())
}

fn sample_request() -> ChatRequest {
    ChatRequest::new("openai", "gpt-4")
        .temperature(0.7)
        .max_tokens(100)
        .choice_count(1)
        .system_instructions("You are a helpful AI assistant")
        .message(InputMessage::user("Explain quantum computing"))
}

fn sample_response() -> ChatResponse {
    ChatResponse {
        id: "chatcmpl-123abc".to_string(),
        model: "gpt-4-0613".to_string(),
        finish_reason: "stop".to_string(),
        messages: vec![OutputMessage::assistant(
            0,
            "Quantum computing is a revolutionary approach to computation.",
            "stop",
        )],
        usage: TokenUsage {
            input_tokens: 50,
            output_tokens: 180,
        },
    }
}
