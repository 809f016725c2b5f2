//! Wire-shape tests for the chat message model.
//!
//! The JSON shapes are a compatibility contract: downstream consumers
//! parse the span attributes expecting exactly these field names.

use serde_json::json;

use genai_trace::model::{ChatRequest, InputMessage, OutputMessage};

#[test]
fn input_message_serializes_as_role_content_object() {
    let message = InputMessage::user("Explain quantum computing");
    let as_json = serde_json::to_value(&message).unwrap();
    assert_eq!(
        as_json,
        json!({"role": "user", "content": "Explain quantum computing"})
    );
}

#[test]
fn output_message_serializes_as_indexed_choice() {
    let choice = OutputMessage::assistant(0, "Certainly.", "stop");
    let as_json = serde_json::to_value(&choice).unwrap();
    assert_eq!(
        as_json,
        json!({
            "index": 0,
            "message": {"role": "assistant", "content": "Certainly."},
            "finish_reason": "stop"
        })
    );
}

#[test]
fn chat_request_builder_sets_parameters() {
    let request = ChatRequest::new("openai", "gpt-4")
        .temperature(0.7)
        .max_tokens(100)
        .choice_count(1)
        .system_instructions("You are a helpful AI assistant")
        .message(InputMessage::user("hello"));

    assert_eq!(request.provider, "openai");
    assert_eq!(request.model, "gpt-4");
    assert_eq!(request.temperature, 0.7);
    assert_eq!(request.max_tokens, 100);
    assert_eq!(request.choice_count, 1);
    assert_eq!(request.messages.len(), 1);
    assert_eq!(request.messages[0].role, "user");
}
