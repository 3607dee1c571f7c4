use super::*;

// =============================================================================
// LlmError::retryable
// =============================================================================

#[test]
fn retryable_api_request() {
    let err = LlmError::ApiRequest("conn refused".into());
    assert!(err.retryable());
}

#[test]
fn retryable_api_response_429_and_5xx() {
    for status in [429, 500, 503, 599] {
        let err = LlmError::ApiResponse { status, body: String::new() };
        assert!(err.retryable(), "status {status}");
    }
}

#[test]
fn not_retryable_client_errors() {
    for status in [400, 401, 404] {
        let err = LlmError::ApiResponse { status, body: String::new() };
        assert!(!err.retryable(), "status {status}");
    }
}

#[test]
fn not_retryable_config_and_parse_errors() {
    assert!(!LlmError::ConfigParse("x".into()).retryable());
    assert!(!LlmError::MissingApiKey { var: "K".into() }.retryable());
    assert!(!LlmError::ApiParse("json".into()).retryable());
    assert!(!LlmError::HttpClientBuild("tls".into()).retryable());
}

#[test]
fn error_display_includes_details() {
    let err = LlmError::MissingApiKey { var: "ANTHROPIC_API_KEY".into() };
    assert_eq!(err.to_string(), "missing API key: env var ANTHROPIC_API_KEY not set");
    let err = LlmError::ApiResponse { status: 500, body: "oops".into() };
    assert_eq!(err.to_string(), "API response error: status 500");
}

// =============================================================================
// ContentBlock serde
// =============================================================================

#[test]
fn content_block_text_round_trip() {
    let block: ContentBlock = serde_json::from_str(r#"{"type":"text","text":"hi"}"#).unwrap();
    assert_eq!(block, ContentBlock::Text { text: "hi".into() });
}

#[test]
fn content_block_unknown_type_maps_to_unknown() {
    let block: ContentBlock = serde_json::from_str(r#"{"type":"tool_use","id":"x"}"#).unwrap();
    assert_eq!(block, ContentBlock::Unknown);
}

// =============================================================================
// Message / ChatResponse
// =============================================================================

#[test]
fn message_constructors_set_roles() {
    assert_eq!(Message::user("q").role, "user");
    assert_eq!(Message::assistant("a").role, "assistant");
    assert_eq!(
        serde_json::to_value(Message::user("q")).unwrap(),
        serde_json::json!({ "role": "user", "content": "q" })
    );
}

#[test]
fn chat_response_text_joins_text_blocks_only() {
    let resp = ChatResponse {
        content: vec![
            ContentBlock::Thinking { thinking: "hmm".into() },
            ContentBlock::Text { text: "Hello ".into() },
            ContentBlock::Text { text: "world".into() },
        ],
        model: "m".into(),
        stop_reason: "end_turn".into(),
        input_tokens: 1,
        output_tokens: 2,
    };
    assert_eq!(resp.text(), "Hello world");
}
