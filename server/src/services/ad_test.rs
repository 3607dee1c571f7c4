use std::sync::Mutex;

use super::*;
use crate::llm::types::{ChatResponse, ContentBlock};

// =========================================================================
// MockLlm
// =========================================================================

#[derive(Debug, Clone)]
struct Seen {
    temperature: f32,
    messages: Vec<Message>,
    stop_sequences: Vec<String>,
    max_tokens: u32,
}

struct MockLlm {
    responses: Mutex<Vec<Result<ChatResponse, LlmError>>>,
    seen: Mutex<Vec<Seen>>,
}

impl MockLlm {
    fn new(responses: Vec<Result<ChatResponse, LlmError>>) -> Self {
        Self { responses: Mutex::new(responses), seen: Mutex::new(Vec::new()) }
    }

    fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }
}

fn text(value: &str) -> Result<ChatResponse, LlmError> {
    Ok(ChatResponse {
        content: vec![ContentBlock::Text { text: value.into() }],
        model: "mock".into(),
        stop_reason: "end_turn".into(),
        input_tokens: 1,
        output_tokens: 1,
    })
}

#[async_trait::async_trait]
impl LlmChat for MockLlm {
    async fn chat(&self, request: &ChatRequest<'_>) -> Result<ChatResponse, LlmError> {
        self.seen.lock().unwrap().push(Seen {
            temperature: request.temperature,
            messages: request.messages.to_vec(),
            stop_sequences: request.stop_sequences.iter().map(|s| (*s).to_owned()).collect(),
            max_tokens: request.max_tokens,
        });
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() { text("done") } else { responses.remove(0) }
    }
}

const DOC: &str = "Zentrava (zentravimab) is indicated for moderate plaque psoriasis.";

// =========================================================================
// language_for_country / FdaGuideline
// =========================================================================

#[test]
fn language_follows_country() {
    assert_eq!(language_for_country("France"), "french");
    assert_eq!(language_for_country("Mexico"), "spanish");
    assert_eq!(language_for_country("Italy"), "italian");
    assert_eq!(language_for_country("Germany"), "german");
    assert_eq!(language_for_country("Brazil"), "portuguese");
}

#[test]
fn unknown_countries_fall_back_to_english() {
    assert_eq!(language_for_country("United States"), "english");
    assert_eq!(language_for_country("france"), "english");
    assert_eq!(language_for_country(""), "english");
}

#[test]
fn only_exact_yes_follows_guidelines() {
    assert_eq!(FdaGuideline::from_wire("Yes"), FdaGuideline::Follow);
    assert_eq!(FdaGuideline::from_wire("No"), FdaGuideline::Ignore);
    assert_eq!(FdaGuideline::from_wire("yes"), FdaGuideline::Ignore);
}

// =========================================================================
// prompts
// =========================================================================

#[test]
fn summary_prompt_variants() {
    let follow = summary_prompt(FdaGuideline::Follow, DOC, "Zentrava", "german");
    assert!(follow.contains("FDA's prescription drug advertising"));
    assert!(follow.contains("in german"));
    assert!(follow.contains("\"Zentrava\""));
    assert!(!follow.contains("ask their doctor"));

    let ignore = summary_prompt(FdaGuideline::Ignore, DOC, "Zentrava", "english");
    assert!(ignore.contains("side effects"));
    assert!(ignore.contains("ask their doctor"));
    assert!(ignore.contains(&format!("<description>{DOC}</description>")));
}

#[test]
fn title_prompt_mentions_brand_and_summary() {
    let prompt = title_prompt("Clearer skin.", "Zentrava", "french");
    assert!(prompt.contains("\"Clearer skin.\""));
    assert!(prompt.contains("headline in french"));
}

#[test]
fn clean_title_strips_quotes_and_whitespace() {
    assert_eq!(clean_title("  \"Zentrava: clear days ahead!\"\n"), "Zentrava: clear days ahead!");
}

// =========================================================================
// generate_ad (with MockLlm)
// =========================================================================

#[tokio::test]
async fn generate_ad_chains_three_calls() {
    let mock = MockLlm::new(vec![text(" Zentrava \n"), text("Clearer skin, every day."), text("\"Zentrava brings joy\"")]);

    let ad = generate_ad(&mock, DOC, "France", FdaGuideline::Follow).await.unwrap();
    assert_eq!(ad, GeneratedAd {
        brand: "Zentrava".into(),
        title: "Zentrava brings joy".into(),
        summary: "Clearer skin, every day.".into(),
    });

    let seen = mock.seen();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen.iter().map(|s| s.temperature).collect::<Vec<_>>(), [0.0_f32, 0.4, 0.7]);
    for call in &seen {
        assert_eq!(call.max_tokens, 4000);
        assert_eq!(call.stop_sequences, ["Human", "Question", "Customer", "Guru"]);
    }

    assert!(seen[1].messages[0].content.contains("\"Zentrava\""));
    assert!(seen[1].messages[0].content.contains("in french"));
    assert_eq!(seen[1].messages.last().unwrap(), &Message::assistant(SUMMARY_PREFILL));
    assert!(seen[2].messages[0].content.contains("Clearer skin, every day."));
}

#[tokio::test]
async fn generate_ad_rejects_blank_document_without_calling_llm() {
    let mock = MockLlm::new(vec![]);
    let err = generate_ad(&mock, "  \n", "France", FdaGuideline::Follow).await.unwrap_err();
    assert!(matches!(err, AdError::EmptyDocument));
    assert!(mock.seen().is_empty());
}

#[tokio::test]
async fn generate_ad_retries_retryable_errors_once() {
    let mock = MockLlm::new(vec![
        Err(LlmError::ApiResponse { status: 529, body: "overloaded".into() }),
        text("Zentrava"),
        text("Summary."),
        text("Title"),
    ]);
    let ad = generate_ad(&mock, DOC, "Italy", FdaGuideline::Ignore).await.unwrap();
    assert_eq!(ad.brand, "Zentrava");
    assert_eq!(mock.seen().len(), 4);
}

#[tokio::test]
async fn generate_ad_gives_up_after_second_failure() {
    let mock = MockLlm::new(vec![
        Err(LlmError::ApiRequest("reset".into())),
        Err(LlmError::ApiRequest("reset".into())),
    ]);
    let err = generate_ad(&mock, DOC, "Italy", FdaGuideline::Ignore).await.unwrap_err();
    assert!(matches!(err, AdError::Llm(LlmError::ApiRequest(_))));
    assert_eq!(mock.seen().len(), 2);
}

#[tokio::test]
async fn generate_ad_does_not_retry_client_errors() {
    let mock = MockLlm::new(vec![Err(LlmError::ApiResponse { status: 400, body: String::new() })]);
    let err = generate_ad(&mock, DOC, "Brazil", FdaGuideline::Follow).await.unwrap_err();
    assert!(matches!(err, AdError::Llm(LlmError::ApiResponse { status: 400, .. })));
    assert_eq!(mock.seen().len(), 1);
}

#[tokio::test]
async fn generate_ad_fails_on_empty_completion() {
    let mock = MockLlm::new(vec![text("Zentrava"), text("   ")]);
    let err = generate_ad(&mock, DOC, "Germany", FdaGuideline::Follow).await.unwrap_err();
    assert!(matches!(err, AdError::EmptyCompletion("summary")));
}
