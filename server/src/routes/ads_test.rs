use super::*;
use crate::llm::types::LlmError;

#[test]
fn llm_failures_are_bad_gateway() {
    let err = AdError::Llm(LlmError::ApiResponse { status: 500, body: String::new() });
    assert_eq!(ad_error_to_status(&err), StatusCode::BAD_GATEWAY);
    assert_eq!(ad_error_to_status(&AdError::EmptyCompletion("title")), StatusCode::BAD_GATEWAY);
}

#[test]
fn blank_document_is_unprocessable() {
    assert_eq!(ad_error_to_status(&AdError::EmptyDocument), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn request_body_accepts_client_payload() {
    let request = client::net::types::AdRequest {
        document_id: Uuid::nil().to_string(),
        location: "Brazil".into(),
        fda: client::net::types::FdaGuideline::Ignore,
    };
    let body: GenerateAdBody = serde_json::from_value(serde_json::to_value(&request).unwrap()).unwrap();
    assert_eq!(body.document_id, Uuid::nil());
    assert_eq!(FdaGuideline::from_wire(&body.fda), FdaGuideline::Ignore);
}

#[test]
fn generated_ad_matches_client_shape() {
    let ad = GeneratedAd { brand: "B".into(), title: "T".into(), summary: "S".into() };
    let decoded: client::net::types::GeneratedAd = serde_json::from_value(serde_json::to_value(&ad).unwrap()).unwrap();
    assert_eq!(decoded.title, "T");
    assert_eq!(decoded.summary, "S");
}
