use super::*;
use crate::llm::types::{ChatRequest, ChatResponse, LlmError};

struct NeverLlm;

#[async_trait::async_trait]
impl LlmChat for NeverLlm {
    async fn chat(&self, _request: &ChatRequest<'_>) -> Result<ChatResponse, LlmError> {
        Err(LlmError::ApiRequest("unreachable".into()))
    }
}

#[tokio::test]
async fn test_state_has_no_llm_by_default() {
    let state = test_helpers::test_app_state();
    assert!(state.llm.is_none());
    assert!(!state.config.auth.sign_up_enabled);
}

#[tokio::test]
async fn clones_share_config_and_llm() {
    let state = test_helpers::test_app_state_with_llm(Arc::new(NeverLlm));
    let cloned = state.clone();
    assert!(Arc::ptr_eq(&state.config, &cloned.config));
    let (Some(a), Some(b)) = (&state.llm, &cloned.llm) else {
        panic!("llm should be configured");
    };
    assert!(Arc::ptr_eq(a, b));
}
