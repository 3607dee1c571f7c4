//! LLM adapter used by ad generation.
//!
//! DESIGN
//! ======
//! One provider (Anthropic Messages API) configured from environment
//! variables. Callers depend on the [`LlmChat`] trait so services can be
//! tested against a scripted mock.

pub mod anthropic;
pub mod config;
pub mod types;

use config::LlmConfig;
pub use types::LlmChat;
use types::{ChatRequest, ChatResponse, LlmError};

/// Concrete LLM client configured by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: anthropic::AnthropicClient,
    model: String,
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let inner = anthropic::AnthropicClient::new(config.api_key, &config.base_url, config.timeouts)?;
        Ok(Self { inner, model: config.model })
    }

    /// Return the configured model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(&self, request: &ChatRequest<'_>) -> Result<ChatResponse, LlmError> {
        self.inner.chat(&self.model, request).await
    }
}
