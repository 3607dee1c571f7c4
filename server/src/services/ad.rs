//! Ad generation: brand, summary and headline for a product description.
//!
//! DESIGN
//! ======
//! Three sequential completions, each feeding the next: the brand name is
//! extracted first, the summary is written around it, and the headline is
//! written from the summary. The language follows the target country.
//!
//! ERROR HANDLING
//! ==============
//! Each call is retried once on transport, rate-limit and 5xx failures.
//! An empty completion aborts the chain rather than producing blank copy.

use crate::llm::types::{ChatRequest, LlmChat, LlmError, Message};

const MAX_TOKENS: u32 = 4000;
const STOP_SEQUENCES: &[&str] = &["Human", "Question", "Customer", "Guru"];
const SUMMARY_PREFILL: &str = "Sure thing! Here is the description:";

const BRAND_TEMPERATURE: f32 = 0.0;
const SUMMARY_TEMPERATURE: f32 = 0.4;
const TITLE_TEMPERATURE: f32 = 0.7;

const ROLE_PREAMBLE: &str = "You are a highly skilled language model designed to write effective marketing content.";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AdError {
    #[error("document has no text")]
    EmptyDocument,
    #[error("llm call failed: {0}")]
    Llm(#[from] LlmError),
    #[error("llm returned an empty {0}")]
    EmptyCompletion(&'static str),
}

/// Whether the summary must follow prescription-drug advertising rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FdaGuideline {
    Follow,
    Ignore,
}

impl FdaGuideline {
    /// `"Yes"` follows the guidelines; any other value ignores them.
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        if raw == "Yes" { Self::Follow } else { Self::Ignore }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GeneratedAd {
    pub brand: String,
    pub title: String,
    pub summary: String,
}

#[must_use]
pub fn language_for_country(country: &str) -> &'static str {
    match country {
        "France" => "french",
        "Mexico" => "spanish",
        "Italy" => "italian",
        "Germany" => "german",
        "Brazil" => "portuguese",
        _ => "english",
    }
}

// =============================================================================
// PROMPTS
// =============================================================================

pub(crate) fn brand_prompt(document: &str) -> String {
    format!(
        "{ROLE_PREAMBLE}\n\
         You are responsible for generating marketing content for a new drug. \
         I will give you a description of the product surrounded by <description></description> tags. \
         Based on this input, extract the brand name. Only return the brand name.\n\n\
         <description>{document}</description>"
    )
}

pub(crate) fn summary_prompt(fda: FdaGuideline, document: &str, brand: &str, language: &str) -> String {
    let task = match fda {
        FdaGuideline::Follow => format!(
            "write a four sentence paragraph in {language} following FDA's prescription drug advertising \
             guidelines about the product."
        ),
        FdaGuideline::Ignore => format!(
            "write a four sentence paragraph in {language} describing the product benefits and why people \
             should use it. The description should be upbeat and make people feel like this product will make \
             their life better. Be sure to include a description of any potential side effects or other \
             warnings. End the description by instructing the reader to ask their doctor about the product."
        ),
    };
    format!(
        "{ROLE_PREAMBLE}\n\
         You are responsible for generating marketing content for a new drug named \"{brand}\". \
         I will give you a description of the product surrounded by <description></description> tags. \
         Based on this input, {task}\n\n\
         <description>{document}</description>\n\n\
         Remove the <description></description> tags."
    )
}

pub(crate) fn title_prompt(summary: &str, brand: &str, language: &str) -> String {
    format!(
        "{ROLE_PREAMBLE}\n\
         You are responsible for generating marketing content for a new drug named {brand}. \
         This drug has the following approved uses: \"{summary}\". \
         Create a one-sentence headline in {language} about {brand} that includes the name \"{brand}\" \
         and conveys good health and excitement. \
         Only return the headline in your response. Remove any text that is not part of the headline."
    )
}

fn clean_title(raw: &str) -> String {
    raw.trim().trim_matches('"').trim().to_owned()
}

// =============================================================================
// GENERATION
// =============================================================================

async fn complete(
    llm: &dyn LlmChat,
    what: &'static str,
    temperature: f32,
    messages: &[Message],
) -> Result<String, AdError> {
    let request = ChatRequest { max_tokens: MAX_TOKENS, temperature, system: "", messages, stop_sequences: STOP_SEQUENCES };

    let response = match llm.chat(&request).await {
        Ok(response) => response,
        Err(e) if e.retryable() => {
            tracing::warn!(error = %e, what, "llm call failed; retrying once");
            llm.chat(&request).await?
        }
        Err(e) => return Err(e.into()),
    };

    tracing::debug!(
        what,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        stop_reason = %response.stop_reason,
        "llm completion"
    );

    let text = response.text().trim().to_owned();
    if text.is_empty() {
        return Err(AdError::EmptyCompletion(what));
    }
    Ok(text)
}

/// Generate ad copy for `document` targeted at `country`.
///
/// # Errors
///
/// Returns [`AdError::EmptyDocument`] for blank input, or the first failing
/// completion.
pub async fn generate_ad(
    llm: &dyn LlmChat,
    document: &str,
    country: &str,
    fda: FdaGuideline,
) -> Result<GeneratedAd, AdError> {
    if document.trim().is_empty() {
        return Err(AdError::EmptyDocument);
    }
    let language = language_for_country(country);

    let brand = complete(llm, "brand", BRAND_TEMPERATURE, &[Message::user(brand_prompt(document))]).await?;

    let summary = complete(
        llm,
        "summary",
        SUMMARY_TEMPERATURE,
        &[
            Message::user(summary_prompt(fda, document, &brand, language)),
            Message::assistant(SUMMARY_PREFILL),
        ],
    )
    .await?;

    let title = complete(llm, "title", TITLE_TEMPERATURE, &[Message::user(title_prompt(&summary, &brand, language))]).await?;

    Ok(GeneratedAd { brand, title: clean_title(&title), summary })
}

#[cfg(test)]
#[path = "ad_test.rs"]
mod tests;
