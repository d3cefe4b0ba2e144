//! Single-shot AI generation.

use crate::parser::parse_response;
use crate::prompt::{build_single_prompt, resolve_context};
use hypecast_core::{CompletionRequest, ContentCategory, GeneratedContent};
use hypecast_error::HypecastResult;
use hypecast_interface::{CompletionDriver, SearchProvider};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Token budget for the single-shot prompt, which asks for all eight
/// sections in one response.
const SINGLE_SHOT_MAX_TOKENS: u32 = 3500;

/// Single-shot content generator.
///
/// Enriches the topic with search facts when a [`SearchProvider`] is
/// configured, sends one completion request covering every output
/// section, and parses the response into a structured record. Driver
/// failures propagate to the caller; parsing never fails.
pub struct AiGenerator<D> {
    driver: D,
    search: Option<Arc<dyn SearchProvider>>,
}

impl<D: CompletionDriver> AiGenerator<D> {
    /// Create a generator without search enrichment.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            search: None,
        }
    }

    /// Attach a search provider for topic enrichment.
    pub fn with_search(mut self, search: Arc<dyn SearchProvider>) -> Self {
        self.search = Some(search);
        self
    }

    /// Identifier of the model used for generation.
    pub fn model_name(&self) -> &str {
        self.driver.model_name()
    }

    /// Generate a full record for a topic.
    ///
    /// `user_context` is optional source material (an uploaded script or
    /// notes) merged into the prompt alongside any search facts. `model`
    /// overrides the driver's default model for this call.
    #[instrument(skip(self, user_context), fields(provider = self.driver.provider_name()))]
    pub async fn generate(
        &self,
        topic: &str,
        user_context: Option<&str>,
        model: Option<&str>,
    ) -> HypecastResult<GeneratedContent> {
        let search_context = match &self.search {
            Some(search) => search.search(topic).await,
            None => None,
        };
        let context = resolve_context(search_context, user_context);
        let prompt = build_single_prompt(topic, &context);

        let mut request = CompletionRequest::new(prompt).with_max_tokens(SINGLE_SHOT_MAX_TOKENS);
        if let Some(model) = model {
            request = request.with_model(model);
        } else {
            request = request.with_model(self.driver.model_name());
        }

        let raw = self.driver.complete(&request).await?;
        debug!(chars = raw.len(), "completion received");

        Ok(parse_response(&raw, topic, ContentCategory::FALLBACK))
    }
}
