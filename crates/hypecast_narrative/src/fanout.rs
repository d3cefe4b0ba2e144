//! Category fan-out orchestration.

use crate::parser::parse_response;
use crate::prompt::{build_category_prompt, resolve_context};
use hypecast_core::{CompletionRequest, ContentCategory, GeneratedContent};
use hypecast_error::HypecastResult;
use hypecast_interface::{CompletionDriver, SearchProvider};
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};

/// Token budget for each per-category request. Smaller than the
/// single-shot budget since each response covers one framework only.
const PER_CATEGORY_MAX_TOKENS: u32 = 2000;

/// Fan-out generator producing one record per content category.
///
/// The shared context (search facts plus user source material) is
/// resolved once and reused for every request, so all six outputs are
/// grounded in the same facts. Categories are processed in enumeration
/// order; a failing category is logged and skipped while the batch
/// continues.
pub struct FanoutGenerator<D> {
    driver: D,
    search: Option<Arc<dyn SearchProvider>>,
}

impl<D: CompletionDriver> FanoutGenerator<D> {
    /// Create a fan-out generator without search enrichment.
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

    /// Generate one record per category for a topic.
    ///
    /// The returned vector follows category enumeration order, minus any
    /// categories whose completion failed. An empty vector means every
    /// category failed; the caller decides how to surface that.
    #[instrument(skip(self, user_context), fields(provider = self.driver.provider_name()))]
    pub async fn generate_all(
        &self,
        topic: &str,
        user_context: Option<&str>,
        model: Option<&str>,
    ) -> HypecastResult<Vec<GeneratedContent>> {
        let search_context = match &self.search {
            Some(search) => search.search(topic).await,
            None => None,
        };
        let context = resolve_context(search_context, user_context);
        let model = model.unwrap_or_else(|| self.driver.model_name()).to_string();

        let mut results = Vec::with_capacity(ContentCategory::COUNT);
        for category in ContentCategory::iter() {
            match self.generate_one(topic, category, &context, &model).await {
                Ok(content) => results.push(content),
                Err(error) => {
                    warn!(%category, %error, "category generation failed, skipping");
                }
            }
        }

        info!(
            generated = results.len(),
            requested = ContentCategory::COUNT,
            "fan-out batch complete"
        );
        Ok(results)
    }

    async fn generate_one(
        &self,
        topic: &str,
        category: ContentCategory,
        context: &str,
        model: &str,
    ) -> HypecastResult<GeneratedContent> {
        let prompt = build_category_prompt(topic, category, context);
        let request = CompletionRequest::new(prompt)
            .with_model(model)
            .with_max_tokens(PER_CATEGORY_MAX_TOKENS);

        let raw = self.driver.complete(&request).await?;

        // The requested category is authoritative; a CATEGORY line in
        // the response cannot reassign the record to another framework.
        let mut content = parse_response(&raw, topic, category);
        content.category = category;
        Ok(content)
    }
}
