//! Trait definitions for completion drivers, search providers, and
//! the persistence store.

use crate::{ContentStats, HistoryEntry};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hypecast_core::{CompletionRequest, ContentCategory, GeneratedContent};
use hypecast_error::HypecastResult;

/// Core trait for text completion backends.
///
/// This is the minimal interface the generation core needs: a prompt in,
/// free text out. Providers surface transport and API failures as
/// errors; callers decide whether a failure is fatal (the whole batch
/// cannot start) or a per-request skip.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Generate completion text for a single request.
    async fn complete(&self, req: &CompletionRequest) -> HypecastResult<String>;

    /// Provider name (e.g., "openrouter").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when a request does not override it.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: CompletionDriver + ?Sized> CompletionDriver for std::sync::Arc<T> {
    async fn complete(&self, req: &CompletionRequest) -> HypecastResult<String> {
        (**self).complete(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Trait for topic enrichment via web search.
///
/// Implementations never fail a generation call: a search that errors or
/// finds nothing yields `None`, and the prompt proceeds without
/// enrichment.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Look up a topic and return prompt-ready context text, or `None`
    /// when nothing useful was found.
    async fn search(&self, topic: &str) -> Option<String>;
}

/// Trait for the content persistence store.
///
/// Pass-through CRUD over generated records. Save failures are expected
/// to be non-fatal to generation; the caller logs and returns the
/// unpersisted record.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Persist a record, returning its identifier and creation timestamp.
    async fn save(&self, content: &GeneratedContent) -> HypecastResult<(i32, DateTime<Utc>)>;

    /// Fetch a full record by identifier.
    async fn get(&self, id: i32) -> HypecastResult<GeneratedContent>;

    /// List recent generations, newest first, optionally filtered by
    /// category.
    async fn history(
        &self,
        limit: i64,
        category: Option<ContentCategory>,
    ) -> HypecastResult<Vec<HistoryEntry>>;

    /// Delete a record by identifier.
    async fn delete(&self, id: i32) -> HypecastResult<()>;

    /// Usage statistics over the stored history.
    async fn stats(&self) -> HypecastResult<ContentStats>;
}
