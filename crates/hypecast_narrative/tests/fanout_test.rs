//! Fan-out behavior against a scripted completion driver.

use async_trait::async_trait;
use hypecast_core::{CompletionRequest, ContentCategory, GeneratedContent};
use hypecast_error::{GenerationError, GenerationErrorKind, HypecastResult};
use hypecast_interface::{CompletionDriver, SearchProvider};
use hypecast_narrative::FanoutGenerator;
use std::sync::{Arc, Mutex};
use strum::IntoEnumIterator;

/// Driver that answers every prompt with a fixed marked-up response and
/// optionally fails for prompts mentioning specific category identifiers.
struct ScriptedDriver {
    fail_for: Vec<&'static str>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedDriver {
    fn new(fail_for: Vec<&'static str>) -> Self {
        Self {
            fail_for,
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CompletionDriver for ScriptedDriver {
    async fn complete(&self, req: &CompletionRequest) -> HypecastResult<String> {
        self.prompts.lock().unwrap().push(req.prompt.clone());
        if self.fail_for.iter().any(|id| req.prompt.contains(id)) {
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse(
                "scripted/model".to_string(),
            ))
            .into());
        }
        Ok("CATEGORY: new_tool_intro\n\
MASTER_STORYLINE:\nA storyline about the topic.\n\
YOUTUBE_SCRIPT:\n[0:00] Hook\n\
INSTAGRAM_SCRIPT:\nHOOK: line\n\
TWITTER_THREAD:\nTweet one\n---\nTweet two\n\
CAPTION:\nA caption.\n\
CTA:\nFollow!\n---\nShare!\n\
HASHTAGS:\n#AI #Rust"
            .to_string())
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted/model"
    }
}

struct FixedSearch;

#[async_trait]
impl SearchProvider for FixedSearch {
    async fn search(&self, _topic: &str) -> Option<String> {
        Some("fixed search facts".to_string())
    }
}

#[tokio::test]
async fn produces_one_record_per_category_in_enumeration_order() {
    let generator = FanoutGenerator::new(ScriptedDriver::new(Vec::new()));
    let results = generator.generate_all("Test topic", None, None).await.unwrap();

    assert_eq!(results.len(), ContentCategory::COUNT);
    let expected: Vec<ContentCategory> = ContentCategory::iter().collect();
    let got: Vec<ContentCategory> = results.iter().map(|r| r.category).collect();
    assert_eq!(got, expected);
}

#[tokio::test]
async fn requested_category_overrides_parsed_category_line() {
    // Every scripted response claims new_tool_intro, yet each record
    // keeps the category it was requested for.
    let generator = FanoutGenerator::new(ScriptedDriver::new(Vec::new()));
    let results = generator.generate_all("Test topic", None, None).await.unwrap();

    let news: Vec<&GeneratedContent> = results
        .iter()
        .filter(|r| r.category == ContentCategory::AiTrendingNews)
        .collect();
    assert_eq!(news.len(), 1);
}

#[tokio::test]
async fn failing_categories_are_skipped_not_fatal() {
    let generator = FanoutGenerator::new(ScriptedDriver::new(vec![
        "trending_ai_model",
        "github_open_source_repo",
    ]));
    let results = generator.generate_all("Test topic", None, None).await.unwrap();

    assert_eq!(results.len(), ContentCategory::COUNT - 2);
    assert!(results.iter().all(|r| r.category != ContentCategory::TrendingAiModel));
    assert!(results.iter().all(|r| r.category != ContentCategory::GithubOpenSourceRepo));
}

#[tokio::test]
async fn search_context_is_shared_across_the_batch() {
    let driver = Arc::new(ScriptedDriver::new(Vec::new()));
    let generator = FanoutGenerator::new(SharedDriver(driver.clone()))
        .with_search(Arc::new(FixedSearch));
    generator.generate_all("Test topic", Some("user notes"), None).await.unwrap();

    let prompts = driver.prompts.lock().unwrap();
    assert_eq!(prompts.len(), ContentCategory::COUNT);
    for prompt in prompts.iter() {
        assert!(prompt.contains("fixed search facts"));
        assert!(prompt.contains("user notes"));
    }
}

/// Arc wrapper so a test can inspect the driver after handing it to the
/// generator by value.
struct SharedDriver(Arc<ScriptedDriver>);

#[async_trait]
impl CompletionDriver for SharedDriver {
    async fn complete(&self, req: &CompletionRequest) -> HypecastResult<String> {
        self.0.complete(req).await
    }

    fn provider_name(&self) -> &'static str {
        self.0.provider_name()
    }

    fn model_name(&self) -> &str {
        self.0.model_name()
    }
}
