//! The generated content record.

use crate::ContentCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Multi-platform content generated for a single topic and category.
///
/// A record is constructed fresh per generation request and is not
/// mutated afterwards, except that the caller may attach the persisted
/// `id` and `created_at` after a successful storage write.
///
/// Invariants upheld by the parser and the template generator:
/// every text field is populated (backfilled with deterministic defaults
/// when the upstream text omitted a section), and `twitter_thread`,
/// `cta`, and `hashtags` are never empty.
///
/// # Examples
///
/// ```
/// use hypecast_core::{ContentCategory, GeneratedContent};
///
/// let record = GeneratedContent {
///     topic: "Rust 2024 edition".to_string(),
///     category: ContentCategory::AiTrendingNews,
///     master_storyline: "The story".to_string(),
///     youtube_script: "[0:00] Hook".to_string(),
///     instagram_script: "HOOK".to_string(),
///     twitter_thread: vec!["Hook tweet".to_string()],
///     caption: "Caption".to_string(),
///     cta: vec!["Follow for more!".to_string()],
///     hashtags: vec!["#Rust".to_string()],
///     id: None,
///     created_at: None,
/// };
/// assert!(record.id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    /// The input topic the content was generated for
    pub topic: String,
    /// Content archetype
    pub category: ContentCategory,
    /// Canonical long-form narrative all platform variants derive from
    pub master_storyline: String,
    /// YouTube Shorts script with timestamps
    pub youtube_script: String,
    /// Instagram Reels script
    pub instagram_script: String,
    /// Ordered thread posts; post 1 is the hook
    pub twitter_thread: Vec<String>,
    /// Social media caption
    pub caption: String,
    /// Alternative call-to-action phrasings
    pub cta: Vec<String>,
    /// `#`-prefixed hashtags, ordered, without duplicates
    pub hashtags: Vec<String>,
    /// Persisted identifier, set after a successful storage write
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// Persistence timestamp, set after a successful storage write
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl GeneratedContent {
    /// Attach the persisted identifier and timestamp to a saved record.
    pub fn with_persisted(mut self, id: i32, created_at: DateTime<Utc>) -> Self {
        self.id = Some(id);
        self.created_at = Some(created_at);
        self
    }
}
