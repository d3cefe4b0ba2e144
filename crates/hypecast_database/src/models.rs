//! Diesel models for the content_history table.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use hypecast_core::{ContentCategory, GeneratedContent};
use hypecast_error::{DatabaseError, DatabaseErrorKind, HypecastResult};
use serde_json::Value as JsonValue;

/// Database row for the content_history table.
///
/// List-valued sections (thread posts, CTA options, hashtags) are
/// stored as JSONB arrays of strings.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::content_history)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ContentRow {
    pub id: i32,
    pub topic: String,
    pub category: String,
    pub master_storyline: String,
    pub youtube_script: String,
    pub instagram_script: String,
    pub twitter_thread: JsonValue,
    pub caption: String,
    pub cta: JsonValue,
    pub hashtags: JsonValue,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for persisting a generated record.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::content_history)]
pub struct NewContentRow {
    pub topic: String,
    pub category: String,
    pub master_storyline: String,
    pub youtube_script: String,
    pub instagram_script: String,
    pub twitter_thread: JsonValue,
    pub caption: String,
    pub cta: JsonValue,
    pub hashtags: JsonValue,
}

fn decode_string_list(column: &str, value: JsonValue) -> HypecastResult<Vec<String>> {
    serde_json::from_value(value).map_err(|e| {
        DatabaseError::new(DatabaseErrorKind::ColumnDecode {
            column: column.to_string(),
            message: e.to_string(),
        })
        .into()
    })
}

impl ContentRow {
    /// Decode a stored row back into a domain record.
    ///
    /// Unknown category identifiers resolve to the fallback category,
    /// matching parser behavior, so old rows survive category renames.
    pub fn into_content(self) -> HypecastResult<GeneratedContent> {
        Ok(GeneratedContent {
            topic: self.topic,
            category: ContentCategory::from_identifier(&self.category),
            master_storyline: self.master_storyline,
            youtube_script: self.youtube_script,
            instagram_script: self.instagram_script,
            twitter_thread: decode_string_list("twitter_thread", self.twitter_thread)?,
            caption: self.caption,
            cta: decode_string_list("cta", self.cta)?,
            hashtags: decode_string_list("hashtags", self.hashtags)?,
            id: Some(self.id),
            created_at: Some(self.created_at),
        })
    }
}

impl NewContentRow {
    /// Build an insertable row from a generated record.
    pub fn from_content(content: &GeneratedContent) -> Self {
        Self {
            topic: content.topic.clone(),
            category: content.category.as_str().to_string(),
            master_storyline: content.master_storyline.clone(),
            youtube_script: content.youtube_script.clone(),
            instagram_script: content.instagram_script.clone(),
            twitter_thread: JsonValue::from(content.twitter_thread.clone()),
            caption: content.caption.clone(),
            cta: JsonValue::from(content.cta.clone()),
            hashtags: JsonValue::from(content.hashtags.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> ContentRow {
        ContentRow {
            id: 7,
            topic: "Topic".to_string(),
            category: "trending_ai_model".to_string(),
            master_storyline: "Story".to_string(),
            youtube_script: "YT".to_string(),
            instagram_script: "IG".to_string(),
            twitter_thread: serde_json::json!(["a", "b"]),
            caption: "Cap".to_string(),
            cta: serde_json::json!(["x"]),
            hashtags: serde_json::json!(["#AI"]),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn row_round_trips_to_domain_record() {
        let content = sample_row().into_content().unwrap();
        assert_eq!(content.id, Some(7));
        assert_eq!(content.category, ContentCategory::TrendingAiModel);
        assert_eq!(content.twitter_thread, vec!["a", "b"]);
    }

    #[test]
    fn unknown_category_falls_back() {
        let mut row = sample_row();
        row.category = "retired_category".to_string();
        let content = row.into_content().unwrap();
        assert_eq!(content.category, ContentCategory::FALLBACK);
    }

    #[test]
    fn malformed_list_column_reports_the_column() {
        let mut row = sample_row();
        row.cta = serde_json::json!({"not": "a list"});
        let err = row.into_content().unwrap_err();
        assert!(format!("{err}").contains("cta"));
    }

    #[test]
    fn insertable_mirrors_the_record() {
        let content = sample_row().into_content().unwrap();
        let new_row = NewContentRow::from_content(&content);
        assert_eq!(new_row.category, "trending_ai_model");
        assert_eq!(new_row.twitter_thread, serde_json::json!(["a", "b"]));
    }
}
