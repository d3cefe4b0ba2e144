//! Shared types for the repository interface.

use chrono::{DateTime, Utc};
use hypecast_core::ContentCategory;
use serde::{Deserialize, Serialize};

/// Summary row returned by history listings.
///
/// # Examples
///
/// ```
/// use hypecast_interface::HistoryEntry;
/// use hypecast_core::ContentCategory;
/// use chrono::Utc;
///
/// let entry = HistoryEntry {
///     id: 1,
///     topic: "New AI tool".to_string(),
///     category: ContentCategory::NewToolIntro,
///     created_at: Utc::now(),
/// };
/// assert_eq!(entry.id, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Persisted identifier
    pub id: i32,
    /// Original topic
    pub topic: String,
    /// Content archetype
    pub category: ContentCategory,
    /// When the record was persisted
    pub created_at: DateTime<Utc>,
}

/// Usage statistics over the stored history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentStats {
    /// Total records stored
    pub total_content_generated: i64,
    /// Records created within the last 7 days
    pub last_7_days: i64,
    /// Per-category counts, keyed by category identifier
    pub category_breakdown: std::collections::BTreeMap<String, i64>,
}
