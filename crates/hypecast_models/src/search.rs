//! DuckDuckGo Instant Answer enrichment client.

use async_trait::async_trait;
use hypecast_interface::SearchProvider;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

const DUCKDUCKGO_URL: &str = "https://api.duckduckgo.com/";
const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_RELATED_TOPICS: usize = 3;

#[derive(Debug, Deserialize)]
struct InstantAnswer {
    #[serde(rename = "Abstract", default)]
    abstract_text: String,
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<RelatedTopic>,
}

#[derive(Debug, Deserialize)]
struct RelatedTopic {
    // Topic groups in the API response have no Text field; they are skipped.
    #[serde(rename = "Text", default)]
    text: String,
}

/// Search enrichment backed by the DuckDuckGo Instant Answer API.
///
/// No API key is required. A failed or empty lookup yields `None`;
/// enrichment never fails a generation call.
#[derive(Debug, Clone)]
pub struct DuckDuckGoClient {
    client: Client,
    base_url: String,
}

impl DuckDuckGoClient {
    /// Creates a new search client.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(SEARCH_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: DUCKDUCKGO_URL.to_string(),
        }
    }

    /// Override the endpoint URL (used by tests against a local stub).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn format_answer(answer: &InstantAnswer) -> Option<String> {
        let mut context_parts = Vec::new();

        if !answer.abstract_text.is_empty() {
            context_parts.push(format!("Overview: {}", answer.abstract_text));
        }

        let topics: Vec<&str> = answer
            .related_topics
            .iter()
            .map(|t| t.text.as_str())
            .filter(|t| !t.is_empty())
            .take(MAX_RELATED_TOPICS)
            .collect();
        if !topics.is_empty() {
            context_parts.push(format!("Related Info: {}", topics.join(" | ")));
        }

        if context_parts.is_empty() {
            None
        } else {
            Some(context_parts.join("\n\n"))
        }
    }

    fn format_for_prompt(results: &str) -> String {
        format!(
            "SEARCHED INFORMATION:\n{}\n\nUse this information to make the content more accurate and relevant.",
            results
        )
    }
}

impl Default for DuckDuckGoClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoClient {
    #[instrument(skip(self), fields(provider = "duckduckgo"))]
    async fn search(&self, topic: &str) -> Option<String> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", topic),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await;

        let response = match response {
            Ok(r) if r.status().is_success() => r,
            Ok(r) => {
                warn!(status = %r.status(), "Search request rejected");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Search request failed");
                return None;
            }
        };

        let answer: InstantAnswer = match response.json().await {
            Ok(a) => a,
            Err(e) => {
                warn!(error = %e, "Failed to parse search response");
                return None;
            }
        };

        let formatted = Self::format_answer(&answer).map(|r| Self::format_for_prompt(&r));
        debug!(found = formatted.is_some(), "Search enrichment finished");
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_abstract_and_related_topics() {
        let answer = InstantAnswer {
            abstract_text: "A systems programming language.".to_string(),
            related_topics: vec![
                RelatedTopic {
                    text: "Memory safety".to_string(),
                },
                RelatedTopic {
                    text: String::new(),
                },
                RelatedTopic {
                    text: "Cargo".to_string(),
                },
            ],
        };

        let formatted = DuckDuckGoClient::format_answer(&answer).unwrap();
        assert!(formatted.starts_with("Overview: A systems programming language."));
        assert!(formatted.contains("Related Info: Memory safety | Cargo"));
    }

    #[test]
    fn empty_answer_yields_none() {
        let answer = InstantAnswer {
            abstract_text: String::new(),
            related_topics: vec![],
        };
        assert!(DuckDuckGoClient::format_answer(&answer).is_none());
    }

    #[test]
    fn prompt_wrapper_mentions_searched_information() {
        let wrapped = DuckDuckGoClient::format_for_prompt("Overview: x");
        assert!(wrapped.starts_with("SEARCHED INFORMATION:"));
        assert!(wrapped.contains("Overview: x"));
    }
}
