//! OpenRouter chat-completions client.

use async_trait::async_trait;
use hypecast_core::CompletionRequest;
use hypecast_error::{
    GenerationError, GenerationErrorKind, HttpError, HypecastResult, JsonError,
};
use hypecast_interface::CompletionDriver;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// OpenRouter API client.
///
/// Speaks the OpenAI-compatible chat-completions wire format. Each
/// completion request is sent as a single user message with the
/// request's model, token budget, and temperature.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    site_url: String,
    site_name: String,
}

impl OpenRouterClient {
    /// Creates a new OpenRouter client.
    ///
    /// Reads the API key from `OPENROUTER_API_KEY`, and optional
    /// attribution headers from `OPENROUTER_SITE_URL` and
    /// `OPENROUTER_SITE_NAME`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set or the HTTP client
    /// cannot be initialized.
    #[instrument(skip_all, fields(model = %model))]
    pub fn new(model: String) -> HypecastResult<Self> {
        let api_key = std::env::var("OPENROUTER_API_KEY").map_err(|e| {
            GenerationError::new(GenerationErrorKind::Unavailable(format!(
                "OPENROUTER_API_KEY not set: {}",
                e
            )))
        })?;
        Self::with_api_key(api_key, model)
    }

    /// Creates a new OpenRouter client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip(api_key), fields(model = %model))]
    pub fn with_api_key(api_key: String, model: String) -> HypecastResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        let site_url = std::env::var("OPENROUTER_SITE_URL")
            .unwrap_or_else(|_| "https://hypecast.app".to_string());
        let site_name =
            std::env::var("OPENROUTER_SITE_NAME").unwrap_or_else(|_| "Hypecast".to_string());

        Ok(Self {
            client,
            api_key,
            base_url: OPENROUTER_URL.to_string(),
            model,
            site_url,
            site_name,
        })
    }

    /// Override the endpoint URL (used by tests against a local stub).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl CompletionDriver for OpenRouterClient {
    #[instrument(skip(self, req), fields(provider = "openrouter", model = %req.model))]
    async fn complete(&self, req: &CompletionRequest) -> HypecastResult<String> {
        let body = ChatRequest {
            model: &req.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &req.prompt,
            }],
            max_tokens: req.max_tokens,
            temperature: req.temperature,
        };

        debug!(url = %self.base_url, prompt_len = req.prompt.len(), "Sending OpenRouter request");

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("HTTP-Referer", &self.site_url)
            .header("X-Title", &self.site_name)
            .json(&body)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            return Err(HttpError::with_status(status, error_text).into());
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| JsonError::decoding("completion response", e.to_string()))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse(
                req.model.clone(),
            ))
            .into());
        }

        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "openrouter"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_wire_shape() {
        let body = ChatRequest {
            model: "openai/gpt-3.5-turbo",
            messages: vec![ChatMessage {
                role: "user",
                content: "hello",
            }],
            max_tokens: 100,
            temperature: 0.7,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "openai/gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_tokens"], 100);
    }

    #[test]
    fn chat_response_parses_first_choice() {
        let raw = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "generated text"}}
            ]
        }"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "generated text");
    }
}
