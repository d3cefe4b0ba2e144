//! Request types for completion drivers.

use serde::{Deserialize, Serialize};

/// A single-shot text completion request.
///
/// # Examples
///
/// ```
/// use hypecast_core::CompletionRequest;
///
/// let request = CompletionRequest::new("Write a haiku about borrowing")
///     .with_model("openai/gpt-3.5-turbo")
///     .with_max_tokens(200);
///
/// assert_eq!(request.max_tokens, 200);
/// assert_eq!(request.temperature, 0.7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// The prompt to send as a single user message
    pub prompt: String,
    /// Model identifier understood by the provider
    pub model: String,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl CompletionRequest {
    /// Default model when the caller does not pick one.
    pub const DEFAULT_MODEL: &'static str = "openai/gpt-3.5-turbo";

    /// Create a request with the default model, 2000 max tokens, and
    /// temperature 0.7.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: Self::DEFAULT_MODEL.to_string(),
            max_tokens: 2000,
            temperature: 0.7,
        }
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the token budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}
