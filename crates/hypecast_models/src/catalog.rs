//! Static catalog of supported OpenRouter models.

/// Display name to OpenRouter model identifier pairs.
pub const MODEL_CATALOG: &[(&str, &str)] = &[
    ("GPT-4 Turbo", "openai/gpt-4-turbo-preview"),
    ("GPT-4", "openai/gpt-4"),
    ("GPT-3.5 Turbo", "openai/gpt-3.5-turbo"),
    ("Claude 3.5 Sonnet", "anthropic/claude-3.5-sonnet"),
    ("Claude 3 Opus", "anthropic/claude-3-opus-20240229"),
    ("Claude 3 Haiku", "anthropic/claude-3-haiku-20240307"),
    ("Gemini Pro", "google/gemini-pro-1.5"),
    ("Llama 3.1 70B", "meta-llama/llama-3.1-70b-instruct"),
    ("Mixtral 8x7B", "mistralai/mixtral-8x7b-instruct"),
];

/// Look up the OpenRouter identifier for a display name.
///
/// # Examples
///
/// ```
/// use hypecast_models::model_id_for_name;
///
/// assert_eq!(model_id_for_name("GPT-4"), Some("openai/gpt-4"));
/// assert_eq!(model_id_for_name("Unknown"), None);
/// ```
pub fn model_id_for_name(name: &str) -> Option<&'static str> {
    MODEL_CATALOG
        .iter()
        .find(|(display, _)| *display == name)
        .map(|(_, id)| *id)
}

/// Display names of all cataloged models, in catalog order.
pub fn model_names() -> Vec<&'static str> {
    MODEL_CATALOG.iter().map(|(display, _)| *display).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lookup() {
        assert_eq!(
            model_id_for_name("Claude 3.5 Sonnet"),
            Some("anthropic/claude-3.5-sonnet")
        );
        assert_eq!(model_names().len(), MODEL_CATALOG.len());
    }
}
